use serde::{Deserialize, Serialize};

/// How a parameter is passed at the call site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamDirection {
    /// Plain input parameter
    In,
    /// Passed by reference, caller-initialized
    Ref,
    /// Passed by reference, callee-initialized
    Out,
}

/// A single parameter of a method or indexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Fully resolved textual type name (treated as an opaque identifier)
    pub type_name: String,
    pub name: String,
    pub direction: ParamDirection,
}

impl ParameterDescriptor {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, direction: ParamDirection) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            direction,
        }
    }

    /// Plain input parameter
    pub fn input(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(type_name, name, ParamDirection::In)
    }

    pub fn by_ref(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(type_name, name, ParamDirection::Ref)
    }

    pub fn out(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(type_name, name, ParamDirection::Out)
    }
}

/// Member kind as reported by the type introspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    Method,
    Property,
    Indexer,
    Event,
}

/// One member of an interface surface, fully resolved by the introspector
///
/// All type names are textual and already qualified/instantiated; the
/// translator composes them verbatim and never re-parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub kind: MemberKind,
    pub name: String,
    /// Interface that declares this member (always populated by the introspector)
    pub declaring_type: String,
    /// Return type for methods, value type for properties/indexers.
    /// `"void"` marks a method without a result.
    pub return_type: String,
    pub parameters: Vec<ParameterDescriptor>,
    /// Property/indexer getter support
    pub can_read: bool,
    /// Property/indexer setter support
    pub can_write: bool,
    /// Declared delegate type of an event (e.g. `PropertyChangedEventHandler`)
    pub handler_type: Option<String>,
    /// Event argument type the handler shape normalizes to
    pub handler_args_type: Option<String>,
}

impl MemberDescriptor {
    pub fn method(
        name: impl Into<String>,
        declaring_type: impl Into<String>,
        return_type: impl Into<String>,
        parameters: Vec<ParameterDescriptor>,
    ) -> Self {
        Self {
            kind: MemberKind::Method,
            name: name.into(),
            declaring_type: declaring_type.into(),
            return_type: return_type.into(),
            parameters,
            can_read: false,
            can_write: false,
            handler_type: None,
            handler_args_type: None,
        }
    }

    pub fn property(
        name: impl Into<String>,
        declaring_type: impl Into<String>,
        value_type: impl Into<String>,
        can_read: bool,
        can_write: bool,
    ) -> Self {
        Self {
            kind: MemberKind::Property,
            name: name.into(),
            declaring_type: declaring_type.into(),
            return_type: value_type.into(),
            parameters: Vec::new(),
            can_read,
            can_write,
            handler_type: None,
            handler_args_type: None,
        }
    }

    pub fn indexer(
        name: impl Into<String>,
        declaring_type: impl Into<String>,
        value_type: impl Into<String>,
        parameters: Vec<ParameterDescriptor>,
        can_read: bool,
        can_write: bool,
    ) -> Self {
        Self {
            kind: MemberKind::Indexer,
            name: name.into(),
            declaring_type: declaring_type.into(),
            return_type: value_type.into(),
            parameters,
            can_read,
            can_write,
            handler_type: None,
            handler_args_type: None,
        }
    }

    pub fn event(
        name: impl Into<String>,
        declaring_type: impl Into<String>,
        handler_type: impl Into<String>,
        handler_args_type: impl Into<String>,
    ) -> Self {
        Self {
            kind: MemberKind::Event,
            name: name.into(),
            declaring_type: declaring_type.into(),
            return_type: "void".to_string(),
            parameters: Vec::new(),
            can_read: false,
            can_write: false,
            handler_type: Some(handler_type.into()),
            handler_args_type: Some(handler_args_type.into()),
        }
    }

    /// Canonical signature identity: `name(paramType1,paramType2,...)`
    ///
    /// Two overloads produce different keys; the same signature inherited
    /// through two interface paths produces the same key twice.
    pub fn signature_key(&self) -> String {
        let types: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.type_name.as_str())
            .collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// True when any parameter is passed by reference (`Ref` or `Out`),
    /// which forces a named callback type in the generated stub.
    pub fn has_by_ref_params(&self) -> bool {
        self.parameters
            .iter()
            .any(|p| matches!(p.direction, ParamDirection::Ref | ParamDirection::Out))
    }

    pub fn returns_void(&self) -> bool {
        self.return_type == "void"
    }

    pub fn param_type_names(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .map(|p| p.type_name.as_str())
            .collect()
    }
}

/// Identity and ordered member surface of one interface to translate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    /// Qualified name used for the base-interface reference (e.g. `Acme.IWidget<T>`)
    pub qualified_name: String,
    /// Simple name used to build the stub's declared name
    pub name: String,
    /// Generic parameter names, consumed verbatim
    pub generic_params: Vec<String>,
    /// Member surface in introspector traversal order; this order decides
    /// which occurrence of a redeclared signature owns the backing field
    pub members: Vec<MemberDescriptor>,
}

impl InterfaceDescriptor {
    pub fn new(qualified_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            name: name.into(),
            generic_params: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_generic_params(mut self, params: Vec<String>) -> Self {
        self.generic_params = params;
        self
    }

    pub fn with_members(mut self, members: Vec<MemberDescriptor>) -> Self {
        self.members = members;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_key_no_params() {
        let member = MemberDescriptor::method("Refresh", "IWidget", "void", vec![]);
        assert_eq!(member.signature_key(), "Refresh()");
    }

    #[test]
    fn test_signature_key_joins_param_types() {
        let member = MemberDescriptor::method(
            "Resize",
            "IWidget",
            "void",
            vec![
                ParameterDescriptor::input("Int32", "width"),
                ParameterDescriptor::input("Int32", "height"),
            ],
        );
        assert_eq!(member.signature_key(), "Resize(Int32,Int32)");
    }

    #[test]
    fn test_overloads_produce_distinct_keys() {
        let one = MemberDescriptor::method(
            "Find",
            "IRepository",
            "String",
            vec![ParameterDescriptor::input("Int32", "id")],
        );
        let two = MemberDescriptor::method(
            "Find",
            "IRepository",
            "String",
            vec![
                ParameterDescriptor::input("Int32", "id"),
                ParameterDescriptor::input("Boolean", "strict"),
            ],
        );
        assert_ne!(one.signature_key(), two.signature_key());
    }

    #[test]
    fn test_redeclared_signature_shares_key() {
        let base = MemberDescriptor::method("Count", "ICollection", "Int32", vec![]);
        let derived = MemberDescriptor::method("Count", "ICollection<T>", "Int32", vec![]);
        assert_eq!(base.signature_key(), derived.signature_key());
    }

    #[test]
    fn test_by_ref_detection() {
        let plain = MemberDescriptor::method(
            "Load",
            "ILoader",
            "Boolean",
            vec![ParameterDescriptor::input("String", "path")],
        );
        assert!(!plain.has_by_ref_params());

        let with_out = MemberDescriptor::method(
            "TryLoad",
            "ILoader",
            "Boolean",
            vec![
                ParameterDescriptor::input("String", "path"),
                ParameterDescriptor::out("String", "contents"),
            ],
        );
        assert!(with_out.has_by_ref_params());
    }
}
