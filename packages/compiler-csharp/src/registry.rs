//! Signature bookkeeping for one translation pass.

use std::collections::{HashMap, HashSet};

/// Outcome of binding one member occurrence to a backing field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub field_name: String,
    /// False when this exact signature was already bound — a redeclaration
    /// through another inheritance path — and the field must not be
    /// emitted again. Forwarding bodies are claimed separately, one per
    /// declaring type.
    pub newly_bound: bool,
}

/// Registry of the signatures already given a backing field.
///
/// Owned by exactly one interface's translation pass; construct a fresh
/// registry per interface and thread it through the generators. The first
/// occurrence of a signature owns the field, later occurrences of the
/// same key reuse it, and different keys sharing a member name are pushed
/// to disambiguated names.
#[derive(Debug, Default)]
pub struct SignatureRegistry {
    /// Signature key -> assigned backing field name
    fields: HashMap<String, String>,
    /// Member name -> the set of signature keys seen under that name
    keys_by_name: HashMap<String, HashSet<String>>,
    /// (signature key, declaring type) pairs whose forwarding body exists
    bodies: HashSet<(String, String)>,
}

impl SignatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the backing field name for `key` and whether the field still
    /// needs to be emitted.
    ///
    /// `fragment` is the sanitized parameter-type fragment used to
    /// disambiguate overloads; `always_suffix` forces it onto the name even
    /// without a collision (by-reference members, whose named callback types
    /// cannot share a bare-name field used elsewhere).
    pub fn bind(&mut self, name: &str, key: &str, fragment: &str, always_suffix: bool) -> FieldBinding {
        if let Some(existing) = self.fields.get(key) {
            return FieldBinding {
                field_name: existing.clone(),
                newly_bound: false,
            };
        }

        let overloaded = self
            .keys_by_name
            .get(name)
            .map_or(false, |keys| !keys.is_empty());

        let field_name = if always_suffix || overloaded {
            format!("{}_{}", name, fragment)
        } else {
            name.to_string()
        };

        self.fields.insert(key.to_string(), field_name.clone());
        self.keys_by_name
            .entry(name.to_string())
            .or_default()
            .insert(key.to_string());

        FieldBinding {
            field_name,
            newly_bound: true,
        }
    }

    /// Claim the forwarding body for `key` under `declaring_type`.
    ///
    /// A shared field still needs one implementation per declaring type,
    /// but never two for the same one; returns false when that body was
    /// already claimed.
    pub fn claim_body(&mut self, key: &str, declaring_type: &str) -> bool {
        self.bodies
            .insert((key.to_string(), declaring_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_keeps_bare_name() {
        let mut registry = SignatureRegistry::new();
        let binding = registry.bind("Foo", "Foo(Int32)", "Int32", false);
        assert_eq!(binding.field_name, "Foo");
        assert!(binding.newly_bound);
    }

    #[test]
    fn test_overload_gets_suffixed_name() {
        let mut registry = SignatureRegistry::new();
        registry.bind("Foo", "Foo(Int32)", "Int32", false);
        let second = registry.bind("Foo", "Foo(Int32,Int32)", "Int32_Int32", false);
        assert_eq!(second.field_name, "Foo_Int32_Int32");
        assert!(second.newly_bound);
    }

    #[test]
    fn test_overloads_never_share_a_field_name() {
        let mut registry = SignatureRegistry::new();
        let first = registry.bind("Foo", "Foo()", "", false);
        let second = registry.bind("Foo", "Foo(Int32)", "Int32", false);
        assert_ne!(first.field_name, second.field_name);
    }

    #[test]
    fn test_exact_redeclaration_reuses_the_field() {
        let mut registry = SignatureRegistry::new();
        let first = registry.bind("Count", "Count()", "", false);
        let again = registry.bind("Count", "Count()", "", false);
        assert_eq!(again.field_name, first.field_name);
        assert!(!again.newly_bound);
    }

    #[test]
    fn test_always_suffix_applies_without_collision() {
        let mut registry = SignatureRegistry::new();
        let binding = registry.bind("TryGet", "TryGet(String,Int32)", "String_Int32", true);
        assert_eq!(binding.field_name, "TryGet_String_Int32");
    }

    #[test]
    fn test_redeclaration_of_suffixed_member_reuses_suffixed_name() {
        let mut registry = SignatureRegistry::new();
        registry.bind("TryGet", "TryGet(String,Int32)", "String_Int32", true);
        let again = registry.bind("TryGet", "TryGet(String,Int32)", "String_Int32", true);
        assert_eq!(again.field_name, "TryGet_String_Int32");
        assert!(!again.newly_bound);
    }

    #[test]
    fn test_body_claimed_once_per_declaring_type() {
        let mut registry = SignatureRegistry::new();
        assert!(registry.claim_body("Count()", "ICollection"));
        assert!(registry.claim_body("Count()", "ICollection<T>"));
        assert!(!registry.claim_body("Count()", "ICollection"));
    }
}
