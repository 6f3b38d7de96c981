//! Identifier derivation from resolved type names.
//!
//! Type names arrive fully qualified and generically instantiated, e.g.
//! `System.Collections.Generic.IDictionary<String, Int32>`. Field names
//! built from them must be legal identifiers, so everything outside the
//! identifier alphabet is stripped rather than escaped.

/// Reduce one resolved type name to a legal identifier fragment.
///
/// Strips the characters a qualified generic type name can carry that an
/// identifier cannot: `.` qualifiers, `<`/`>` brackets, the comma-space
/// between generic arguments, and array/pointer punctuation.
pub fn sanitize_type_name(type_name: &str) -> String {
    type_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Join a parameter-type list into the disambiguation fragment appended
/// to collided field names: `[Int32, Int32]` becomes `Int32_Int32`.
pub fn identifier_fragment(type_names: &[&str]) -> String {
    type_names
        .iter()
        .map(|name| sanitize_type_name(name))
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(sanitize_type_name("Int32"), "Int32");
    }

    #[test]
    fn test_qualified_name_drops_dots() {
        assert_eq!(sanitize_type_name("System.String"), "SystemString");
    }

    #[test]
    fn test_generic_name_drops_brackets_and_separators() {
        assert_eq!(
            sanitize_type_name("IDictionary<String, Int32>"),
            "IDictionaryStringInt32"
        );
    }

    #[test]
    fn test_array_suffix_is_stripped() {
        assert_eq!(sanitize_type_name("Byte[]"), "Byte");
    }

    #[test]
    fn test_fragment_joins_with_underscores() {
        assert_eq!(identifier_fragment(&["Int32", "Int32"]), "Int32_Int32");
        assert_eq!(
            identifier_fragment(&["String", "List<Int32>"]),
            "String_ListInt32"
        );
    }

    #[test]
    fn test_empty_list_yields_empty_fragment() {
        assert_eq!(identifier_fragment(&[]), "");
    }
}
