//! Order-insensitive comparison of type lists.
//!
//! Parameter lists and `throws` clauses are compared as multisets: two lists are equal
//! when they contain the same canonical names the same number of times, whatever the
//! order.

use crate::metadata::typesystem::TypeName;

/// True if `actual` and `expected` hold the same type names with the same multiplicities
///
/// # Examples
///
/// ```rust
/// use memberscope::{inspect::equal_as_multiset, metadata::typesystem::TypeName};
///
/// let declared = TypeName::list(&["int", "java.lang.String"]);
/// assert!(equal_as_multiset(&declared, &TypeName::list(&["java.lang.String", "int"])));
/// assert!(!equal_as_multiset(&declared, &TypeName::list(&["int", "int"])));
/// ```
#[must_use]
pub fn equal_as_multiset(actual: &[TypeName], expected: &[TypeName]) -> bool {
    if actual.len() != expected.len() {
        return false;
    }

    let mut actual: Vec<&TypeName> = actual.iter().collect();
    let mut expected: Vec<&TypeName> = expected.iter().collect();
    actual.sort_unstable();
    expected.sort_unstable();
    actual == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutations_match() {
        let a = TypeName::list(&["int", "double", "java.lang.String"]);
        let b = TypeName::list(&["java.lang.String", "int", "double"]);
        assert!(equal_as_multiset(&a, &b));
        assert!(equal_as_multiset(&b, &a));
        assert!(equal_as_multiset(&[], &[]));
    }

    #[test]
    fn test_length_mismatch() {
        let a = TypeName::list(&["int"]);
        let b = TypeName::list(&["int", "int"]);
        assert!(!equal_as_multiset(&a, &b));
        assert!(!equal_as_multiset(&a, &[]));
    }

    #[test]
    fn test_multiplicities_count() {
        let a = TypeName::list(&["int", "int", "long"]);
        let b = TypeName::list(&["int", "long", "long"]);
        assert!(!equal_as_multiset(&a, &b));
    }

    #[test]
    fn test_names_are_canonical() {
        let a = TypeName::list(&["java.lang.String"]);
        let b = TypeName::list(&["String"]);
        assert!(!equal_as_multiset(&a, &b));
    }
}
