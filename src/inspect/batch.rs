//! Validation of several expected members in one call.
//!
//! The result has one slot per spec, in input order, `None` for each satisfied spec and
//! the diagnostic otherwise. Every spec is evaluated, a failure does not stop the batch.

use crate::{
    inspect::{ConstructorSpec, MemberMatcher, MethodSpec},
    metadata::typesystem::TypeMetadata,
};

/// Applies [`MemberMatcher`] to sequences of specs
pub struct BatchValidator;

impl BatchValidator {
    /// Match every constructor spec against `target`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memberscope::{
    ///     inspect::{BatchValidator, ConstructorSpec},
    ///     metadata::{members::Modifiers, typesystem::ClassBuilder},
    /// };
    ///
    /// let point = ClassBuilder::new("Point")
    ///     .constructor(Modifiers::PUBLIC, &[])
    ///     .constructor(Modifiers::PUBLIC, &["int", "int"])
    ///     .build();
    ///
    /// let report = BatchValidator::validate_constructors(
    ///     &*point,
    ///     &[ConstructorSpec::new(&["int", "int"]), ConstructorSpec::new(&["double"])],
    /// );
    /// assert!(report[0].is_none());
    /// assert!(report[1].is_some());
    /// ```
    pub fn validate_constructors<T: TypeMetadata + ?Sized>(
        target: &T,
        specs: &[ConstructorSpec],
    ) -> Vec<Option<String>> {
        specs
            .iter()
            .map(|spec| MemberMatcher::match_constructor(target, spec))
            .collect()
    }

    /// Match every method spec against `target`
    pub fn validate_methods<T: TypeMetadata + ?Sized>(
        target: &T,
        specs: &[MethodSpec],
    ) -> Vec<Option<String>> {
        specs
            .iter()
            .map(|spec| MemberMatcher::match_method(target, spec))
            .collect()
    }
}
