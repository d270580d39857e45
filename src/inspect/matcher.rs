//! Search for a declared constructor or method satisfying a spec.
//!
//! Every declared member is a candidate, whatever its visibility, and the first
//! candidate passing all checks satisfies the spec. When none does, the matcher builds a
//! diagnostic describing the expectation. Its wording depends on which optional parts
//! the spec constrains (visibility and `throws` clause), giving four templates per
//! member kind.
//!
//! Templates are English text which doubles as the catalog key, so a translated bundle
//! replaces the whole sentence before placeholders are filled in.

use log::{debug, trace};

use crate::{
    i18n::{format_message, tr},
    inspect::{equal_as_multiset, ConstructorSpec, MethodSpec},
    metadata::{
        members::{Constructor, Method},
        typesystem::{TypeMetadata, TypeName},
    },
};

/// Constructor diagnostic with visibility and exceptions
pub const CONSTRUCTOR_FULL: &str = "The constructor with modifier [{0}], argument types {1} and exceptions declared via throws {2} was not found!";
/// Constructor diagnostic with visibility only
pub const CONSTRUCTOR_VISIBILITY: &str =
    "The constructor with modifier [{0}] and argument types {1} was not found!";
/// Constructor diagnostic with exceptions only
pub const CONSTRUCTOR_EXCEPTIONS: &str =
    "The constructor with argument types {0} and exceptions declared via throws {1} was not found!";
/// Constructor diagnostic with parameters only
pub const CONSTRUCTOR_PARAMS: &str = "The constructor with argument types {0} was not found!";

/// Method diagnostic with visibility and exceptions
pub const METHOD_FULL: &str = "The method with modifier [{0}], return type {1}, name {2}, argument types {3} and exceptions declared via throws {4} was not found!";
/// Method diagnostic with visibility only
pub const METHOD_VISIBILITY: &str = "The method with modifier [{0}], return type {1}, name {2} and argument types {3} was not found!";
/// Method diagnostic with exceptions only
pub const METHOD_EXCEPTIONS: &str = "The method with return type {0}, name {1}, argument types {2} and exceptions declared via throws {3} was not found!";
/// Method diagnostic without visibility and exceptions
pub const METHOD_PARAMS: &str =
    "The method with return type {0}, name {1} and argument types {2} was not found!";

/// Matches specs against the members a class declares
pub struct MemberMatcher;

impl MemberMatcher {
    /// Look for a declared constructor satisfying `spec`.
    ///
    /// Returns `None` if one exists, otherwise a diagnostic naming the expected
    /// parameter types and, when the spec constrains them, the visibility and the
    /// declared exceptions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memberscope::{
    ///     inspect::{ConstructorSpec, MemberMatcher},
    ///     metadata::{members::{Modifiers, Visibility}, typesystem::ClassBuilder},
    /// };
    ///
    /// let foo = ClassBuilder::new("Foo").constructor(Modifiers::PUBLIC, &["int"]).build();
    ///
    /// let found = ConstructorSpec::new(&["int"]).with_visibility(Visibility::Public);
    /// assert!(MemberMatcher::match_constructor(&*foo, &found).is_none());
    ///
    /// let missing = ConstructorSpec::new(&["int"]).with_visibility(Visibility::Private);
    /// assert!(MemberMatcher::match_constructor(&*foo, &missing).is_some());
    /// ```
    pub fn match_constructor<T: TypeMetadata + ?Sized>(
        target: &T,
        spec: &ConstructorSpec,
    ) -> Option<String> {
        if target
            .declared_constructors()
            .iter()
            .any(|ctor| constructor_matches(ctor, spec))
        {
            return None;
        }

        let params = TypeName::render_list(&spec.params);
        let message = match (spec.visibility.is_specified(), &spec.exceptions) {
            (true, Some(exceptions)) => format_message(
                tr(CONSTRUCTOR_FULL),
                &[
                    &spec.visibility.to_string(),
                    &params,
                    &TypeName::render_list(exceptions),
                ],
            ),
            (true, None) => format_message(
                tr(CONSTRUCTOR_VISIBILITY),
                &[&spec.visibility.to_string(), &params],
            ),
            (false, Some(exceptions)) => format_message(
                tr(CONSTRUCTOR_EXCEPTIONS),
                &[&params, &TypeName::render_list(exceptions)],
            ),
            (false, None) => format_message(tr(CONSTRUCTOR_PARAMS), &[&params]),
        };

        debug!("{}: {}", target.name(), message);
        Some(message)
    }

    /// Look for a declared method satisfying `spec`.
    ///
    /// Checks are applied in order visibility, return type, name, parameters and
    /// exceptions. The diagnostic always names the expected return type, name and
    /// parameter types.
    pub fn match_method<T: TypeMetadata + ?Sized>(target: &T, spec: &MethodSpec) -> Option<String> {
        if target
            .declared_methods()
            .iter()
            .any(|method| method_matches(method, spec))
        {
            return None;
        }

        let return_type = spec.return_type.to_string();
        let params = TypeName::render_list(&spec.params);
        let message = match (spec.visibility.is_specified(), &spec.exceptions) {
            (true, Some(exceptions)) => format_message(
                tr(METHOD_FULL),
                &[
                    &spec.visibility.to_string(),
                    &return_type,
                    &spec.name,
                    &params,
                    &TypeName::render_list(exceptions),
                ],
            ),
            (true, None) => format_message(
                tr(METHOD_VISIBILITY),
                &[
                    &spec.visibility.to_string(),
                    &return_type,
                    &spec.name,
                    &params,
                ],
            ),
            (false, Some(exceptions)) => format_message(
                tr(METHOD_EXCEPTIONS),
                &[
                    &return_type,
                    &spec.name,
                    &params,
                    &TypeName::render_list(exceptions),
                ],
            ),
            (false, None) => format_message(tr(METHOD_PARAMS), &[&return_type, &spec.name, &params]),
        };

        debug!("{}: {}", target.name(), message);
        Some(message)
    }
}

fn constructor_matches(ctor: &Constructor, spec: &ConstructorSpec) -> bool {
    if !spec.visibility.accepts(ctor.visibility()) {
        trace!("{}: visibility {} rejected", ctor.token, ctor.visibility());
        return false;
    }
    if !equal_as_multiset(&ctor.params, &spec.params) {
        trace!("{}: parameters rejected", ctor.token);
        return false;
    }
    if let Some(exceptions) = &spec.exceptions {
        if !equal_as_multiset(&ctor.exceptions, exceptions) {
            trace!("{}: exceptions rejected", ctor.token);
            return false;
        }
    }
    true
}

fn method_matches(method: &Method, spec: &MethodSpec) -> bool {
    if !spec.visibility.accepts(method.visibility()) {
        trace!("{} {}: visibility rejected", method.token, method.name);
        return false;
    }
    if method.return_type != spec.return_type {
        trace!("{} {}: return type rejected", method.token, method.name);
        return false;
    }
    if method.name != spec.name {
        return false;
    }
    if !equal_as_multiset(&method.params, &spec.params) {
        trace!("{} {}: parameters rejected", method.token, method.name);
        return false;
    }
    if let Some(exceptions) = &spec.exceptions {
        if !equal_as_multiset(&method.exceptions, exceptions) {
            trace!("{} {}: exceptions rejected", method.token, method.name);
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::members::{Modifiers, Visibility},
        test::{foo_class, person_class, reader_class},
    };

    #[test]
    fn test_constructor_found() {
        let foo = foo_class();
        let spec = ConstructorSpec::new(&["int"]).with_visibility(Visibility::Public);
        assert_eq!(MemberMatcher::match_constructor(&*foo, &spec), None);

        let any = ConstructorSpec::new(&["int"]);
        assert_eq!(MemberMatcher::match_constructor(&*foo, &any), None);
    }

    #[test]
    fn test_constructor_visibility_mismatch() {
        let foo = foo_class();
        let spec = ConstructorSpec::new(&["int"]).with_visibility(Visibility::Private);
        let diagnostic = MemberMatcher::match_constructor(&*foo, &spec).unwrap();

        assert_eq!(
            diagnostic,
            "The constructor with modifier [private] and argument types [int] was not found!"
        );
    }

    #[test]
    fn test_constructor_templates() {
        let foo = foo_class();

        let spec = ConstructorSpec::new(&["long"]);
        assert_eq!(
            MemberMatcher::match_constructor(&*foo, &spec).unwrap(),
            "The constructor with argument types [long] was not found!"
        );

        let spec = ConstructorSpec::new(&["int"]).with_exceptions(&["java.io.IOException"]);
        assert_eq!(
            MemberMatcher::match_constructor(&*foo, &spec).unwrap(),
            "The constructor with argument types [int] and exceptions declared via throws [java.io.IOException] was not found!"
        );

        let spec = ConstructorSpec::new(&["int", "int"])
            .with_visibility(Visibility::PackagePrivate)
            .with_exceptions(&[]);
        assert_eq!(
            MemberMatcher::match_constructor(&*foo, &spec).unwrap(),
            "The constructor with modifier [package-private], argument types [int, int] and exceptions declared via throws [] was not found!"
        );
    }

    #[test]
    fn test_absent_exceptions_do_not_constrain() {
        let reader = reader_class();
        let spec = ConstructorSpec::new(&["java.lang.String"]);
        assert_eq!(MemberMatcher::match_constructor(&*reader, &spec), None);

        let empty = ConstructorSpec::new(&["java.lang.String"]).with_exceptions(&[]);
        assert!(MemberMatcher::match_constructor(&*reader, &empty).is_some());
    }

    #[test]
    fn test_exceptions_in_any_order() {
        let reader = reader_class();
        let spec = MethodSpec::new("java.lang.String", "readLine", &[]).with_exceptions(&[
            "java.io.EOFException",
            "java.io.IOException",
        ]);
        assert_eq!(MemberMatcher::match_method(&*reader, &spec), None);
    }

    #[test]
    fn test_method_found_and_missing() {
        let person = person_class();
        let private = MethodSpec::new("java.lang.String", "getName", &[])
            .with_visibility(Visibility::Private);
        assert_eq!(MemberMatcher::match_method(&*person, &private), None);

        let public = private.clone().with_visibility(Visibility::Public);
        assert_eq!(
            MemberMatcher::match_method(&*person, &public).unwrap(),
            "The method with modifier [public], return type java.lang.String, name getName and argument types [] was not found!"
        );
    }

    #[test]
    fn test_method_name_case_sensitive() {
        let person = person_class();
        let spec = MethodSpec::new("java.lang.String", "getname", &[]);
        assert_eq!(
            MemberMatcher::match_method(&*person, &spec).unwrap(),
            "The method with return type java.lang.String, name getname and argument types [] was not found!"
        );
    }

    #[test]
    fn test_method_return_type_checked() {
        let person = person_class();
        let spec = MethodSpec::new("java.lang.Object", "getName", &[]).with_exceptions(&[]);
        assert_eq!(
            MemberMatcher::match_method(&*person, &spec).unwrap(),
            "The method with return type java.lang.Object, name getName, argument types [] and exceptions declared via throws [] was not found!"
        );
    }

    #[test]
    fn test_method_params_permuted() {
        let person = person_class();
        let spec = MethodSpec::new("void", "rename", &["int", "java.lang.String"]);
        assert_eq!(MemberMatcher::match_method(&*person, &spec), None);
    }

    #[test]
    fn test_overloads_any_candidate() {
        let class = crate::metadata::typesystem::ClassBuilder::new("Calc")
            .method(Modifiers::PUBLIC, "int", "add", &["int", "int"])
            .method(Modifiers::PUBLIC, "double", "add", &["double", "double"])
            .build();

        let spec = MethodSpec::new("double", "add", &["double", "double"])
            .with_visibility(Visibility::Public)
            .with_exceptions(&[]);
        assert_eq!(MemberMatcher::match_method(&*class, &spec), None);
    }
}
