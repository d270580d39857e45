use std::{
    borrow::Borrow,
    fmt,
    sync::{Arc, Weak},
};

use crate::metadata::typesystem::{ClassDef, ClassRc};

/// Canonical names of the primitive types
pub const PRIMITIVE_NAMES: [&str; 9] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// The canonical, fully-qualified name of a type.
///
/// Two `TypeName`s are equal iff their canonical strings are equal. This is the only
/// identity used when comparing parameter, return, exception and field types.
/// Cloning is cheap, the name is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(Arc<str>);

impl TypeName {
    /// Create a type name from its canonical form, e.g. `java.lang.String` or `int`
    pub fn new(name: impl AsRef<str>) -> Self {
        TypeName(Arc::from(name.as_ref()))
    }

    /// Convenience for building a list of names
    #[must_use]
    pub fn list(names: &[&str]) -> Vec<TypeName> {
        names.iter().map(TypeName::new).collect()
    }

    /// The canonical name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the built-in primitive types, including `void`
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        PRIMITIVE_NAMES.contains(&self.as_str())
    }

    /// The part after the last `.`, or the whole name
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(self.as_str())
    }

    /// The part before the last `.`, empty for unqualified names
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.0.rsplit_once('.').map_or("", |(ns, _)| ns)
    }

    /// Render a list of names as `[a, b, c]`
    #[must_use]
    pub fn render_list(names: &[TypeName]) -> String {
        let inner: Vec<&str> = names.iter().map(TypeName::as_str).collect();
        format!("[{}]", inner.join(", "))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeName({})", &self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        TypeName::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        TypeName(Arc::from(name))
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A weak reference to a [`ClassDef`], used for superclass links so that the
/// owner of the classes (usually a `TypeRegistry`) decides their lifetime.
#[derive(Clone, Debug)]
pub struct ClassRef {
    weak_ref: Weak<ClassDef>,
}

impl ClassRef {
    /// Create a new `ClassRef` from a strong reference
    #[must_use]
    pub fn new(strong_ref: &ClassRc) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the class, `None` if it has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<ClassRc> {
        self.weak_ref.upgrade()
    }
}
