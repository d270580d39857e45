//! Class metadata for structural inspection.
//!
//! This module stands in for a host language's reflection facility. It models a class
//! as the set of members it *declares* (inherited members are not repeated), plus a
//! link to its direct superclass.
//!
//! # Key Components
//!
//! - [`TypeName`]: Canonical type name, the comparison key for all types
//! - [`ClassDef`]: A class with its declared constructors, methods and fields
//! - [`TypeMetadata`]: The provider interface the inspectors work against
//! - [`ClassBuilder`]: Fluent construction of a [`ClassDef`]
//! - [`TypeRegistry`]: Owns classes and looks them up by token or canonical name
//!
//! # Examples
//!
//! ```rust
//! use memberscope::metadata::{members::Modifiers, typesystem::{ClassBuilder, TypeMetadata}};
//!
//! let person = ClassBuilder::new("school.Person")
//!     .field(Modifiers::PRIVATE, "name", "java.lang.String")
//!     .constructor(Modifiers::PUBLIC, &["java.lang.String"])
//!     .method(Modifiers::PUBLIC, "java.lang.String", "getName", &[])
//!     .build();
//!
//! assert_eq!(person.declared_methods().len(), 1);
//! assert!(person.superclass().is_none());
//! ```

mod base;
mod builder;
mod registry;

use std::sync::{Arc, OnceLock};

pub use base::{ClassRef, TypeName, PRIMITIVE_NAMES};
pub use builder::ClassBuilder;
pub use registry::TypeRegistry;

use crate::{
    metadata::{
        members::{ConstructorList, ConstructorRc, FieldList, FieldRc, MethodList, MethodRc},
        token::Token,
    },
    Error, Result,
};

/// Reference to a `ClassDef`
pub type ClassRc = Arc<ClassDef>;

/// Host-provided metadata of an inspected type.
///
/// Every list contains the members declared directly on the type, in declaration
/// order, regardless of their visibility.
pub trait TypeMetadata {
    /// Canonical name of the type
    fn name(&self) -> &TypeName;

    /// All declared constructors
    fn declared_constructors(&self) -> Vec<ConstructorRc>;

    /// All declared methods
    fn declared_methods(&self) -> Vec<MethodRc>;

    /// All declared fields
    fn declared_fields(&self) -> Vec<FieldRc>;

    /// The direct superclass, if any
    fn superclass(&self) -> Option<ClassRc>;
}

/// A class and the members it declares
pub struct ClassDef {
    /// Token
    pub token: Token,
    /// Canonical name
    pub name: TypeName,
    /// The direct superclass aka 'extends'
    base: OnceLock<ClassRef>,
    /// All constructors this class declares
    pub constructors: ConstructorList,
    /// All methods this class declares
    pub methods: MethodList,
    /// All fields this class declares
    pub fields: FieldList,
}

impl ClassDef {
    /// Create a new instance of a `ClassDef`
    #[must_use]
    pub fn new(
        token: Token,
        name: TypeName,
        base: Option<&ClassRc>,
        constructors: ConstructorList,
        methods: MethodList,
        fields: FieldList,
    ) -> Self {
        let base_lock = OnceLock::new();
        if let Some(base_value) = base {
            base_lock.set(ClassRef::new(base_value)).ok();
        }

        ClassDef {
            token,
            name,
            base: base_lock,
            constructors,
            methods,
            fields,
        }
    }

    /// Link the superclass after construction
    ///
    /// # Errors
    /// Returns [`Error::TypeInsert`] if a superclass is already linked.
    pub fn set_base(&self, base: &ClassRc) -> Result<()> {
        self.base.set(ClassRef::new(base)).map_err(|_| {
            Error::TypeInsert(format!("'{}' already has a superclass", self.name))
        })
    }

    /// Access the superclass of this class, if it exists and is still alive
    #[must_use]
    pub fn base(&self) -> Option<ClassRc> {
        self.base.get().and_then(ClassRef::upgrade)
    }

    /// The declared field named `name`
    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldRc> {
        self.fields
            .iter()
            .find(|(_, field)| field.name == name)
            .map(|(_, field)| field.clone())
    }
}

impl TypeMetadata for ClassDef {
    fn name(&self) -> &TypeName {
        &self.name
    }

    fn declared_constructors(&self) -> Vec<ConstructorRc> {
        self.constructors.iter().map(|(_, c)| c.clone()).collect()
    }

    fn declared_methods(&self) -> Vec<MethodRc> {
        self.methods.iter().map(|(_, m)| m.clone()).collect()
    }

    fn declared_fields(&self) -> Vec<FieldRc> {
        self.fields.iter().map(|(_, f)| f.clone()).collect()
    }

    fn superclass(&self) -> Option<ClassRc> {
        self.base()
    }
}

impl std::fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassDef")
            .field("token", &self.token)
            .field("name", &self.name)
            .field("constructors", &self.constructors.count())
            .field("methods", &self.methods.count())
            .field("fields", &self.fields.count())
            .finish_non_exhaustive()
    }
}
