//! Builder for class metadata.
//!
//! This module provides the [`ClassBuilder`] struct, a fluent API for declaring a class
//! together with its constructors, methods and fields. It plays the role of a
//! compile-time metadata table: whatever the builder declares is exactly what the
//! inspectors will find.
//!
//! Member tokens are assigned per kind, starting at row 1, in declaration order.
//!
//! # Example
//!
//! ```rust
//! use memberscope::metadata::{members::Modifiers, typesystem::ClassBuilder};
//!
//! let list = ClassBuilder::new("collections.LinkedList")
//!     .field(Modifiers::PRIVATE, "head", "collections.Node")
//!     .field(Modifiers::PRIVATE, "size", "int")
//!     .constructor(Modifiers::PUBLIC, &[])
//!     .method_throws(
//!         Modifiers::PUBLIC,
//!         "java.lang.Object",
//!         "get",
//!         &["int"],
//!         &["java.lang.IndexOutOfBoundsException"],
//!     )
//!     .build();
//! assert_eq!(list.fields.count(), 2);
//! ```

use std::sync::Arc;

use crate::metadata::{
    members::{Constructor, ConstructorRc, Field, FieldRc, Method, MethodRc, Modifiers},
    token::{Token, TokenKind},
    typesystem::{ClassDef, ClassRc, TypeName},
};

/// Provides a fluent API for declaring a class
pub struct ClassBuilder {
    name: TypeName,
    token: Token,
    base: Option<ClassRc>,
    constructors: Vec<ConstructorRc>,
    methods: Vec<MethodRc>,
    fields: Vec<FieldRc>,
}

impl ClassBuilder {
    /// Start declaring a class with the given canonical name
    pub fn new(name: impl Into<TypeName>) -> Self {
        ClassBuilder {
            name: name.into(),
            token: Token::from_parts(TokenKind::Class, 1),
            base: None,
            constructors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Canonical name of the class being declared
    #[must_use]
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Set the class token
    #[must_use]
    pub fn with_token(mut self, token: Token) -> Self {
        self.token = token;
        self
    }

    /// Set the direct superclass
    #[must_use]
    pub fn extends(mut self, base: &ClassRc) -> Self {
        self.base = Some(base.clone());
        self
    }

    /// Declare a constructor without `throws` clause
    #[must_use]
    pub fn constructor(self, modifiers: Modifiers, params: &[&str]) -> Self {
        self.constructor_throws(modifiers, params, &[])
    }

    /// Declare a constructor
    #[must_use]
    pub fn constructor_throws(
        mut self,
        modifiers: Modifiers,
        params: &[&str],
        exceptions: &[&str],
    ) -> Self {
        let row = self.next_row(self.constructors.len());
        self.constructors.push(Arc::new(Constructor {
            token: Token::from_parts(TokenKind::Constructor, row),
            declaring: self.name.clone(),
            modifiers,
            params: TypeName::list(params),
            exceptions: TypeName::list(exceptions),
        }));
        self
    }

    /// Declare a method without `throws` clause
    #[must_use]
    pub fn method(
        self,
        modifiers: Modifiers,
        return_type: &str,
        name: &str,
        params: &[&str],
    ) -> Self {
        self.method_throws(modifiers, return_type, name, params, &[])
    }

    /// Declare a method
    #[must_use]
    pub fn method_throws(
        mut self,
        modifiers: Modifiers,
        return_type: &str,
        name: &str,
        params: &[&str],
        exceptions: &[&str],
    ) -> Self {
        let row = self.next_row(self.methods.len());
        self.methods.push(Arc::new(Method {
            token: Token::from_parts(TokenKind::Method, row),
            declaring: self.name.clone(),
            modifiers,
            name: name.to_string(),
            return_type: TypeName::new(return_type),
            params: TypeName::list(params),
            exceptions: TypeName::list(exceptions),
        }));
        self
    }

    /// Declare a field
    #[must_use]
    pub fn field(mut self, modifiers: Modifiers, name: &str, field_type: &str) -> Self {
        let row = self.next_row(self.fields.len());
        self.fields.push(Arc::new(Field::new(
            Token::from_parts(TokenKind::Field, row),
            self.name.clone(),
            modifiers,
            name,
            TypeName::new(field_type),
        )));
        self
    }

    /// Finish the declaration
    #[must_use]
    pub fn build(self) -> ClassRc {
        let constructors = boxcar::Vec::new();
        for ctor in self.constructors {
            constructors.push(ctor);
        }
        let methods = boxcar::Vec::new();
        for method in self.methods {
            methods.push(method);
        }
        let fields = boxcar::Vec::new();
        for field in self.fields {
            fields.push(field);
        }

        Arc::new(ClassDef::new(
            self.token,
            self.name,
            self.base.as_ref(),
            Arc::new(constructors),
            Arc::new(methods),
            Arc::new(fields),
        ))
    }

    fn next_row(&self, declared: usize) -> u32 {
        u32::try_from(declared + 1).unwrap_or(u32::MAX)
    }
}
