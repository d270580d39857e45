//! Registry of inspected classes.
//!
//! The [`TypeRegistry`] owns the classes of one inspection session and resolves them by
//! token or canonical name, which is how a test harness loads a target class by name.
//! Since superclass links are weak, the registry is also what keeps parent classes
//! alive while their subclasses are inspected.
//!
//! # Storage
//!
//! - Primary storage keyed by token using a lock-free `SkipMap`, ordered by registration
//! - Secondary indices by canonical and simple name using `DashMap`
//!
//! # Examples
//!
//! ```rust
//! use memberscope::metadata::{members::Modifiers, typesystem::{ClassBuilder, TypeRegistry}};
//!
//! let registry = TypeRegistry::new();
//! let person = registry.define(
//!     ClassBuilder::new("school.Person").field(Modifiers::PRIVATE, "name", "java.lang.String"),
//! )?;
//! registry.define(ClassBuilder::new("school.Student").extends(&person))?;
//!
//! let student = registry.get_by_fullname("school.Student").unwrap();
//! assert_eq!(student.base().unwrap().name.as_str(), "school.Person");
//! # Ok::<(), memberscope::Error>(())
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use crossbeam_skiplist::SkipMap;
use dashmap::{mapref::entry::Entry, DashMap};
use log::debug;

use crate::{
    metadata::{
        token::{Token, TokenKind},
        typesystem::{ClassBuilder, ClassRc, TypeName},
    },
    Error, Result,
};

/// Central registry of the classes available for inspection.
///
/// All collections are concurrent, classes can be registered and resolved from
/// several threads.
pub struct TypeRegistry {
    /// Primary storage, token to class
    types: SkipMap<Token, ClassRc>,
    /// Canonical name to token
    types_by_fullname: DashMap<TypeName, Token>,
    /// Simple name to tokens, a simple name may exist in several namespaces
    types_by_name: DashMap<String, Vec<Token>>,
    /// Next row handed out by `define`
    next_row: AtomicU32,
}

impl TypeRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry {
            types: SkipMap::new(),
            types_by_fullname: DashMap::new(),
            types_by_name: DashMap::new(),
            next_row: AtomicU32::new(1),
        }
    }

    fn next_token(&self) -> Token {
        let row = self.next_row.fetch_add(1, Ordering::Relaxed);
        Token::from_parts(TokenKind::Class, row)
    }

    /// Assign the next class token to `builder`, build and register it
    ///
    /// # Errors
    /// Returns [`Error::TypeInsert`] if a class with the same canonical name exists.
    pub fn define(&self, builder: ClassBuilder) -> Result<ClassRc> {
        if self.types_by_fullname.contains_key(builder.name()) {
            return Err(Error::TypeInsert(format!(
                "'{}' is already registered",
                builder.name()
            )));
        }

        let class = builder.with_token(self.next_token()).build();
        self.insert(&class)?;
        Ok(class)
    }

    /// Register an already built class
    ///
    /// # Errors
    /// Returns [`Error::TypeInsert`] if the canonical name or the token is already taken.
    pub fn insert(&self, class: &ClassRc) -> Result<()> {
        if self.types.contains_key(&class.token) {
            return Err(Error::TypeInsert(format!(
                "token {} of '{}' is already registered",
                class.token, class.name
            )));
        }

        match self.types_by_fullname.entry(class.name.clone()) {
            Entry::Occupied(_) => {
                return Err(Error::TypeInsert(format!(
                    "'{}' is already registered",
                    class.name
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(class.token);
            }
        }

        self.types_by_name
            .entry(class.name.simple_name().to_string())
            .or_default()
            .push(class.token);
        self.types.insert(class.token, class.clone());

        debug!("registered class '{}' as {}", class.name, class.token);
        Ok(())
    }

    /// Link `class_name` to its superclass `base_name`, both already registered
    ///
    /// # Errors
    /// - [`Error::TypeNotFound`] if either class is unknown
    /// - [`Error::TypeInsert`] if `class_name` already has a superclass
    pub fn link_base(&self, class_name: &str, base_name: &str) -> Result<()> {
        let class = self
            .get_by_fullname(class_name)
            .ok_or_else(|| Error::TypeNotFound(class_name.to_string()))?;
        let base = self
            .get_by_fullname(base_name)
            .ok_or_else(|| Error::TypeNotFound(base_name.to_string()))?;

        class.set_base(&base)
    }

    /// Get a class by token
    #[must_use]
    pub fn get(&self, token: &Token) -> Option<ClassRc> {
        self.types.get(token).map(|entry| entry.value().clone())
    }

    /// Get a class by canonical name
    #[must_use]
    pub fn get_by_fullname(&self, fullname: &str) -> Option<ClassRc> {
        let token = *self.types_by_fullname.get(fullname)?.value();
        self.get(&token)
    }

    /// Get all classes with the given simple name, across namespaces
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Vec<ClassRc> {
        self.types_by_name
            .get(name)
            .map(|tokens| tokens.value().iter().filter_map(|t| self.get(t)).collect())
            .unwrap_or_default()
    }

    /// Count of classes in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns an iterator over all classes in the registry, in token order
    pub fn iter(&self) -> crossbeam_skiplist::map::Iter<'_, Token, ClassRc> {
        self.types.iter()
    }

    /// Get all classes in the registry, in token order
    #[must_use]
    pub fn all_types(&self) -> Vec<ClassRc> {
        self.types
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
