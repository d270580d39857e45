//! # memberscope Prelude
//!
//! Re-exports of the types needed to describe classes, declare expectations and run
//! inspections. Import with `use memberscope::prelude::*;`.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all memberscope operations
pub use crate::Error;

/// The result type used throughout memberscope
pub use crate::Result;

// ================================================================================================
// Class Model
// ================================================================================================

/// Canonical type names, classes and the provider interface
pub use crate::metadata::typesystem::{
    ClassBuilder, ClassDef, ClassRc, TypeMetadata, TypeName, TypeRegistry,
};

/// Declared members and their modifiers
pub use crate::metadata::members::{
    Constructor, ConstructorRc, Field, FieldRc, Method, MethodRc, Modifiers, Visibility,
};

/// Instances and field values
pub use crate::metadata::object::{InstanceData, Object, ObjectRc, Value};

/// Identity of classes and members
pub use crate::metadata::token::{Token, TokenKind};

// ================================================================================================
// Inspection
// ================================================================================================

/// Expectations, matching and field access
pub use crate::inspect::{
    equal_as_multiset, BatchValidator, ConstructorSpec, FieldAccessor, MemberMatcher, MethodSpec,
};

// ================================================================================================
// Localization
// ================================================================================================

/// Message catalog and formatting
pub use crate::i18n::{format_message, CatalogConfig, MessageCatalog};
