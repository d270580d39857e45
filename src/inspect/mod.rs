//! Structural inspection of classes and instances.
//!
//! This module answers the questions an automated grader asks about submitted code:
//! does the class declare a constructor or method of a given shape, and what values do
//! the fields of an instance hold, including private ones.
//!
//! # Key Components
//!
//! - [`equal_as_multiset`]: order-insensitive comparison of parameter and exception lists
//! - [`ConstructorSpec`], [`MethodSpec`]: what a declared member must look like
//! - [`MemberMatcher`]: finds a member satisfying one spec, or explains why none does
//! - [`BatchValidator`]: one diagnostic slot per spec
//! - [`FieldAccessor`]: field reads with scoped access elevation
//!
//! # Examples
//!
//! ```rust
//! use memberscope::{
//!     inspect::{BatchValidator, MethodSpec},
//!     metadata::{members::{Modifiers, Visibility}, typesystem::ClassBuilder},
//! };
//!
//! let person = ClassBuilder::new("Person")
//!     .method(Modifiers::PRIVATE, "java.lang.String", "getName", &[])
//!     .build();
//!
//! let report = BatchValidator::validate_methods(
//!     &*person,
//!     &[MethodSpec::new("java.lang.String", "getName", &[]).with_visibility(Visibility::Public)],
//! );
//! assert!(report[0].as_deref().unwrap().contains("getName"));
//! ```

mod batch;
mod fields;
mod matcher;
mod signature;
mod spec;

pub use batch::BatchValidator;
pub use fields::FieldAccessor;
pub use matcher::{
    MemberMatcher, CONSTRUCTOR_EXCEPTIONS, CONSTRUCTOR_FULL, CONSTRUCTOR_PARAMS,
    CONSTRUCTOR_VISIBILITY, METHOD_EXCEPTIONS, METHOD_FULL, METHOD_PARAMS, METHOD_VISIBILITY,
};
pub use signature::equal_as_multiset;
pub use spec::{ConstructorSpec, MethodSpec};
