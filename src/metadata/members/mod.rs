//! Declared members of a class: constructors, methods and fields.
//!
//! These are the concrete counterparts of the expectations in
//! [`crate::inspect`]. A member is created once by the
//! [`crate::metadata::typesystem::ClassBuilder`] and never changes afterwards, with
//! the single exception of a field's transient accessibility flag (see
//! [`Field::elevate`]).
//!
//! # Key Components
//!
//! - [`Constructor`], [`Method`], [`Field`]: the declared members
//! - [`Modifiers`], [`Visibility`]: modifier flags and the access level derived from them
//! - [`AccessGuard`]: scoped access elevation for one field read

mod constructor;
mod field;
mod method;
mod types;

pub use constructor::{Constructor, ConstructorList, ConstructorRc};
pub use field::{AccessGuard, Field, FieldList, FieldRc};
pub use method::{Method, MethodList, MethodRc};
pub use types::{Modifiers, Visibility, MODIFIER_ACCESS_MASK};
