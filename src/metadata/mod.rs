//! Metadata of inspected classes and their instances
//!
//! # Key Components
//!
//! - [`typesystem`] - Canonical type names, class definitions, builder and registry
//! - [`members`] - Declared constructors, methods and fields, modifiers and visibility
//! - [`object`] - Instances and field values
//! - [`token`] - Identity tokens of classes and members

pub mod members;
pub mod object;
pub mod token;
pub mod typesystem;
