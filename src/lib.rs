// Copyright 2025 The memberscope Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # memberscope
//!
//! Structural inspection of classes for automated grading of programming exercises.
//! `memberscope` checks that a submitted class declares the constructors and methods an
//! exercise requires, and reads the fields of its instances, private ones included,
//! without calling any of the submitted code.
//!
//! ## Features
//!
//! - **Shape matching** - Constructors and methods are matched on visibility, return
//!   type, name, parameter types and `throws` clause
//! - **Order-insensitive signatures** - Parameter and exception lists compare as multisets
//! - **Batch reports** - One diagnostic slot per expected member, `None` when satisfied
//! - **Localized diagnostics** - Messages are routed through a properties-based catalog
//! - **Field reads** - By name, by declared type, all of them, or those of the superclass
//!
//! ## Quick Start
//!
//! ```rust
//! use memberscope::prelude::*;
//!
//! let foo = ClassBuilder::new("Foo")
//!     .constructor(Modifiers::PUBLIC, &["int"])
//!     .build();
//!
//! let report = BatchValidator::validate_constructors(
//!     &*foo,
//!     &[
//!         ConstructorSpec::new(&["int"]).with_visibility(Visibility::Public),
//!         ConstructorSpec::new(&["int"]).with_visibility(Visibility::Private),
//!     ],
//! );
//! assert!(report[0].is_none());
//! assert!(report[1].is_some());
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - The class model: type names, declared members, classes, instances
//!   and the [`metadata::typesystem::TypeRegistry`]
//! - [`inspect`] - Spec matching, batch validation and field access
//! - [`i18n`] - Message catalog and template formatting for diagnostics
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! A member that is missing from the inspected class is not an error. It is reported as
//! a diagnostic string, and field reads that fail report `None`. [`Error`] is reserved
//! for malformed input, registry conflicts and direct reflective reads.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade. Diagnostics and failed field reads are
//! logged at `debug`, rejected candidates at `trace`, catalog loading at `info` and `warn`.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use memberscope::prelude::*;
///
/// let spec = MethodSpec::new("void", "run", &[]).with_visibility(Visibility::Public);
/// assert_eq!(spec.name, "run");
/// ```
pub mod prelude;

/// Localization of diagnostics
pub mod i18n;

/// Spec matching, batch validation and field access
pub mod inspect;

/// Class model: type names, declared members, classes and instances
pub mod metadata;

/// `memberscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `memberscope` Error type
///
/// The main error type for all fallible operations in this crate.
pub use error::Error;
