//! Modifier flags and visibility levels shared by all declared members.
//!
//! # Key Types
//! - [`Modifiers`]: Bit flags as declared on a constructor, method or field
//! - [`Visibility`]: The access level extracted from [`Modifiers`], or [`Visibility::Any`] in specs

use std::fmt;

use bitflags::bitflags;
use strum::EnumIter;

/// Bitmask for the access bits of [`Modifiers`]
pub const MODIFIER_ACCESS_MASK: u32 = 0x0007;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// Member modifiers
    pub struct Modifiers: u32 {
        /// Accessible by anyone
        const PUBLIC = 0x0001;
        /// Accessible only by the declaring class
        const PRIVATE = 0x0002;
        /// Accessible by subclasses and the package
        const PROTECTED = 0x0004;
        /// Defined on the class, else per instance
        const STATIC = 0x0008;
        /// Cannot be overridden or reassigned
        const FINAL = 0x0010;
        /// Invocation holds the monitor of the receiver
        const SYNCHRONIZED = 0x0020;
        /// Field is never cached thread-locally
        const VOLATILE = 0x0040;
        /// Field is skipped by serialization
        const TRANSIENT = 0x0080;
        /// Implemented outside the managed runtime
        const NATIVE = 0x0100;
        /// Method does not provide an implementation
        const ABSTRACT = 0x0400;
        /// Strict floating point semantics
        const STRICT = 0x0800;
    }
}

/// Keyword order used when rendering modifiers
const MODIFIER_KEYWORDS: [(Modifiers, &str); 11] = [
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::STRICT, "strictfp"),
];

impl Modifiers {
    /// Extract the access bits only
    #[must_use]
    pub fn access(self) -> Self {
        Self::from_bits_truncate(self.bits() & MODIFIER_ACCESS_MASK)
    }

    /// Visibility level described by the access bits
    #[must_use]
    pub fn visibility(self) -> Visibility {
        let access = self.access();
        if access.contains(Modifiers::PUBLIC) {
            Visibility::Public
        } else if access.contains(Modifiers::PRIVATE) {
            Visibility::Private
        } else if access.contains(Modifiers::PROTECTED) {
            Visibility::Protected
        } else {
            Visibility::PackagePrivate
        }
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, keyword) in MODIFIER_KEYWORDS {
            if self.contains(flag) {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(keyword)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Access level of a member, as required by a spec or as declared.
///
/// `Any` only appears on the expectation side and disables the visibility check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Visibility {
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// No access modifier
    PackagePrivate,
    /// Do not check visibility
    Any,
}

impl Visibility {
    /// True if this expected visibility is satisfied by `actual`
    #[must_use]
    pub fn accepts(self, actual: Visibility) -> bool {
        self == Visibility::Any || self == actual
    }

    /// True unless this is [`Visibility::Any`]
    #[must_use]
    pub fn is_specified(self) -> bool {
        self != Visibility::Any
    }

    /// The access modifier bits declaring this visibility
    #[must_use]
    pub fn modifiers(self) -> Modifiers {
        match self {
            Visibility::Public => Modifiers::PUBLIC,
            Visibility::Private => Modifiers::PRIVATE,
            Visibility::Protected => Modifiers::PROTECTED,
            Visibility::PackagePrivate | Visibility::Any => Modifiers::empty(),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::PackagePrivate => "package-private",
            Visibility::Any => "any",
        })
    }
}
