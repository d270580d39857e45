use std::sync::Arc;

use crate::metadata::{
    members::{Modifiers, Visibility},
    token::Token,
    typesystem::TypeName,
};

/// A vector that holds a list of `Constructor`
pub type ConstructorList = Arc<boxcar::Vec<ConstructorRc>>;
/// Reference to a `Constructor`
pub type ConstructorRc = Arc<Constructor>;

/// A constructor as declared on a class
#[derive(Debug)]
pub struct Constructor {
    /// Identity of this constructor
    pub token: Token,
    /// Canonical name of the declaring class
    pub declaring: TypeName,
    /// Declared modifiers
    pub modifiers: Modifiers,
    /// Parameter types in declaration order
    pub params: Vec<TypeName>,
    /// Types listed in the `throws` clause
    pub exceptions: Vec<TypeName>,
}

impl Constructor {
    /// Access level of this constructor
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.modifiers.visibility()
    }
}
