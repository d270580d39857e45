use std::sync::Arc;

use crate::metadata::{
    members::{Modifiers, Visibility},
    token::Token,
    typesystem::TypeName,
};

/// A vector that holds a list of `Method`
pub type MethodList = Arc<boxcar::Vec<MethodRc>>;
/// Reference to a `Method`
pub type MethodRc = Arc<Method>;

/// A method as declared on a class
#[derive(Debug)]
pub struct Method {
    /// Identity of this method
    pub token: Token,
    /// Canonical name of the declaring class
    pub declaring: TypeName,
    /// Declared modifiers
    pub modifiers: Modifiers,
    /// The method name, compared case-sensitively
    pub name: String,
    /// Declared return type, `void` for none
    pub return_type: TypeName,
    /// Parameter types in declaration order
    pub params: Vec<TypeName>,
    /// Types listed in the `throws` clause
    pub exceptions: Vec<TypeName>,
}

impl Method {
    /// Access level of this method
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.modifiers.visibility()
    }
}
