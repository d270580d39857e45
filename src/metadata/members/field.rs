use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    metadata::{
        members::{Modifiers, Visibility},
        object::{InstanceData, Value},
        token::Token,
        typesystem::TypeName,
    },
    Error, Result,
};

/// A vector that holds a list of `Field`
pub type FieldList = Arc<boxcar::Vec<FieldRc>>;
/// Reference to a `Field`
pub type FieldRc = Arc<Field>;

/// A field as declared on a class.
///
/// Besides its declaration, a field carries an accessibility override. While the
/// override is set the field can be read regardless of its visibility. The override is
/// meant to be held only for the duration of a single read, see [`Field::elevate`].
#[derive(Debug)]
pub struct Field {
    /// Identity of this field
    pub token: Token,
    /// Canonical name of the declaring class
    pub declaring: TypeName,
    /// Declared modifiers
    pub modifiers: Modifiers,
    /// The field name
    pub name: String,
    /// Declared type
    pub field_type: TypeName,
    accessible: AtomicBool,
}

impl Field {
    /// Create a new field declaration, initially without access override
    #[must_use]
    pub fn new(
        token: Token,
        declaring: TypeName,
        modifiers: Modifiers,
        name: impl Into<String>,
        field_type: TypeName,
    ) -> Self {
        Field {
            token,
            declaring,
            modifiers,
            name: name.into(),
            field_type,
            accessible: AtomicBool::new(false),
        }
    }

    /// Access level of this field
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.modifiers.visibility()
    }

    /// Current state of the access override
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        self.accessible.load(Ordering::Acquire)
    }

    /// Set the access override, returning the previous state
    pub fn set_accessible(&self, accessible: bool) -> bool {
        self.accessible.swap(accessible, Ordering::AcqRel)
    }

    /// Elevate access until the returned guard is dropped.
    ///
    /// The guard restores the state the field had before, on every exit path. Guards on
    /// the same field from several threads must not interleave; there is no lock.
    #[must_use = "access is restored as soon as the guard is dropped"]
    pub fn elevate(&self) -> AccessGuard<'_> {
        let previous = self.set_accessible(true);
        AccessGuard {
            field: self,
            previous,
        }
    }

    /// Read this field from `instance`, honouring visibility.
    ///
    /// A field that was never set on the instance reads as the default value of its type.
    ///
    /// # Errors
    /// - [`Error::AccessDenied`] if the field is not public and not currently accessible
    /// - [`Error::IncompatibleInstance`] if `instance` is not of the declaring class
    pub fn read<I: InstanceData + ?Sized>(&self, instance: &I) -> Result<Value> {
        if self.visibility() != Visibility::Public && !self.is_accessible() {
            return Err(Error::AccessDenied {
                owner: self.declaring.to_string(),
                name: self.name.clone(),
            });
        }

        if !instance.is_instance_of(&self.declaring) {
            return Err(Error::IncompatibleInstance {
                field: format!("{}.{}", self.declaring, self.name),
                instance: instance.class_name().to_string(),
            });
        }

        Ok(instance
            .slot(&self.declaring, &self.name)
            .unwrap_or_else(|| Value::default_for(&self.field_type)))
    }

    /// Read this field with access elevated for exactly this one read
    ///
    /// # Errors
    /// Returns [`Error::IncompatibleInstance`] if `instance` is not of the declaring class
    pub fn read_elevated<I: InstanceData + ?Sized>(&self, instance: &I) -> Result<Value> {
        let _guard = self.elevate();
        self.read(instance)
    }
}

/// Scoped access elevation of a [`Field`], restored on drop
pub struct AccessGuard<'a> {
    field: &'a Field,
    previous: bool,
}

impl Drop for AccessGuard<'_> {
    fn drop(&mut self) {
        self.field.set_accessible(self.previous);
    }
}
