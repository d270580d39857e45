//! Runtime instances and the values stored in their fields.
//!
//! An [`Object`] is an instance of a [`ClassDef`]. It stores one value per declared
//! field of its class and of every ancestor, keyed by the declaring class and the field
//! name, so a subclass field may shadow a parent field of the same name. Fields that
//! were never set read as the default of their declared type.
//!
//! # Examples
//!
//! ```rust
//! use memberscope::metadata::{members::Modifiers, object::{Object, Value}, typesystem::ClassBuilder};
//!
//! let node = ClassBuilder::new("Node")
//!     .field(Modifiers::PRIVATE, "value", "int")
//!     .field(Modifiers::PRIVATE, "next", "Node")
//!     .build();
//!
//! let tail = Object::builder(&node).set("value", Value::Int(2))?.build();
//! let head = Object::builder(&node)
//!     .set("value", Value::Int(1))?
//!     .set("next", Value::Object(tail))?
//!     .build();
//! assert_eq!(head.class().name.as_str(), "Node");
//! # Ok::<(), memberscope::Error>(())
//! ```

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    metadata::typesystem::{ClassRc, TypeMetadata, TypeName},
    Error, Result,
};

/// Reference to an `Object`
pub type ObjectRc = Arc<Object>;

/// A value held by a field.
///
/// Objects compare by identity, everything else by value.
#[derive(Clone, Debug)]
pub enum Value {
    /// The null reference
    Null,
    /// `boolean`
    Bool(bool),
    /// `char`
    Char(char),
    /// `byte`, `short` and `int`
    Int(i32),
    /// `long`
    Long(i64),
    /// `float` and `double`
    Double(f64),
    /// `java.lang.String`
    Str(String),
    /// Any other reference
    Object(ObjectRc),
}

impl Value {
    /// The value an unset field of type `ty` holds
    #[must_use]
    pub fn default_for(ty: &TypeName) -> Self {
        match ty.as_str() {
            "boolean" => Value::Bool(false),
            "char" => Value::Char('\0'),
            "byte" | "short" | "int" => Value::Int(0),
            "long" => Value::Long(0),
            "float" | "double" => Value::Double(0.0),
            _ => Value::Null,
        }
    }

    /// True for [`Value::Null`]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<ObjectRc> for Value {
    fn from(value: ObjectRc) -> Self {
        Value::Object(value)
    }
}

/// Read side of an instance, as needed by field reads.
///
/// Implemented by [`Object`]; hosts with their own object model implement it to make
/// their instances readable through [`crate::metadata::members::Field::read`].
pub trait InstanceData {
    /// Canonical name of the instance's runtime class
    fn class_name(&self) -> &TypeName;

    /// True if the runtime class is `ty` or inherits from it
    fn is_instance_of(&self, ty: &TypeName) -> bool;

    /// The stored value of the field `name` declared by `declaring`, `None` if unset
    fn slot(&self, declaring: &TypeName, name: &str) -> Option<Value>;
}

/// An instance of a class
pub struct Object {
    class: ClassRc,
    values: HashMap<(TypeName, String), Value>,
}

impl Object {
    /// Start building an instance of `class`
    #[must_use]
    pub fn builder(class: &ClassRc) -> ObjectBuilder {
        ObjectBuilder {
            class: class.clone(),
            values: HashMap::new(),
        }
    }

    /// The runtime class of this instance
    #[must_use]
    pub fn class(&self) -> &ClassRc {
        &self.class
    }
}

impl InstanceData for Object {
    fn class_name(&self) -> &TypeName {
        &self.class.name
    }

    fn is_instance_of(&self, ty: &TypeName) -> bool {
        let mut current = Some(self.class.clone());
        while let Some(class) = current {
            if &class.name == ty {
                return true;
            }
            current = class.superclass();
        }
        false
    }

    fn slot(&self, declaring: &TypeName, name: &str) -> Option<Value> {
        self.values
            .get(&(declaring.clone(), name.to_string()))
            .cloned()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class", &self.class.name)
            .field("fields", &self.values.len())
            .finish()
    }
}

/// Builder for [`Object`]
pub struct ObjectBuilder {
    class: ClassRc,
    values: HashMap<(TypeName, String), Value>,
}

impl ObjectBuilder {
    /// Set the field `name`, declared by the class itself or the nearest ancestor
    /// declaring a field of that name.
    ///
    /// # Errors
    /// Returns [`Error::FieldNotFound`] if neither the class nor any ancestor declares it.
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
        let mut current = Some(self.class.clone());
        while let Some(class) = current {
            if class.fields.iter().any(|(_, field)| field.name == name) {
                self.values
                    .insert((class.name.clone(), name.to_string()), value.into());
                return Ok(self);
            }
            current = class.superclass();
        }

        Err(Error::FieldNotFound {
            owner: self.class.name.to_string(),
            name: name.to_string(),
        })
    }

    /// Set the field `name` declared by the ancestor (or the class itself) named
    /// `declaring`, needed when a subclass shadows a parent field.
    ///
    /// # Errors
    /// Returns [`Error::TypeNotFound`] if `declaring` is not in the class hierarchy and
    /// [`Error::FieldNotFound`] if it does not declare `name`.
    pub fn set_on(mut self, declaring: &str, name: &str, value: impl Into<Value>) -> Result<Self> {
        let mut current = Some(self.class.clone());
        while let Some(class) = current {
            if class.name.as_str() == declaring {
                if !class.fields.iter().any(|(_, field)| field.name == name) {
                    return Err(Error::FieldNotFound {
                        owner: declaring.to_string(),
                        name: name.to_string(),
                    });
                }
                self.values
                    .insert((class.name.clone(), name.to_string()), value.into());
                return Ok(self);
            }
            current = class.superclass();
        }

        Err(Error::TypeNotFound(format!(
            "'{}' is not an ancestor of '{}'",
            declaring, self.class.name
        )))
    }

    /// Finish the instance
    #[must_use]
    pub fn build(self) -> ObjectRc {
        Arc::new(Object {
            class: self.class,
            values: self.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{members::Modifiers, typesystem::ClassBuilder};

    #[test]
    fn test_default_values() {
        assert_eq!(Value::default_for(&"int".into()), Value::Int(0));
        assert_eq!(Value::default_for(&"boolean".into()), Value::Bool(false));
        assert_eq!(Value::default_for(&"double".into()), Value::Double(0.0));
        assert!(Value::default_for(&"java.lang.String".into()).is_null());
    }

    #[test]
    fn test_object_identity() {
        let class = ClassBuilder::new("Point").build();
        let a = Object::builder(&class).build();
        let b = Object::builder(&class).build();

        assert_eq!(Value::Object(a.clone()), Value::Object(a.clone()));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn test_set_unknown_field() {
        let class = ClassBuilder::new("Point")
            .field(Modifiers::PRIVATE, "x", "int")
            .build();
        let result = Object::builder(&class).set("y", 3);
        assert!(matches!(result, Err(Error::FieldNotFound { .. })));
    }

    #[test]
    fn test_set_inherited_and_shadowed() {
        let parent = ClassBuilder::new("Base")
            .field(Modifiers::PROTECTED, "id", "int")
            .build();
        let child = ClassBuilder::new("Derived")
            .extends(&parent)
            .field(Modifiers::PRIVATE, "id", "int")
            .build();

        let obj = Object::builder(&child)
            .set("id", 7)
            .unwrap()
            .set_on("Base", "id", 3)
            .unwrap()
            .build();

        assert_eq!(obj.slot(&"Derived".into(), "id"), Some(Value::Int(7)));
        assert_eq!(obj.slot(&"Base".into(), "id"), Some(Value::Int(3)));
        assert!(obj.is_instance_of(&"Base".into()));
        assert!(!obj.is_instance_of(&"Other".into()));

        assert!(matches!(
            Object::builder(&child).set_on("Other", "id", 1),
            Err(Error::TypeNotFound(_))
        ));
    }
}
