//! Reading instance fields without going through accessor methods.
//!
//! Each read elevates access on exactly one field for exactly that read, so private
//! fields can be inspected and are left as they were afterwards. Batch reads are
//! all-or-nothing: if any single read fails the whole batch is `None`.
//!
//! Only the fields a class *declares* are considered. [`FieldAccessor::get_all_from_parent`]
//! reaches one level up, to the fields of the direct superclass.

use log::debug;

use crate::metadata::{
    members::FieldRc,
    object::{InstanceData, Value},
    typesystem::{TypeMetadata, TypeName},
};

/// Reflective field reads on instances
pub struct FieldAccessor;

impl FieldAccessor {
    /// The value of the field `field_name` declared by `target`, read from `instance`.
    ///
    /// Returns `None` if no such field is declared or it cannot be read from `instance`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memberscope::{
    ///     inspect::FieldAccessor,
    ///     metadata::{members::Modifiers, object::{Object, Value}, typesystem::ClassBuilder},
    /// };
    ///
    /// let account = ClassBuilder::new("Account")
    ///     .field(Modifiers::PRIVATE, "balance", "long")
    ///     .build();
    /// let instance = Object::builder(&account).set("balance", 120i64)?.build();
    ///
    /// assert_eq!(
    ///     FieldAccessor::get_by_name(&*account, "balance", &*instance),
    ///     Some(Value::Long(120))
    /// );
    /// assert_eq!(FieldAccessor::get_by_name(&*account, "owner", &*instance), None);
    /// # Ok::<(), memberscope::Error>(())
    /// ```
    pub fn get_by_name<T, I>(target: &T, field_name: &str, instance: &I) -> Option<Value>
    where
        T: TypeMetadata + ?Sized,
        I: InstanceData + ?Sized,
    {
        let field = target
            .declared_fields()
            .into_iter()
            .find(|field| field.name == field_name)?;
        read_one(&field, instance)
    }

    /// Values of every field declared by `target` with the declared type `field_type`,
    /// in declaration order.
    ///
    /// Fields of the target's own type are returned as the raw reference, nothing is
    /// followed. Returns an empty list when no field has that type.
    pub fn get_all_by_type<T, I>(
        target: &T,
        field_type: &TypeName,
        instance: &I,
    ) -> Option<Vec<Value>>
    where
        T: TypeMetadata + ?Sized,
        I: InstanceData + ?Sized,
    {
        let fields: Vec<FieldRc> = target
            .declared_fields()
            .into_iter()
            .filter(|field| &field.field_type == field_type)
            .collect();
        read_all(&fields, instance)
    }

    /// Values of every field declared by `target`, in declaration order
    pub fn get_all<T, I>(target: &T, instance: &I) -> Option<Vec<Value>>
    where
        T: TypeMetadata + ?Sized,
        I: InstanceData + ?Sized,
    {
        read_all(&target.declared_fields(), instance)
    }

    /// Values of every field declared by the direct superclass of `target`, read from
    /// `instance`.
    ///
    /// Empty when `target` has no superclass or the superclass declares no fields.
    /// Fields of further ancestors are not included.
    pub fn get_all_from_parent<T, I>(target: &T, instance: &I) -> Option<Vec<Value>>
    where
        T: TypeMetadata + ?Sized,
        I: InstanceData + ?Sized,
    {
        match target.superclass() {
            Some(parent) => read_all(&parent.declared_fields(), instance),
            None => Some(Vec::new()),
        }
    }
}

fn read_one<I: InstanceData + ?Sized>(field: &FieldRc, instance: &I) -> Option<Value> {
    match field.read_elevated(instance) {
        Ok(value) => Some(value),
        Err(error) => {
            debug!("reading {}.{} failed: {}", field.declaring, field.name, error);
            None
        }
    }
}

fn read_all<I: InstanceData + ?Sized>(fields: &[FieldRc], instance: &I) -> Option<Vec<Value>> {
    fields.iter().map(|field| read_one(field, instance)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{members::Modifiers, object::Object, typesystem::ClassBuilder},
        test::{node_class, student_hierarchy},
    };

    #[test]
    fn test_get_by_name_private() {
        let (person, _) = student_hierarchy();
        let alice = Object::builder(&person).set("name", "Alice").unwrap().build();

        assert_eq!(
            FieldAccessor::get_by_name(&*person, "name", &*alice),
            Some(Value::from("Alice"))
        );
        assert!(!person.field("name").unwrap().is_accessible());
    }

    #[test]
    fn test_get_by_name_missing_or_incompatible() {
        let (person, student) = student_hierarchy();
        let node = node_class();
        let stranger = Object::builder(&node).build();
        let bob = Object::builder(&student).build();

        assert_eq!(FieldAccessor::get_by_name(&*person, "age", &*bob), None);
        assert_eq!(FieldAccessor::get_by_name(&*person, "name", &*stranger), None);
        assert_eq!(
            FieldAccessor::get_by_name(&*person, "name", &*bob),
            Some(Value::Null)
        );
    }

    #[test]
    fn test_get_all_by_type_self_typed() {
        let node = node_class();
        let tail = Object::builder(&node).set("value", 2).unwrap().build();
        let head = Object::builder(&node)
            .set("value", 1)
            .unwrap()
            .set("next", tail.clone())
            .unwrap()
            .build();

        let links = FieldAccessor::get_all_by_type(&*node, &node.name, &*head).unwrap();
        assert_eq!(links, vec![Value::Object(tail), Value::Null]);

        let ints = FieldAccessor::get_all_by_type(&*node, &TypeName::new("int"), &*head).unwrap();
        assert_eq!(ints, vec![Value::Int(1)]);

        let none = FieldAccessor::get_all_by_type(&*node, &"double".into(), &*head).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_get_all_in_declaration_order() {
        let node = node_class();
        let single = Object::builder(&node).set("value", 5).unwrap().build();

        assert_eq!(
            FieldAccessor::get_all(&*node, &*single),
            Some(vec![Value::Int(5), Value::Null, Value::Null])
        );
    }

    #[test]
    fn test_get_all_fails_as_a_whole() {
        let node = node_class();
        let (person, _) = student_hierarchy();
        let alice = Object::builder(&person).build();

        assert_eq!(FieldAccessor::get_all(&*node, &*alice), None);
        for field in node.declared_fields() {
            assert!(!field.is_accessible());
        }
    }

    #[test]
    fn test_get_all_from_parent() {
        let (person, student) = student_hierarchy();
        let carol = Object::builder(&student)
            .set("name", "Carol")
            .unwrap()
            .set("school", "UCL")
            .unwrap()
            .build();

        assert_eq!(
            FieldAccessor::get_all_from_parent(&*student, &*carol),
            Some(vec![Value::from("Carol")])
        );
        assert_eq!(
            FieldAccessor::get_all(&*student, &*carol),
            Some(vec![Value::from("UCL")])
        );
        assert_eq!(
            FieldAccessor::get_all_from_parent(&*person, &*carol),
            Some(vec![])
        );
    }

    #[test]
    fn test_get_all_from_parent_stops_at_direct_parent() {
        let entity = ClassBuilder::new("Entity")
            .field(Modifiers::PRIVATE, "id", "long")
            .build();
        let person = ClassBuilder::new("Person")
            .extends(&entity)
            .field(Modifiers::PRIVATE, "name", "java.lang.String")
            .build();
        let student = ClassBuilder::new("Student")
            .extends(&person)
            .field(Modifiers::PRIVATE, "school", "java.lang.String")
            .build();

        let dave = Object::builder(&student)
            .set("id", 42i64)
            .unwrap()
            .set("name", "Dave")
            .unwrap()
            .build();

        assert_eq!(
            FieldAccessor::get_all_from_parent(&*student, &*dave),
            Some(vec![Value::from("Dave")])
        );
        assert_eq!(
            FieldAccessor::get_all_from_parent(&*person, &*dave),
            Some(vec![Value::Long(42)])
        );
    }
}
