//! Shared class fixtures for unit tests.

use crate::metadata::{
    members::Modifiers,
    typesystem::{ClassBuilder, ClassRc},
};

/// `public class Foo { public Foo(int) }`
pub fn foo_class() -> ClassRc {
    ClassBuilder::new("Foo")
        .constructor(Modifiers::PUBLIC, &["int"])
        .build()
}

/// A class with a private getter and a two-argument mutator
pub fn person_class() -> ClassRc {
    ClassBuilder::new("school.Person")
        .field(Modifiers::PRIVATE, "name", "java.lang.String")
        .constructor(Modifiers::PUBLIC, &["java.lang.String"])
        .method(Modifiers::PRIVATE, "java.lang.String", "getName", &[])
        .method(
            Modifiers::PUBLIC,
            "void",
            "rename",
            &["java.lang.String", "int"],
        )
        .build()
}

/// A class whose members declare checked exceptions
pub fn reader_class() -> ClassRc {
    ClassBuilder::new("io.LineReader")
        .constructor_throws(
            Modifiers::PUBLIC,
            &["java.lang.String"],
            &["java.io.FileNotFoundException"],
        )
        .method_throws(
            Modifiers::PUBLIC,
            "java.lang.String",
            "readLine",
            &[],
            &["java.io.IOException", "java.io.EOFException"],
        )
        .build()
}

/// A doubly linked node: `int value`, `Node next`, `Node prev`
pub fn node_class() -> ClassRc {
    ClassBuilder::new("Node")
        .field(Modifiers::PRIVATE, "value", "int")
        .field(Modifiers::PRIVATE, "next", "Node")
        .field(Modifiers::PRIVATE, "prev", "Node")
        .build()
}

/// `Person { private String name }` and `Student extends Person { private String school }`
pub fn student_hierarchy() -> (ClassRc, ClassRc) {
    let person = ClassBuilder::new("Person")
        .field(Modifiers::PRIVATE, "name", "java.lang.String")
        .build();
    let student = ClassBuilder::new("Student")
        .extends(&person)
        .field(Modifiers::PRIVATE, "school", "java.lang.String")
        .build();
    (person, student)
}
