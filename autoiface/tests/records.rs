//! Members records declare through their parameter list.

mod common;

use autoiface::RecordParameterTracker;
use autoiface::symbols::{Scope, SymbolTable};
use autoiface_syntax::{
    Attribute, FieldDecl, MemberDecl, MethodDecl, Parameter, PropertyDecl, TypeDecl, TypeKind,
};
use common::{expected, generate_text, marker_list};
use indoc::indoc;

fn person(kind: TypeKind) -> TypeDecl {
    TypeDecl::new(kind, "Person")
        .with_modifier("public")
        .with_attribute_list(marker_list())
        .with_parameter_list([Parameter::new("int", "Age"), Parameter::new("string", "Name")])
}

fn out(ty: &str, name: &str) -> Parameter {
    Parameter::new(ty, name).with_modifier("out")
}

#[autoiface_testhelpers::test]
fn test_record_class() {
    let text = generate_text([person(TypeKind::RecordClass)]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson {
                int Age { get; init; }

                string Name { get; init; }

                void Deconstruct(out int Age, out string Name);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_record_struct() {
    let text = generate_text([person(TypeKind::RecordStruct)]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson {
                int Age { get; set; }

                string Name { get; set; }

                void Deconstruct(out int Age, out string Name);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_readonly_record_struct() {
    let text = generate_text([person(TypeKind::RecordStruct).with_modifier("readonly")]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson {
                int Age { get; init; }

                string Name { get; init; }

                void Deconstruct(out int Age, out string Name);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_declared_property_shadows_parameter() {
    let decl = person(TypeKind::RecordClass)
        .with_member(MethodDecl::new("void", "Greet").public())
        .with_member(PropertyDecl::new("int", "Age").public().get_set());

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson {
                void Greet();

                int Age { get; set; }

                string Name { get; init; }

                void Deconstruct(out int Age, out string Name);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_shadowing_members_count_even_when_not_projected() {
    let decl = person(TypeKind::RecordClass)
        .with_member(FieldDecl::new("int", ["Age"]).with_modifier("private"))
        .with_member(
            PropertyDecl::new("string", "Name")
                .public()
                .get_set()
                .with_attribute(Attribute::new("IgnoreAutoInterface")),
        );

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson {
                void Deconstruct(out int Age, out string Name);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_overwritten_deconstruct() {
    let decl = person(TypeKind::RecordClass).with_member(
        MethodDecl::new("void", "Deconstruct")
            .public()
            .with_parameter(out("int", "age"))
            .with_parameter(out("string", "name")),
    );

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson {
                void Deconstruct(out int age, out string name);

                int Age { get; init; }

                string Name { get; init; }
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_non_matching_deconstruct_does_not_overwrite() {
    let decl = person(TypeKind::RecordClass)
        .with_member(
            MethodDecl::new("void", "Deconstruct")
                .public()
                .with_parameter(out("int", "age")),
        )
        .with_member(
            MethodDecl::new("void", "Deconstruct")
                .public()
                .with_parameter(out("long", "age"))
                .with_parameter(out("string", "name")),
        );

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson {
                void Deconstruct(out int age);

                void Deconstruct(out long age, out string name);

                int Age { get; init; }

                string Name { get; init; }

                void Deconstruct(out int Age, out string Name);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_deconstruct_written_with_system_names_overwrites() {
    let decl = person(TypeKind::RecordClass).with_member(
        MethodDecl::new("void", "Deconstruct")
            .public()
            .with_parameter(out("System.Int32", "age"))
            .with_parameter(out("System.String", "name")),
    );

    let text = generate_text([decl]);
    assert_eq!(text.matches("Deconstruct").count(), 1);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson {
                void Deconstruct(out System.Int32 age, out System.String name);

                int Age { get; init; }

                string Name { get; init; }
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_empty_parameter_list() {
    let decl = TypeDecl::record("Person")
        .with_attribute_list(marker_list())
        .with_parameter_list([]);

    let text = generate_text([decl]);
    assert_eq!(text, expected("public partial interface IPerson {}\n"));
}

#[autoiface_testhelpers::test]
fn test_primary_constructor_of_class_declares_nothing() {
    let decl = TypeDecl::class("Person")
        .with_attribute_list(marker_list())
        .with_parameter_list([Parameter::new("int", "Age")]);

    let text = generate_text([decl]);
    assert_eq!(text, expected("public partial interface IPerson {}\n"));
}

#[autoiface_testhelpers::test]
fn test_tracker_bookkeeping() {
    let decl = person(TypeKind::RecordClass);
    let table = SymbolTable::new();
    let scope = Scope::default();
    let mut tracker = RecordParameterTracker::new(&decl).unwrap();
    assert!(!tracker.is_shadowed(0));
    assert!(!tracker.deconstruct_overwritten());

    tracker.observe(
        &MemberDecl::from(PropertyDecl::new("string", "Name").explicit("IPerson")),
        &scope,
        &table,
    );
    assert!(!tracker.is_shadowed(1), "explicit implementations do not shadow");

    tracker.observe(&MemberDecl::from(FieldDecl::new("string", ["Name"])), &scope, &table);
    assert!(tracker.is_shadowed(1));

    let static_deconstruct = MethodDecl::new("void", "Deconstruct")
        .with_modifier("static")
        .with_parameter(out("int", "a"))
        .with_parameter(out("string", "b"));
    tracker.observe(&MemberDecl::from(static_deconstruct), &scope, &table);
    assert!(!tracker.deconstruct_overwritten());

    let mismatched = MethodDecl::new("void", "Deconstruct")
        .with_parameter(out("System.Int64", "a"))
        .with_parameter(out("string", "b"));
    tracker.observe(&MemberDecl::from(mismatched), &scope, &table);
    assert!(!tracker.deconstruct_overwritten());

    let deconstruct = MethodDecl::new("void", "Deconstruct")
        .with_parameter(out("System.Int32", "a"))
        .with_parameter(out("string", "b"));
    tracker.observe(&MemberDecl::from(deconstruct), &scope, &table);
    assert!(tracker.deconstruct_overwritten());
    assert_eq!(tracker.synthesized().len(), 1);
    assert!(!tracker.is_shadowed(7));

    assert!(RecordParameterTracker::new(&TypeDecl::class("Plain")).is_none());
}
