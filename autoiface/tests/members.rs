//! Which members end up in the interface, and how each kind is written.

mod common;

use autoiface_syntax::{
    Accessor, AccessorKind, Attribute, ConstraintClause, DocComment, EventDecl, EventFieldDecl,
    FieldDecl, IndexerDecl, MethodDecl, OtherMember, Parameter, PropertyDecl, TypeDecl,
    TypeParameter,
};
use common::{expected, generate, generate_text, marker, marker_list, source};
use indoc::indoc;

fn test_class() -> TypeDecl {
    TypeDecl::class("Test")
        .with_modifier("public")
        .with_attribute_list(marker_list())
}

#[autoiface_testhelpers::test]
fn test_no_members() {
    let text = generate_text([test_class()]);
    assert_eq!(text, expected("public partial interface ITest {}\n"));
}

#[autoiface_testhelpers::test]
fn test_methods() {
    let decl = test_class()
        .with_member(MethodDecl::new("int", "MTest").public())
        .with_member(
            MethodDecl::new("void", "Log")
                .public()
                .with_parameter(Parameter::new("string", "message"))
                .with_parameter(Parameter::new("object[]", "args").with_modifier("params")),
        )
        .with_member(
            MethodDecl::new("T", "Get")
                .public()
                .with_type_parameter("T")
                .with_parameter(Parameter::new("int", "index").with_default("0"))
                .with_constraint(ConstraintClause::new("T", ["class"])),
        );

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest {
                int MTest();

                void Log(string message, params object[] args);

                T Get<T>(int index = 0) where T : class;
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_non_public_members_are_left_out() {
    let decl = test_class()
        .with_member(MethodDecl::new("int", "Internal").with_modifier("internal"))
        .with_member(MethodDecl::new("int", "Private").with_modifier("private"))
        .with_member(MethodDecl::new("int", "Implicit"))
        .with_member(
            MethodDecl::new("int", "Protected")
                .with_modifier("protected")
                .with_modifier("internal"),
        )
        .with_member(MethodDecl::new("int", "Static").public().with_modifier("static"))
        .with_member(
            PropertyDecl::new("int", "OneProp")
                .public()
                .with_accessor(Accessor::new(AccessorKind::Get).with_modifier("private"))
                .with_accessor(Accessor::new(AccessorKind::Set)),
        );

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest {
                int OneProp { set; }
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_properties() {
    let decl = test_class()
        .with_member(PropertyDecl::new("int", "A").public().get_set())
        .with_member(PropertyDecl::new("string", "B").public())
        .with_member(
            PropertyDecl::new("List<string>?", "C")
                .public()
                .with_accessor(Accessor::new(AccessorKind::Get))
                .with_accessor(Accessor::new(AccessorKind::Init)),
        );

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest {
                int A { get; set; }

                string B { get; }

                List<string>? C { get; init; }
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_indexers_and_events() {
    let decl = test_class()
        .with_member(
            IndexerDecl::new("int")
                .public()
                .with_parameter(Parameter::new("int", "i"))
                .with_accessor(Accessor::new(AccessorKind::Get))
                .with_accessor(Accessor::new(AccessorKind::Set)),
        )
        .with_member(
            IndexerDecl::new("string")
                .public()
                .with_parameter(Parameter::new("int", "x"))
                .with_parameter(Parameter::new("int", "y")),
        )
        .with_member(EventFieldDecl::new("Action", ["Started", "Stopped"]).public())
        .with_member(EventDecl::new("EventHandler", "Changed").public());

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest {
                int this[int i] { get; set; }

                string this[int x, int y] { get; }

                event Action Started, Stopped;

                event EventHandler Changed;
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_fields_and_other_kinds_are_skipped() {
    let decl = test_class()
        .with_member(FieldDecl::new("int", ["count"]).public())
        .with_member(OtherMember::new("constructor").public())
        .with_member(OtherMember::new("operator").public().with_modifier("static"));

    let text = generate_text([decl]);
    assert_eq!(text, expected("public partial interface ITest {}\n"));
}

#[autoiface_testhelpers::test]
fn test_docs_are_copied() {
    let decl = test_class()
        .with_docs(DocComment::new([" <summary>", " A test.", " </summary>"]))
        .with_member(
            MethodDecl::new("int", "MTest")
                .public()
                .with_docs(DocComment::new([" <summary>", " Returns one.", " </summary>"])),
        );

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            /// <summary>
            /// A test.
            /// </summary>
            public partial interface ITest {
                /// <summary>
                /// Returns one.
                /// </summary>
                int MTest();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_member_attributes_are_copied() {
    let decl = test_class().with_member(
        MethodDecl::new("int", "MTest")
            .public()
            .with_attribute(Attribute::new("Obsolete")),
    );

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest {
                [Obsolete]
                int MTest();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_ignore_marker_applies_to_every_kind() {
    let ignore = || Attribute::new("IgnoreAutoInterface");
    let decl = test_class()
        .with_member(MethodDecl::new("int", "M").public().with_attribute(ignore()))
        .with_member(
            PropertyDecl::new("int", "P")
                .public()
                .get_set()
                .with_attribute(Attribute::new("IgnoreAutoInterfaceAttribute")),
        )
        .with_member(
            IndexerDecl::new("int")
                .public()
                .with_parameter(Parameter::new("int", "i"))
                .with_attribute(ignore()),
        )
        .with_member(EventFieldDecl::new("Action", ["E"]).public().with_attribute(ignore()))
        .with_member(EventDecl::new("Action", "F").public().with_attribute(ignore()))
        .with_member(MethodDecl::new("int", "Kept").public());

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest {
                int Kept();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_explicit_implementations() {
    let decl = test_class()
        .with_member(MethodDecl::new("int", "Mine").explicit("ITest"))
        .with_member(PropertyDecl::new("int", "Qualified").get_set().explicit("MyCode.ITest"))
        .with_member(MethodDecl::new("void", "Dispose").explicit("IDisposable"))
        .with_member(EventDecl::new("Action", "Other").explicit("IOther"));

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest {
                int Mine();

                int Qualified { get; set; }
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_explicit_implementation_of_renamed_interface() {
    let decl = TypeDecl::class("Test")
        .with_attribute(
            marker().with_named("Name", autoiface_syntax::Expression::string("IRenamed")),
        )
        .with_member(MethodDecl::new("int", "Kept").explicit("IRenamed"))
        .with_member(MethodDecl::new("int", "Dropped").explicit("ITest"));

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IRenamed {
                int Kept();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_static_members() {
    let members = |decl: TypeDecl| {
        decl.with_member(MethodDecl::new("Test", "Create").public().with_modifier("static"))
            .with_member(PropertyDecl::new("int", "Count").public().with_modifier("static"))
            .with_member(MethodDecl::new("int", "MTest").public())
    };

    let without = generate_text([members(test_class())]);
    assert_eq!(
        without,
        expected(indoc! {"
            public partial interface ITest {
                int MTest();
            }
        "})
    );

    let with = generate_text([members(TypeDecl::class("Test").with_attribute(
        marker().with_named("StaticMembers", autoiface_syntax::Expression::bool(true)),
    ))]);
    assert_eq!(
        with,
        expected(indoc! {"
            public partial interface ITest {
                static abstract Test Create();

                static abstract int Count { get; }

                int MTest();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_generic_type() {
    let decl = test_class()
        .with_type_parameter(TypeParameter::new("T"))
        .with_type_parameter(TypeParameter::new("U"))
        .with_member(MethodDecl::new("T", "Convert").public().with_parameter(Parameter::new("U", "value")));

    let sources = generate(&source([decl]));
    assert_eq!(sources.len(), 1);
    insta::assert_snapshot!(sources[0].key.to_string(), @"ITest_MyCode.Test`2_Test.cs.g.cs");
    assert_eq!(
        sources[0].text,
        expected(indoc! {"
            public partial interface ITest<T, U> {
                T Convert(U value);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_structs_and_records_are_marked_too() {
    let tree = source([
        TypeDecl::new(autoiface_syntax::TypeKind::Struct, "Point").with_attribute_list(marker_list()),
        TypeDecl::record("Person").with_attribute_list(marker_list()),
        TypeDecl::interface("IAlready").with_attribute_list(marker_list()),
    ]);

    let keys: Vec<String> = generate(&tree).into_iter().map(|s| s.key.into()).collect();
    assert_eq!(
        keys,
        [
            "IPoint_MyCode.Point_Test.cs.g.cs",
            "IPerson_MyCode.Person_Test.cs.g.cs"
        ]
    );
}

#[autoiface_testhelpers::test]
fn test_identical_declarations_are_emitted_once() {
    let decl = test_class()
        .with_member(MethodDecl::new("int", "MTest").public())
        .with_member(MethodDecl::new("int", "MTest").public());

    let text = generate_text([decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest {
                int MTest();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_projection_is_repeatable() {
    let tree = source([test_class()
        .with_member(MethodDecl::new("int", "A").public())
        .with_member(PropertyDecl::new("int", "B").public().get_set())]);

    assert_eq!(generate(&tree), generate(&tree));
}
