//! Base interfaces and deduplication of inherited members.

mod common;

use autoiface::symbols::SymbolTable;
use autoiface::{EligibilityPolicy, Generator, GeneratorOptions, Request};
use autoiface_syntax::{
    Accessor, AccessorKind, Attribute, EventFieldDecl, Expression, MethodDecl, Parameter,
    PropertyDecl, TypeDecl, TypeParameter,
};
use common::{expected, generate_text, marker, source};
use indoc::indoc;

fn inheriting(bases: &[&str]) -> Attribute {
    marker().with_named(
        "Inheritance",
        Expression::ImplicitArray(bases.iter().map(|b| Expression::type_of(*b)).collect()),
    )
}

fn test_class(bases: &[&str]) -> TypeDecl {
    TypeDecl::class("Test")
        .with_modifier("public")
        .with_attribute(inheriting(bases))
}

#[autoiface_testhelpers::test]
fn test_inherited_members_are_left_out() {
    let base = TypeDecl::interface("IBase")
        .with_member(MethodDecl::new("int", "MTest"))
        .with_member(PropertyDecl::new("string", "Name").with_accessor(Accessor::new(AccessorKind::Get)));
    let decl = test_class(&["IBase"])
        .with_member(MethodDecl::new("int", "MTest").public())
        .with_member(PropertyDecl::new("string", "Name").public().with_accessor(Accessor::new(AccessorKind::Get)))
        .with_member(MethodDecl::new("int", "Other").public());

    let text = generate_text([base, decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest : MyCode.IBase {
                int Other();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_signature_mismatches_are_kept() {
    let base = TypeDecl::interface("IBase")
        .with_member(MethodDecl::new("int", "Ret"))
        .with_member(MethodDecl::new("void", "Param").with_parameter(Parameter::new("int", "a")))
        .with_member(MethodDecl::new("void", "ByRef").with_parameter(Parameter::new("int", "a")))
        .with_member(MethodDecl::new("void", "Generic").with_type_parameter("T"))
        .with_member(PropertyDecl::new("int", "Shape").with_accessor(Accessor::new(AccessorKind::Get)))
        .with_member(PropertyDecl::new("int", "Kind").with_accessor(Accessor::new(AccessorKind::Get)))
        .with_member(PropertyDecl::new("string?", "Nullable").with_accessor(Accessor::new(AccessorKind::Get)))
        .with_member(MethodDecl::new("int", "Static"));
    let decl = test_class(&["IBase"])
        .with_attribute(Attribute::new("Serializable"))
        .with_member(MethodDecl::new("long", "Ret").public())
        .with_member(MethodDecl::new("void", "Param").public().with_parameter(Parameter::new("long", "a")))
        .with_member(
            MethodDecl::new("void", "ByRef")
                .public()
                .with_parameter(Parameter::new("int", "a").with_modifier("ref")),
        )
        .with_member(
            MethodDecl::new("void", "Generic")
                .public()
                .with_type_parameter("T")
                .with_type_parameter("U"),
        )
        .with_member(PropertyDecl::new("int", "Shape").public().get_set())
        .with_member(MethodDecl::new("int", "Kind").public())
        .with_member(PropertyDecl::new("string", "Nullable").public().with_accessor(Accessor::new(AccessorKind::Get)));

    let text = generate_text([base, decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest : MyCode.IBase {
                long Ret();

                void Param(long a);

                void ByRef(ref int a);

                void Generic<T, U>();

                int Shape { get; set; }

                int Kind();

                string Nullable { get; }
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_static_mismatch_is_kept() {
    let base = TypeDecl::interface("IBase").with_member(MethodDecl::new("int", "Create"));
    let decl = TypeDecl::class("Test")
        .with_attribute(
            inheriting(&["IBase"]).with_named("StaticMembers", Expression::bool(true)),
        )
        .with_member(MethodDecl::new("int", "Create").public().with_modifier("static"));

    let text = generate_text([base, decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest : MyCode.IBase {
                static abstract int Create();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_transitive_bases() {
    let root = TypeDecl::interface("IRoot").with_member(MethodDecl::new("void", "A"));
    let middle = TypeDecl::interface("IMiddle")
        .with_base("IRoot")
        .with_member(MethodDecl::new("void", "B"));
    let decl = test_class(&["IMiddle"])
        .with_member(MethodDecl::new("void", "A").public())
        .with_member(MethodDecl::new("void", "B").public())
        .with_member(MethodDecl::new("void", "C").public());

    let text = generate_text([root, middle, decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest : MyCode.IMiddle {
                void C();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_cyclic_bases_terminate() {
    let a = TypeDecl::interface("IA").with_base("IB");
    let b = TypeDecl::interface("IB").with_base("IA");
    let decl = test_class(&["IA"]).with_member(MethodDecl::new("void", "Run").public());

    let text = generate_text([a, b, decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest : MyCode.IA {
                void Run();
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_generic_base_is_substituted() {
    let repo = TypeDecl::interface("IRepo")
        .with_type_parameter(TypeParameter::new("T"))
        .with_member(MethodDecl::new("T", "Get").with_parameter(Parameter::new("int", "id")))
        .with_member(EventFieldDecl::new("Action<T>", ["Changed"]));
    let decl = test_class(&["IRepo<string>"])
        .with_member(MethodDecl::new("string", "Get").public().with_parameter(Parameter::new("int", "id")))
        .with_member(MethodDecl::new("int", "Get").public().with_parameter(Parameter::new("string", "name")))
        .with_member(EventFieldDecl::new("Action<string>", ["Changed"]).public());

    let text = generate_text([repo, decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest : MyCode.IRepo<string> {
                int Get(string name);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_unknown_base_is_printed_as_written() {
    let decl = test_class(&["IUnknown", "IBase"]).with_member(MethodDecl::new("int", "MTest").public());
    let base = TypeDecl::interface("IBase").with_member(MethodDecl::new("int", "MTest"));

    let text = generate_text([decl, base]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest : IUnknown, MyCode.IBase {}
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_synthesized_record_members_are_deduplicated() {
    let base = TypeDecl::interface("IHasId").with_member(
        PropertyDecl::new("int", "Id")
            .with_accessor(Accessor::new(AccessorKind::Get))
            .with_accessor(Accessor::new(AccessorKind::Init)),
    );
    let decl = TypeDecl::record("Person")
        .with_attribute(inheriting(&["IHasId"]))
        .with_parameter_list([Parameter::new("int", "Id"), Parameter::new("string", "Name")]);

    let text = generate_text([base, decl]);
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface IPerson : MyCode.IHasId {
                string Name { get; init; }

                void Deconstruct(out int Id, out string Name);
            }
        "})
    );
}

#[autoiface_testhelpers::test]
fn test_declared_modifiers_policy_keeps_inherited_members() {
    let tree = source([
        TypeDecl::interface("IBase").with_member(MethodDecl::new("int", "MTest")),
        test_class(&["IBase"]).with_member(MethodDecl::new("int", "MTest").public()),
    ]);
    let table = SymbolTable::from_tree(&tree);
    let (node, decl) = tree.type_declarations().nth(1).unwrap();
    let marker = &decl.attribute_lists[0].attributes[0];

    let generator =
        Generator::new(GeneratorOptions::new().with_policy(EligibilityPolicy::DeclaredModifiers));
    let text = generator
        .generate(&Request::new(&tree, node, marker, &table))
        .into_source()
        .unwrap()
        .text;
    assert_eq!(
        text,
        expected(indoc! {"
            public partial interface ITest : MyCode.IBase {
                int MTest();
            }
        "})
    );
}
