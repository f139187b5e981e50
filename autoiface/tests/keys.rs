//! Output keys and shared buffers.

mod common;

use std::collections::HashSet;

use autoiface::{BufferPool, OutputKey, TypeLocation};
use autoiface_syntax::{NamespaceDecl, SyntaxTree, TypeDecl, TypeParameter};
use common::{generate, marker_list};

#[autoiface_testhelpers::test]
fn test_key_includes_containers_and_arity() {
    let mut tree = SyntaxTree::new("C:\\src\\Shapes.cs");
    let root = tree.root();
    let ns = tree.add_namespace(root, NamespaceDecl::block("Geometry"));
    let outer = tree.add_type(
        ns,
        TypeDecl::class("Outer").with_type_parameter(TypeParameter::new("T")),
    );
    let inner = tree.add_type(outer, TypeDecl::class("Shape").with_attribute_list(marker_list()));
    let generic = tree.add_type(
        outer,
        TypeDecl::class("Shape")
            .with_type_parameter(TypeParameter::new("U"))
            .with_attribute_list(marker_list()),
    );

    let location = TypeLocation::of(&tree, inner).unwrap();
    assert_eq!(location.namespace, ["Geometry"]);
    assert_eq!(location.containing_types, [("Outer".to_owned(), 1)]);
    assert_eq!(location.file_name, "Shapes.cs");
    insta::assert_snapshot!(OutputKey::derive("IShape", &location).to_string(), @"IShape_Geometry.Outer`1.Shape_Shapes.cs.g.cs");

    let generic_location = TypeLocation::of(&tree, generic).unwrap();
    assert_eq!(generic_location.arity, 1);
    insta::assert_snapshot!(OutputKey::derive("IShape", &generic_location).to_string(), @"IShape_Geometry.Outer`1.Shape`1_Shapes.cs.g.cs");

    assert!(TypeLocation::of(&tree, ns).is_none());

    let keys: HashSet<String> = generate(&tree).into_iter().map(|s| s.key.into()).collect();
    assert_eq!(keys.len(), 2);
}

#[autoiface_testhelpers::test]
fn test_key_without_namespace() {
    let location = TypeLocation {
        namespace: Vec::new(),
        containing_types: Vec::new(),
        name: "Test".into(),
        arity: 0,
        file_name: "Test.cs".into(),
    };
    let key = OutputKey::derive("ITest", &location);
    assert_eq!(key.as_str(), "ITest_Test_Test.cs.g.cs");
    assert!(key.as_str().ends_with(OutputKey::EXTENSION));
}

#[autoiface_testhelpers::test]
fn test_pool_hands_out_each_buffer_once() {
    let pool = BufferPool::new(4);
    std::thread::scope(|scope| {
        for worker in 0..8 {
            let pool = &pool;
            scope.spawn(move || {
                for round in 0..200 {
                    let mut buffer = pool.acquire();
                    assert!(buffer.is_empty());
                    let line = format!("worker {worker} round {round}");
                    buffer.push_str(&line);
                    std::thread::yield_now();
                    assert_eq!(buffer.as_str(), line);
                }
            });
        }
    });
    assert!(pool.idle_count() <= 4);
    assert!(pool.idle_count() >= 1);
}
