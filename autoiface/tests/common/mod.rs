#![allow(dead_code)]

use autoiface::symbols::SymbolTable;
use autoiface::{GeneratedSource, synthesize};
use autoiface_syntax::{
    Attribute, AttributeList, NamespaceDecl, SyntaxTree, TypeDecl, UsingDirective,
};

/// Everything above the namespace line of a file generated from [`source`].
pub const HEAD: &str = "// <auto-generated/>\n#pragma warning disable\n#nullable enable annotations\n\n\nusing AutoInterfaceAttributes;\n\n";

/// `[AutoInterface]`
pub fn marker() -> Attribute {
    Attribute::new("AutoInterface")
}

/// `[AutoInterface]` as an attribute list.
pub fn marker_list() -> AttributeList {
    AttributeList::single(marker())
}

/// `Test.cs`: `using AutoInterfaceAttributes;` and the given types in the
/// file-scoped namespace `MyCode`.
pub fn source(types: impl IntoIterator<Item = TypeDecl>) -> SyntaxTree {
    source_named("Test.cs", types)
}

/// Like [`source`], with another file name.
pub fn source_named(path: &str, types: impl IntoIterator<Item = TypeDecl>) -> SyntaxTree {
    let mut tree = SyntaxTree::new(path);
    tree.add_using(UsingDirective::namespace("AutoInterfaceAttributes"));
    let root = tree.root();
    let ns = tree.add_namespace(root, NamespaceDecl::file_scoped("MyCode"));
    for decl in types {
        tree.add_type(ns, decl);
    }
    tree
}

/// Every source generated from `tree`, resolving against `tree` alone.
pub fn generate(tree: &SyntaxTree) -> Vec<GeneratedSource> {
    let table = SymbolTable::from_tree(tree);
    synthesize(tree, &table)
}

/// The single text generated from `types`.
pub fn generate_text(types: impl IntoIterator<Item = TypeDecl>) -> String {
    let sources = generate(&source(types));
    assert_eq!(sources.len(), 1, "expected exactly one generated source");
    sources.into_iter().next().unwrap().text
}

/// A full generated file for `body` in namespace `MyCode`.
pub fn expected(body: &str) -> String {
    format!("{HEAD}namespace MyCode;\n\n{body}")
}
