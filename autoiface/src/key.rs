//! Registration keys for synthesized sources.

use core::fmt;

use autoiface_syntax::{NodeId, SyntaxTree};

/// Where a marked type lives: everything that makes its output key unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLocation {
    /// Namespace segments, outermost first.
    pub namespace: Vec<String>,
    /// Containing types with their generic arity, outermost first.
    pub containing_types: Vec<(String, usize)>,
    /// The type's own name.
    pub name: String,
    /// The type's generic arity.
    pub arity: usize,
    /// Name of the file the type is declared in.
    pub file_name: String,
}

impl TypeLocation {
    /// Locate the type declared at `node`; `None` if it is not a type.
    pub fn of(tree: &SyntaxTree, node: NodeId) -> Option<Self> {
        let decl = tree.type_decl(node)?;
        Some(Self {
            namespace: tree.namespace_of(node),
            containing_types: tree
                .containing_types(node)
                .iter()
                .map(|container| (container.identifier.clone(), container.arity()))
                .collect(),
            name: decl.identifier.clone(),
            arity: decl.arity(),
            file_name: tree.file_name().to_owned(),
        })
    }
}

/// The identifier a synthesized source is registered under.
///
/// `{target}_{namespace.}{containers.}{Type}{`N}_{file}.g.cs`. Two marked
/// types only share a key when they share target name, namespace,
/// containers, name, arity and file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutputKey(String);

impl OutputKey {
    /// Suffix of every key.
    pub const EXTENSION: &str = ".g.cs";

    /// Derive the key for `target_name` synthesized from the type at
    /// `location`.
    pub fn derive(target_name: &str, location: &TypeLocation) -> Self {
        let mut key = String::with_capacity(64);
        key.push_str(target_name);
        key.push('_');
        for segment in &location.namespace {
            key.push_str(segment);
            key.push('.');
        }
        for (container, arity) in &location.containing_types {
            push_name(&mut key, container, *arity);
            key.push('.');
        }
        push_name(&mut key, &location.name, location.arity);
        key.push('_');
        key.push_str(&location.file_name);
        key.push_str(Self::EXTENSION);
        Self(key)
    }

    /// The key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn push_name(key: &mut String, name: &str, arity: usize) {
    key.push_str(name);
    if arity > 0 {
        key.push('`');
        key.push_str(&arity.to_string());
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OutputKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<OutputKey> for String {
    fn from(key: OutputKey) -> Self {
        key.0
    }
}
