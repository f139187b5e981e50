//! The declaration tree: an arena of nodes with parent links.

use indextree::{Arena, NodeId};

use crate::decl::{CompilationUnit, NamespaceDecl, TypeDecl, UsingDirective};

/// A node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// The root of the file.
    CompilationUnit(CompilationUnit),
    /// A namespace.
    Namespace(NamespaceDecl),
    /// A type declaration.
    Type(TypeDecl),
}

/// One source file worth of declarations.
///
/// Types nested in other types are children of their containing type's
/// node; types in a namespace are children of the namespace node.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    arena: Arena<SyntaxNode>,
    root: NodeId,
    path: String,
}

impl SyntaxTree {
    /// An empty file at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(SyntaxNode::CompilationUnit(CompilationUnit::default()));
        Self {
            arena,
            root,
            path: path.into(),
        }
    }

    /// The compilation-unit node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The file path as given by the host.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The last component of [`path`](Self::path).
    pub fn file_name(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path)
    }

    /// Add a file-level using directive.
    pub fn add_using(&mut self, using: UsingDirective) {
        if let Some(SyntaxNode::CompilationUnit(unit)) = self.node_mut(self.root) {
            unit.usings.push(using);
        }
    }

    /// Add a namespace under `parent`.
    pub fn add_namespace(&mut self, parent: NodeId, namespace: NamespaceDecl) -> NodeId {
        self.add_child(parent, SyntaxNode::Namespace(namespace))
    }

    /// Add a type declaration under `parent`.
    pub fn add_type(&mut self, parent: NodeId, decl: TypeDecl) -> NodeId {
        self.add_child(parent, SyntaxNode::Type(decl))
    }

    fn add_child(&mut self, parent: NodeId, node: SyntaxNode) -> NodeId {
        let id = self.arena.new_node(node);
        parent.append(id, &mut self.arena);
        id
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.arena.get(id).map(|node| node.get())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SyntaxNode> {
        self.arena.get_mut(id).map(|node| node.get_mut())
    }

    /// Look up a node that must be a type declaration.
    pub fn type_decl(&self, id: NodeId) -> Option<&TypeDecl> {
        match self.node(id)? {
            SyntaxNode::Type(decl) => Some(decl),
            _ => None,
        }
    }

    /// Parent of `id`, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.parent()
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.ancestors(&self.arena).skip(1)
    }

    /// Every type declaration in document order.
    pub fn type_declarations(&self) -> impl Iterator<Item = (NodeId, &TypeDecl)> + '_ {
        self.root.descendants(&self.arena).filter_map(|id| {
            match self.arena.get(id).map(|node| node.get()) {
                Some(SyntaxNode::Type(decl)) => Some((id, decl)),
                _ => None,
            }
        })
    }

    /// Namespace segments enclosing `id`, outermost first.
    pub fn namespace_of(&self, id: NodeId) -> Vec<String> {
        let mut namespaces: Vec<&NamespaceDecl> = self
            .ancestors(id)
            .filter_map(|ancestor| match self.node(ancestor) {
                Some(SyntaxNode::Namespace(ns)) => Some(ns),
                _ => None,
            })
            .collect();
        namespaces.reverse();
        namespaces
            .into_iter()
            .flat_map(|ns| ns.segments().map(str::to_owned))
            .collect()
    }

    /// Type declarations enclosing `id`, outermost first.
    pub fn containing_types(&self, id: NodeId) -> Vec<&TypeDecl> {
        let mut containers: Vec<&TypeDecl> = self
            .ancestors(id)
            .filter_map(|ancestor| self.type_decl(ancestor))
            .collect();
        containers.reverse();
        containers
    }

    /// Using directives visible from `id`, one slice per scope: innermost
    /// namespace first, then outer namespaces, then the file.
    pub fn using_scopes(&self, id: NodeId) -> Vec<&[UsingDirective]> {
        self.ancestors(id)
            .filter_map(|ancestor| match self.node(ancestor) {
                Some(SyntaxNode::Namespace(ns)) => Some(ns.usings.as_slice()),
                Some(SyntaxNode::CompilationUnit(unit)) => Some(unit.usings.as_slice()),
                _ => None,
            })
            .collect()
    }
}
