use std::collections::{HashMap, HashSet};

use autoiface_syntax::query::has_modifier;
use autoiface_syntax::{QualifiedName, SyntaxTree, TypeDecl, TypeKind, TypeSyntax};

use super::{
    InterfaceSymbol, KEYWORD_TYPES, Scope, SymbolResolver, TypeSymbol, lookup_key,
};
use crate::member::{Candidate, ProjectMember};

/// An in-memory [`SymbolResolver`] built from syntax trees.
///
/// Every type declared in an added tree becomes a known name; interfaces
/// also contribute their members so inherited members can be found. Types
/// that only exist as metadata (referenced assemblies) can be registered by
/// name with [`add_type`](Self::add_type).
#[derive(Debug, Clone)]
pub struct SymbolTable {
    types: HashSet<String>,
    interfaces: HashMap<String, InterfaceEntry>,
}

#[derive(Debug, Clone)]
struct InterfaceEntry {
    decl: TypeDecl,
    scope: Scope,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// A table that only knows the `System` types behind the keyword aliases.
    pub fn new() -> Self {
        let types = KEYWORD_TYPES
            .iter()
            .map(|(_, name)| format!("System.{name}"))
            .collect();
        Self {
            types,
            interfaces: HashMap::new(),
        }
    }

    /// A table holding the declarations of one tree.
    pub fn from_tree(tree: &SyntaxTree) -> Self {
        Self::from_trees([tree])
    }

    /// A table holding the declarations of every tree.
    pub fn from_trees<'a>(trees: impl IntoIterator<Item = &'a SyntaxTree>) -> Self {
        let mut table = Self::new();
        for tree in trees {
            table.add_tree(tree);
        }
        table
    }

    /// Register every type declared in `tree`.
    pub fn add_tree(&mut self, tree: &SyntaxTree) {
        for (id, decl) in tree.type_declarations() {
            let mut path = tree.namespace_of(id);
            path.extend(
                tree.containing_types(id)
                    .iter()
                    .map(|container| container.identifier.clone()),
            );
            path.push(decl.identifier.clone());

            let key = lookup_key(&path[..], decl.arity());
            if decl.kind == TypeKind::Interface {
                self.interfaces.insert(
                    key.clone(),
                    InterfaceEntry {
                        decl: decl.clone(),
                        scope: Scope::for_type(tree, id),
                    },
                );
            }
            self.types.insert(key);
        }
    }

    /// Register a type known only by name, e.g. `System.IDisposable`.
    pub fn add_type(&mut self, qualified: &str, arity: usize) {
        let path: Vec<&str> = qualified.split('.').collect();
        self.types.insert(lookup_key(&path[..], arity));
    }

    /// Is the type known?
    pub fn contains(&self, qualified: &str, arity: usize) -> bool {
        let path: Vec<&str> = qualified.split('.').collect();
        self.types.contains(&lookup_key(&path[..], arity))
    }

    fn resolve_name(&self, name: &QualifiedName, scope: &Scope) -> TypeSymbol {
        let identifiers: Vec<String> = name
            .segments
            .iter()
            .map(|segment| segment.identifier.clone())
            .collect();
        let arguments: Vec<TypeSymbol> = name
            .segments
            .iter()
            .flat_map(|segment| &segment.type_arguments)
            .map(|argument| self.resolve_type(argument, scope))
            .collect();

        if name.alias.is_none()
            && arguments.is_empty()
            && let [single] = identifiers.as_slice()
        {
            if let Some(parameter) = scope.type_parameter(single) {
                return parameter;
            }
            if let Some(keyword) = TypeSymbol::keyword(single) {
                return keyword;
            }
        }

        let arity = name.last().map_or(0, |segment| segment.type_arguments.len());
        let candidates = candidate_paths(name.alias.as_deref(), &identifiers, scope);
        let path = candidates
            .iter()
            .find(|path| self.types.contains(&lookup_key(path.as_slice(), arity)))
            .or(candidates.first().filter(|_| name.alias.is_some()))
            .cloned()
            .unwrap_or(identifiers);
        TypeSymbol::Named { path, arguments }
    }
}

/// Every fully qualified path `identifiers` may denote from `scope`, in
/// lookup order.
fn candidate_paths(alias: Option<&str>, identifiers: &[String], scope: &Scope) -> Vec<Vec<String>> {
    let join = |prefix: &[String], rest: &[String]| -> Vec<String> {
        prefix.iter().chain(rest).cloned().collect()
    };

    match alias {
        Some("global") => return vec![identifiers.to_vec()],
        Some(alias) => {
            return using_alias(scope, alias)
                .map(|target| join(&target, identifiers))
                .into_iter()
                .collect();
        }
        None => {}
    }

    let mut candidates = Vec::new();
    if let Some((first, rest)) = identifiers.split_first()
        && let Some(target) = using_alias(scope, first)
    {
        candidates.push(join(&target, rest));
    }

    for depth in (1..=scope.enclosing_types.len()).rev() {
        let prefix = join(&scope.namespace, &scope.enclosing_types[..depth]);
        candidates.push(join(&prefix, identifiers));
    }
    for depth in (0..=scope.namespace.len()).rev() {
        candidates.push(join(&scope.namespace[..depth], identifiers));
    }
    for using in scope
        .usings
        .iter()
        .filter(|using| using.alias.is_none() && !using.is_static)
    {
        candidates.push(join(&split_qualified(&using.name), identifiers));
    }
    candidates
}

fn using_alias(scope: &Scope, alias: &str) -> Option<Vec<String>> {
    scope
        .usings
        .iter()
        .find(|using| using.alias.as_deref() == Some(alias))
        .map(|using| split_qualified(&using.name))
}

fn split_qualified(name: &str) -> Vec<String> {
    name.trim()
        .trim_start_matches("global::")
        .split('.')
        .map(|segment| segment.trim().to_owned())
        .filter(|segment| !segment.is_empty())
        .collect()
}

impl SymbolResolver for SymbolTable {
    fn resolve_type(&self, ty: &TypeSyntax, scope: &Scope) -> TypeSymbol {
        match ty {
            TypeSyntax::Name(name) => self.resolve_name(name, scope),
            TypeSyntax::Array { element, rank } => TypeSymbol::Array {
                element: Box::new(self.resolve_type(element, scope)),
                rank: *rank,
            },
            TypeSyntax::Nullable(inner) => {
                TypeSymbol::Nullable(Box::new(self.resolve_type(inner, scope)))
            }
            TypeSyntax::Pointer(inner) => {
                TypeSymbol::Pointer(Box::new(self.resolve_type(inner, scope)))
            }
            TypeSyntax::Tuple(elements) => TypeSymbol::Tuple(
                elements
                    .iter()
                    .map(|element| self.resolve_type(&element.ty, scope))
                    .collect(),
            ),
            TypeSyntax::Verbatim(text) => TypeSymbol::Unresolved(text.clone()),
        }
    }

    fn interface(&self, symbol: &TypeSymbol) -> Option<InterfaceSymbol> {
        let TypeSymbol::Named { arguments, .. } = symbol else {
            return None;
        };
        let entry = self.interfaces.get(&symbol.lookup_key()?)?;

        let members = entry
            .decl
            .members
            .iter()
            .filter_map(Candidate::from_member)
            .filter(|candidate| !has_modifier(&candidate.header().modifiers, "private"))
            .flat_map(|candidate| candidate.signatures(&entry.scope, self))
            .map(|member| member.substitute(arguments))
            .collect();
        let bases = entry
            .decl
            .base_list
            .iter()
            .map(|base| self.resolve_type(base, &entry.scope).substitute(arguments))
            .collect();

        Some(InterfaceSymbol {
            symbol: symbol.clone(),
            members,
            bases,
        })
    }
}
