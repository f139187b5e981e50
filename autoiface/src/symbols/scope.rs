use autoiface_syntax::{NodeId, SyntaxTree, TypeParameter, UsingDirective};

use super::{TypeParameterOwner, TypeSymbol};

/// Where a piece of type syntax was written.
///
/// Name lookup walks the enclosing types, then the enclosing namespaces from
/// the innermost outward, then the using directives.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    /// Namespace segments, outermost first.
    pub namespace: Vec<String>,
    /// Enclosing type names, outermost first, ending with the type whose
    /// body the syntax appears in.
    pub enclosing_types: Vec<String>,
    /// Visible using directives, innermost scope first.
    pub usings: Vec<UsingDirective>,
    /// Generic parameters of the enclosing type.
    pub type_parameters: Vec<String>,
    /// Generic parameters of the enclosing method.
    pub method_type_parameters: Vec<String>,
}

impl Scope {
    /// The scope of the body of the type declared at `node`.
    pub fn for_type(tree: &SyntaxTree, node: NodeId) -> Self {
        let mut enclosing_types: Vec<String> = tree
            .containing_types(node)
            .iter()
            .map(|decl| decl.identifier.clone())
            .collect();
        let mut type_parameters = Vec::new();
        if let Some(decl) = tree.type_decl(node) {
            enclosing_types.push(decl.identifier.clone());
            type_parameters = decl.type_parameters.iter().map(|p| p.name.clone()).collect();
        }

        Self {
            namespace: tree.namespace_of(node),
            enclosing_types,
            usings: tree
                .using_scopes(node)
                .into_iter()
                .flatten()
                .cloned()
                .collect(),
            type_parameters,
            method_type_parameters: Vec::new(),
        }
    }

    /// This scope extended with a method's generic parameters.
    pub fn with_method_type_parameters(&self, parameters: &[TypeParameter]) -> Self {
        Self {
            method_type_parameters: parameters.iter().map(|p| p.name.clone()).collect(),
            ..self.clone()
        }
    }

    /// Resolve `name` as a generic parameter. Method parameters shadow type
    /// parameters.
    pub fn type_parameter(&self, name: &str) -> Option<TypeSymbol> {
        let lookup = |owner, params: &[String]| {
            params
                .iter()
                .position(|p| p == name)
                .map(|ordinal| TypeSymbol::TypeParameter {
                    owner,
                    ordinal,
                    name: name.to_owned(),
                })
        };
        lookup(TypeParameterOwner::Method, &self.method_type_parameters)
            .or_else(|| lookup(TypeParameterOwner::Type, &self.type_parameters))
    }
}
