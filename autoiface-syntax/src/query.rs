//! Predicates and extractors over the declaration tree.
//!
//! Everything here is total: absent or mistyped data gives `None` or an
//! empty collection, never a panic.

use indextree::NodeId;

use crate::attribute::{Attribute, AttributeList, Expression, Literal};
use crate::decl::{NamespaceDecl, TypeDecl};
use crate::tree::{SyntaxNode, SyntaxTree};
use crate::types::TypeSyntax;

const ATTRIBUTE_SUFFIX: &str = "Attribute";

/// Does `identifier` name the attribute `base_name`?
///
/// Two candidates are accepted: `base_name` itself and
/// `base_name + "Attribute"`. The comparison is case-sensitive and the
/// lengths must match exactly, so `AutoInterfaceVisibilityProtected` does not
/// match `AutoInterfaceVisibilityProtectedInternal`.
pub fn matches_attribute_name(identifier: &str, base_name: &str) -> bool {
    if identifier.len() == base_name.len() {
        return identifier == base_name;
    }
    identifier.len() == base_name.len() + ATTRIBUTE_SUFFIX.len()
        && identifier.starts_with(base_name)
        && identifier.ends_with(ATTRIBUTE_SUFFIX)
}

/// Every attribute named `base_name`, across all lists, in source order.
pub fn attributes_named<'a>(
    lists: &'a [AttributeList],
    base_name: &str,
) -> impl Iterator<Item = &'a Attribute> {
    lists
        .iter()
        .flat_map(|list| list.attributes.iter())
        .filter(move |attribute| matches_attribute_name(attribute.identifier(), base_name))
}

/// The first attribute named `base_name`.
pub fn find_attribute<'a>(lists: &'a [AttributeList], base_name: &str) -> Option<&'a Attribute> {
    lists
        .iter()
        .flat_map(|list| list.attributes.iter())
        .find(|attribute| matches_attribute_name(attribute.identifier(), base_name))
}

/// Exact token membership.
pub fn has_modifier(modifiers: &[String], token: &str) -> bool {
    modifiers.iter().any(|modifier| modifier == token)
}

/// The value of the first `name = value` argument.
pub fn named_argument<'a>(attribute: &'a Attribute, name: &str) -> Option<&'a Expression> {
    attribute
        .arguments
        .as_deref()?
        .iter()
        .find(|argument| argument.name.as_deref() == Some(name))
        .map(|argument| &argument.expression)
}

/// A named string-literal argument.
pub fn named_string<'a>(attribute: &'a Attribute, name: &str) -> Option<&'a str> {
    match named_argument(attribute, name)? {
        Expression::Literal(Literal::String(value)) => Some(value),
        _ => None,
    }
}

/// A named boolean-literal argument.
pub fn named_bool(attribute: &Attribute, name: &str) -> Option<bool> {
    match named_argument(attribute, name)? {
        Expression::Literal(Literal::Bool(value)) => Some(*value),
        _ => None,
    }
}

/// The string literals of a named array argument, in order.
///
/// Non-string elements are dropped.
pub fn named_string_array(attribute: &Attribute, name: &str) -> Vec<String> {
    array_elements(attribute, name)
        .iter()
        .filter_map(|element| match element {
            Expression::Literal(Literal::String(value)) => Some(value.clone()),
            _ => None,
        })
        .collect()
}

/// The `X` of every `typeof(X)` element of a named array argument, in order.
///
/// Other elements are dropped.
pub fn named_type_array(attribute: &Attribute, name: &str) -> Vec<TypeSyntax> {
    array_elements(attribute, name)
        .iter()
        .filter_map(|element| match element {
            Expression::TypeOf(ty) => Some(ty.clone()),
            _ => None,
        })
        .collect()
}

fn array_elements<'a>(attribute: &'a Attribute, name: &str) -> &'a [Expression] {
    named_argument(attribute, name)
        .and_then(Expression::array_elements)
        .unwrap_or_default()
}

/// A node category that [`find_ancestor`] can search for.
pub trait NodeCategory {
    /// Borrow the payload if `node` is of this category.
    fn from_node(node: &SyntaxNode) -> Option<&Self>;
}

impl NodeCategory for TypeDecl {
    fn from_node(node: &SyntaxNode) -> Option<&Self> {
        match node {
            SyntaxNode::Type(decl) => Some(decl),
            _ => None,
        }
    }
}

impl NodeCategory for NamespaceDecl {
    fn from_node(node: &SyntaxNode) -> Option<&Self> {
        match node {
            SyntaxNode::Namespace(ns) => Some(ns),
            _ => None,
        }
    }
}

/// Walk parent links from `node` (excluding it) to the nearest ancestor of
/// category `T`.
pub fn find_ancestor<T: NodeCategory>(tree: &SyntaxTree, node: NodeId) -> Option<(NodeId, &T)> {
    tree.ancestors(node)
        .find_map(|ancestor| Some((ancestor, T::from_node(tree.node(ancestor)?)?)))
}
