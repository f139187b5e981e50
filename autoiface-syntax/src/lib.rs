#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod attribute;
mod decl;
mod member;
pub mod query;
mod tree;
mod trivia;
mod types;

pub use attribute::{Attribute, AttributeArgument, AttributeList, Expression, Literal};
pub use decl::{CompilationUnit, NamespaceDecl, TypeDecl, TypeKind, UsingDirective};
pub use member::{
    Accessor, AccessorKind, ConstraintClause, EventDecl, EventFieldDecl, FieldDecl, IndexerDecl,
    MemberDecl, MemberHeader, MethodDecl, OtherMember, Parameter, ParameterList, PropertyDecl,
    TypeParameter, Variance,
};
pub use tree::{SyntaxNode, SyntaxTree};
pub use trivia::DocComment;
pub use types::{NameSegment, QualifiedName, TupleElement, TypeParseError, TypeSyntax};

pub use indextree::NodeId;
