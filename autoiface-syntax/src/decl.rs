//! Type, namespace and using declarations.

use core::fmt;

use crate::attribute::{Attribute, AttributeList};
use crate::member::{ConstraintClause, MemberDecl, Parameter, TypeParameter};
use crate::trivia::DocComment;
use crate::types::TypeSyntax;

/// What kind of type a [`TypeDecl`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// `class`
    Class,
    /// `struct`
    Struct,
    /// `record` / `record class`
    RecordClass,
    /// `record struct`
    RecordStruct,
    /// `interface`
    Interface,
}

impl TypeKind {
    /// The declaration keyword(s).
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::RecordClass => "record",
            TypeKind::RecordStruct => "record struct",
            TypeKind::Interface => "interface",
        }
    }

    /// Returns `true` for both record kinds.
    pub fn is_record(self) -> bool {
        matches!(self, TypeKind::RecordClass | TypeKind::RecordStruct)
    }
}

/// A class, struct, record or interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Documentation comment above the declaration.
    pub docs: Option<DocComment>,
    /// Attribute lists in source order.
    pub attribute_lists: Vec<AttributeList>,
    /// Modifier tokens (`public`, `partial`, `readonly`...).
    pub modifiers: Vec<String>,
    /// Declaration kind.
    pub kind: TypeKind,
    /// Type name.
    pub identifier: String,
    /// Generic parameters.
    pub type_parameters: Vec<TypeParameter>,
    /// Primary-constructor parameter list, `None` when there are no
    /// parentheses at all.
    pub parameter_list: Option<Vec<Parameter>>,
    /// Base class and interfaces.
    pub base_list: Vec<TypeSyntax>,
    /// Constraint clauses.
    pub constraints: Vec<ConstraintClause>,
    /// Members in declaration order. Nested types are tree children, not
    /// members.
    pub members: Vec<MemberDecl>,
}

impl TypeDecl {
    /// An empty declaration of the given kind.
    pub fn new(kind: TypeKind, identifier: impl Into<String>) -> Self {
        Self {
            docs: None,
            attribute_lists: Vec::new(),
            modifiers: Vec::new(),
            kind,
            identifier: identifier.into(),
            type_parameters: Vec::new(),
            parameter_list: None,
            base_list: Vec::new(),
            constraints: Vec::new(),
            members: Vec::new(),
        }
    }

    /// `class identifier`
    pub fn class(identifier: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, identifier)
    }

    /// `record identifier`
    pub fn record(identifier: impl Into<String>) -> Self {
        Self::new(TypeKind::RecordClass, identifier)
    }

    /// `record struct identifier`
    pub fn record_struct(identifier: impl Into<String>) -> Self {
        Self::new(TypeKind::RecordStruct, identifier)
    }

    /// `interface identifier`
    pub fn interface(identifier: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, identifier)
    }

    /// Set the documentation comment.
    pub fn with_docs(mut self, docs: DocComment) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Add an attribute list.
    pub fn with_attribute_list(mut self, list: AttributeList) -> Self {
        self.attribute_lists.push(list);
        self
    }

    /// Add an attribute list holding only `attribute`.
    pub fn with_attribute(self, attribute: Attribute) -> Self {
        self.with_attribute_list(AttributeList::single(attribute))
    }

    /// Add a modifier token.
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// Add a generic parameter.
    pub fn with_type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    /// Set the primary-constructor parameter list.
    pub fn with_parameter_list(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameter_list = Some(parameters.into_iter().collect());
        self
    }

    /// Add an entry to the base list.
    pub fn with_base(mut self, base: impl Into<TypeSyntax>) -> Self {
        self.base_list.push(base.into());
        self
    }

    /// Add a constraint clause.
    pub fn with_constraint(mut self, clause: ConstraintClause) -> Self {
        self.constraints.push(clause);
        self
    }

    /// Add a member.
    pub fn with_member(mut self, member: impl Into<MemberDecl>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Number of generic parameters.
    pub fn arity(&self) -> usize {
        self.type_parameters.len()
    }
}

/// A `namespace` declaration, block or file-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    /// Dotted name, e.g. `MyCode.Inner`.
    pub name: String,
    /// Using directives inside the namespace.
    pub usings: Vec<UsingDirective>,
    /// `namespace X;` rather than `namespace X { }`.
    pub file_scoped: bool,
}

impl NamespaceDecl {
    /// `namespace name { }`
    pub fn block(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usings: Vec::new(),
            file_scoped: false,
        }
    }

    /// `namespace name;`
    pub fn file_scoped(name: impl Into<String>) -> Self {
        Self {
            file_scoped: true,
            ..Self::block(name)
        }
    }

    /// Add a using directive.
    pub fn with_using(mut self, using: UsingDirective) -> Self {
        self.usings.push(using);
        self
    }

    /// The dotted name split into segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('.').map(str::trim).filter(|s| !s.is_empty())
    }
}

/// The root of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    /// File-level using directives.
    pub usings: Vec<UsingDirective>,
}

/// A `using` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDirective {
    /// `global using`
    pub global: bool,
    /// `using static`
    pub is_static: bool,
    /// `X` in `using X = A.B;`
    pub alias: Option<String>,
    /// The imported namespace or type, as written.
    pub name: String,
}

impl UsingDirective {
    /// `using name;`
    pub fn namespace(name: impl Into<String>) -> Self {
        Self {
            global: false,
            is_static: false,
            alias: None,
            name: name.into(),
        }
    }

    /// `using alias = name;`
    pub fn alias(alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Self::namespace(name)
        }
    }

    /// `using static name;`
    pub fn static_import(name: impl Into<String>) -> Self {
        Self {
            is_static: true,
            ..Self::namespace(name)
        }
    }

    /// Make this a `global using`.
    pub fn global(mut self) -> Self {
        self.global = true;
        self
    }
}

impl fmt::Display for UsingDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("global ")?;
        }
        f.write_str("using ")?;
        if self.is_static {
            f.write_str("static ")?;
        }
        if let Some(alias) = &self.alias {
            write!(f, "{alias} = ")?;
        }
        write!(f, "{};", self.name)
    }
}
