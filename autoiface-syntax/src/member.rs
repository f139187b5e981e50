//! Member declarations of a type.

use core::fmt;

use crate::attribute::{Attribute, AttributeList};
use crate::trivia::DocComment;
use crate::types::TypeSyntax;

/// Leading parts shared by every member: docs, attribute lists, modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberHeader {
    /// Documentation comment above the member.
    pub docs: Option<DocComment>,
    /// Attribute lists in source order.
    pub attribute_lists: Vec<AttributeList>,
    /// Modifier tokens in source order (`public`, `static`, `async`, ...).
    pub modifiers: Vec<String>,
}

/// Accessor keyword inside a property, indexer or event body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// `get`
    Get,
    /// `set`
    Set,
    /// `init`
    Init,
    /// `add`
    Add,
    /// `remove`
    Remove,
}

impl AccessorKind {
    /// The keyword as written in source.
    pub fn keyword(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Init => "init",
            AccessorKind::Add => "add",
            AccessorKind::Remove => "remove",
        }
    }
}

/// One accessor, e.g. `private set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Which accessor.
    pub kind: AccessorKind,
    /// Accessor-level modifiers; empty means "as visible as the member".
    pub modifiers: Vec<String>,
}

impl Accessor {
    /// An accessor without modifiers.
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            kind,
            modifiers: Vec::new(),
        }
    }

    /// Add an accessor-level modifier.
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }
}

/// A method, indexer, delegate or primary-constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Attribute lists on the parameter.
    pub attribute_lists: Vec<AttributeList>,
    /// `ref`, `out`, `in`, `params`, `this`, `scoped`...
    pub modifiers: Vec<String>,
    /// Parameter type.
    pub ty: TypeSyntax,
    /// Parameter name.
    pub name: String,
    /// Default value as written.
    pub default: Option<String>,
}

impl Parameter {
    /// A plain parameter.
    pub fn new(ty: impl Into<TypeSyntax>, name: impl Into<String>) -> Self {
        Self {
            attribute_lists: Vec::new(),
            modifiers: Vec::new(),
            ty: ty.into(),
            name: name.into(),
            default: None,
        }
    }

    /// Add a modifier.
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Add an attribute list.
    pub fn with_attribute_list(mut self, list: AttributeList) -> Self {
        self.attribute_lists.push(list);
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for list in &self.attribute_lists {
            write!(f, "{list} ")?;
        }
        for modifier in &self.modifiers {
            write!(f, "{modifier} ")?;
        }
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

/// Formats parameters separated by `, ` without surrounding brackets.
pub struct ParameterList<'a>(pub &'a [Parameter]);

impl fmt::Display for ParameterList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, parameter) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        Ok(())
    }
}

/// Variance annotation of a generic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variance {
    /// `in T`
    In,
    /// `out T`
    Out,
}

/// A generic type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    /// Variance, for interface and delegate parameters.
    pub variance: Option<Variance>,
    /// Parameter name.
    pub name: String,
}

impl TypeParameter {
    /// An invariant type parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            variance: None,
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variance {
            Some(Variance::In) => f.write_str("in ")?,
            Some(Variance::Out) => f.write_str("out ")?,
            None => {}
        }
        f.write_str(&self.name)
    }
}

/// `where T : class, new()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintClause {
    /// The constrained parameter.
    pub parameter: String,
    /// Constraints as written.
    pub constraints: Vec<String>,
}

impl ConstraintClause {
    /// A clause for `parameter`.
    pub fn new<I, S>(parameter: impl Into<String>, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameter: parameter.into(),
            constraints: constraints.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ConstraintClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "where {} : {}", self.parameter, self.constraints.join(", "))
    }
}

/// A method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Docs, attributes, modifiers.
    pub header: MemberHeader,
    /// Return type.
    pub return_type: TypeSyntax,
    /// `IFoo` in `void IFoo.Bar()`.
    pub explicit_interface: Option<TypeSyntax>,
    /// Method name.
    pub identifier: String,
    /// Generic parameters.
    pub type_parameters: Vec<TypeParameter>,
    /// Parameters.
    pub parameters: Vec<Parameter>,
    /// Constraint clauses.
    pub constraints: Vec<ConstraintClause>,
}

impl MethodDecl {
    /// A parameterless, non-generic method.
    pub fn new(return_type: impl Into<TypeSyntax>, identifier: impl Into<String>) -> Self {
        Self {
            header: MemberHeader::default(),
            return_type: return_type.into(),
            explicit_interface: None,
            identifier: identifier.into(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a generic parameter.
    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(TypeParameter::new(name));
        self
    }

    /// Add a constraint clause.
    pub fn with_constraint(mut self, clause: ConstraintClause) -> Self {
        self.constraints.push(clause);
        self
    }
}

/// A property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    /// Docs, attributes, modifiers.
    pub header: MemberHeader,
    /// Property type.
    pub ty: TypeSyntax,
    /// `IFoo` in `int IFoo.Bar { get; }`.
    pub explicit_interface: Option<TypeSyntax>,
    /// Property name.
    pub identifier: String,
    /// `None` for an expression body (`=> value`).
    pub accessors: Option<Vec<Accessor>>,
}

impl PropertyDecl {
    /// A property with an expression body.
    pub fn new(ty: impl Into<TypeSyntax>, identifier: impl Into<String>) -> Self {
        Self {
            header: MemberHeader::default(),
            ty: ty.into(),
            explicit_interface: None,
            identifier: identifier.into(),
            accessors: None,
        }
    }

    /// Add an accessor, switching to an accessor list.
    pub fn with_accessor(mut self, accessor: Accessor) -> Self {
        self.accessors.get_or_insert_with(Vec::new).push(accessor);
        self
    }

    /// Shorthand for `{ get; set; }`.
    pub fn get_set(self) -> Self {
        self.with_accessor(Accessor::new(AccessorKind::Get))
            .with_accessor(Accessor::new(AccessorKind::Set))
    }
}

/// An indexer, `this[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerDecl {
    /// Docs, attributes, modifiers.
    pub header: MemberHeader,
    /// Element type.
    pub ty: TypeSyntax,
    /// Qualifier for explicit implementations.
    pub explicit_interface: Option<TypeSyntax>,
    /// Index parameters.
    pub parameters: Vec<Parameter>,
    /// `None` for an expression body.
    pub accessors: Option<Vec<Accessor>>,
}

impl IndexerDecl {
    /// An indexer with an expression body.
    pub fn new(ty: impl Into<TypeSyntax>) -> Self {
        Self {
            header: MemberHeader::default(),
            ty: ty.into(),
            explicit_interface: None,
            parameters: Vec::new(),
            accessors: None,
        }
    }

    /// Add an index parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add an accessor, switching to an accessor list.
    pub fn with_accessor(mut self, accessor: Accessor) -> Self {
        self.accessors.get_or_insert_with(Vec::new).push(accessor);
        self
    }
}

/// A field-style event: `event Action a, b;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFieldDecl {
    /// Docs, attributes, modifiers.
    pub header: MemberHeader,
    /// Delegate type.
    pub ty: TypeSyntax,
    /// Declarator names.
    pub variables: Vec<String>,
}

impl EventFieldDecl {
    /// A field-style event with the given declarators.
    pub fn new<I, S>(ty: impl Into<TypeSyntax>, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: MemberHeader::default(),
            ty: ty.into(),
            variables: variables.into_iter().map(Into::into).collect(),
        }
    }
}

/// An event with an `add`/`remove` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDecl {
    /// Docs, attributes, modifiers.
    pub header: MemberHeader,
    /// Delegate type.
    pub ty: TypeSyntax,
    /// Qualifier for explicit implementations.
    pub explicit_interface: Option<TypeSyntax>,
    /// Event name.
    pub identifier: String,
    /// The accessors, normally `add` and `remove`.
    pub accessors: Vec<Accessor>,
}

impl EventDecl {
    /// An event with `add` and `remove` accessors.
    pub fn new(ty: impl Into<TypeSyntax>, identifier: impl Into<String>) -> Self {
        Self {
            header: MemberHeader::default(),
            ty: ty.into(),
            explicit_interface: None,
            identifier: identifier.into(),
            accessors: vec![
                Accessor::new(AccessorKind::Add),
                Accessor::new(AccessorKind::Remove),
            ],
        }
    }
}

/// A field: `private int a, b;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Docs, attributes, modifiers.
    pub header: MemberHeader,
    /// Field type.
    pub ty: TypeSyntax,
    /// Declarator names.
    pub variables: Vec<String>,
}

impl FieldDecl {
    /// A field with the given declarators.
    pub fn new<I, S>(ty: impl Into<TypeSyntax>, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: MemberHeader::default(),
            ty: ty.into(),
            variables: variables.into_iter().map(Into::into).collect(),
        }
    }
}

/// Any other member: constructors, finalizers, operators, conversions...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherMember {
    /// Docs, attributes, modifiers.
    pub header: MemberHeader,
    /// Short description of the member kind, e.g. `constructor`.
    pub kind: String,
}

impl OtherMember {
    /// A member of the described kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            header: MemberHeader::default(),
            kind: kind.into(),
        }
    }
}

/// A member declared inside a type body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDecl {
    /// A method.
    Method(MethodDecl),
    /// A property.
    Property(PropertyDecl),
    /// An indexer.
    Indexer(IndexerDecl),
    /// A field-style event.
    EventField(EventFieldDecl),
    /// An accessor-style event.
    Event(EventDecl),
    /// A field.
    Field(FieldDecl),
    /// Anything else.
    Other(OtherMember),
}

impl MemberDecl {
    /// The member's header.
    pub fn header(&self) -> &MemberHeader {
        match self {
            MemberDecl::Method(m) => &m.header,
            MemberDecl::Property(m) => &m.header,
            MemberDecl::Indexer(m) => &m.header,
            MemberDecl::EventField(m) => &m.header,
            MemberDecl::Event(m) => &m.header,
            MemberDecl::Field(m) => &m.header,
            MemberDecl::Other(m) => &m.header,
        }
    }
}

macro_rules! member_decls {
    ($($variant:ident($decl:ident)),* $(,)?) => {
        $(
            impl From<$decl> for MemberDecl {
                fn from(decl: $decl) -> Self {
                    MemberDecl::$variant(decl)
                }
            }

            impl $decl {
                /// Set the documentation comment.
                pub fn with_docs(mut self, docs: DocComment) -> Self {
                    self.header.docs = Some(docs);
                    self
                }

                /// Add an attribute list.
                pub fn with_attribute_list(mut self, list: AttributeList) -> Self {
                    self.header.attribute_lists.push(list);
                    self
                }

                /// Add an attribute list holding only `attribute`.
                pub fn with_attribute(self, attribute: Attribute) -> Self {
                    self.with_attribute_list(AttributeList::single(attribute))
                }

                /// Add a modifier token.
                pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
                    self.header.modifiers.push(modifier.into());
                    self
                }

                /// Shorthand for `with_modifier("public")`.
                pub fn public(self) -> Self {
                    self.with_modifier("public")
                }
            }
        )*
    };
}

member_decls!(
    Method(MethodDecl),
    Property(PropertyDecl),
    Indexer(IndexerDecl),
    EventField(EventFieldDecl),
    Event(EventDecl),
    Field(FieldDecl),
    Other(OtherMember),
);

macro_rules! explicit_members {
    ($($decl:ident),* $(,)?) => {
        $(
            impl $decl {
                /// Make this an explicit implementation of `qualifier`.
                pub fn explicit(mut self, qualifier: impl Into<TypeSyntax>) -> Self {
                    self.explicit_interface = Some(qualifier.into());
                    self
                }
            }
        )*
    };
}

explicit_members!(MethodDecl, PropertyDecl, IndexerDecl, EventDecl);
