//! The semantic side of inheritance deduplication.
//!
//! A [`SymbolResolver`] turns type syntax into [`TypeSymbol`]s and exposes
//! the members of interfaces. Member signatures are compared structurally
//! with [`members_equivalent`].

use core::fmt;

use autoiface_syntax::{Accessor, AccessorKind, TypeSyntax};

mod scope;
mod table;

pub use scope::Scope;
pub use table::SymbolTable;

/// Keyword aliases for `System` types.
const KEYWORD_TYPES: &[(&str, &str)] = &[
    ("bool", "Boolean"),
    ("byte", "Byte"),
    ("sbyte", "SByte"),
    ("char", "Char"),
    ("decimal", "Decimal"),
    ("double", "Double"),
    ("float", "Single"),
    ("int", "Int32"),
    ("uint", "UInt32"),
    ("nint", "IntPtr"),
    ("nuint", "UIntPtr"),
    ("long", "Int64"),
    ("ulong", "UInt64"),
    ("short", "Int16"),
    ("ushort", "UInt16"),
    ("object", "Object"),
    ("string", "String"),
    ("void", "Void"),
];

/// Which declaration a type parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeParameterOwner {
    /// A parameter of the enclosing type.
    Type,
    /// A parameter of the method itself.
    Method,
}

/// A resolved type.
#[derive(Debug, Clone)]
pub enum TypeSymbol {
    /// A named type: `path` is the fully qualified name split on dots.
    Named {
        /// `["System", "Collections", "Generic", "List"]`
        path: Vec<String>,
        /// Generic arguments.
        arguments: Vec<TypeSymbol>,
    },
    /// A reference to a generic parameter.
    TypeParameter {
        /// Whose parameter this is.
        owner: TypeParameterOwner,
        /// Position in the owner's parameter list.
        ordinal: usize,
        /// Name as declared. Not part of equivalence.
        name: String,
    },
    /// `T[]`, `T[,]`...
    Array {
        /// Element type.
        element: Box<TypeSymbol>,
        /// Number of dimensions.
        rank: usize,
    },
    /// `T?`
    Nullable(Box<TypeSymbol>),
    /// `T*`
    Pointer(Box<TypeSymbol>),
    /// A tuple. Element names are not part of the type.
    Tuple(Vec<TypeSymbol>),
    /// Something the resolver could not make sense of, kept as text.
    Unresolved(String),
}

impl TypeSymbol {
    /// A non-generic named type from a dotted name.
    pub fn named(qualified: &str) -> Self {
        TypeSymbol::Named {
            path: qualified.split('.').map(str::to_owned).collect(),
            arguments: Vec::new(),
        }
    }

    /// Set the generic arguments of a named type. Other symbols are returned
    /// unchanged.
    pub fn with_arguments(self, arguments: Vec<TypeSymbol>) -> Self {
        match self {
            TypeSymbol::Named { path, .. } => TypeSymbol::Named { path, arguments },
            other => other,
        }
    }

    /// The `System` type a keyword such as `int` stands for.
    pub fn keyword(keyword: &str) -> Option<Self> {
        KEYWORD_TYPES
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, name)| TypeSymbol::Named {
                path: vec!["System".to_owned(), (*name).to_owned()],
                arguments: Vec::new(),
            })
    }

    /// Replace references to the owning type's parameters by `arguments`.
    ///
    /// Parameters without a matching argument are left in place.
    pub fn substitute(&self, arguments: &[TypeSymbol]) -> TypeSymbol {
        match self {
            TypeSymbol::TypeParameter {
                owner: TypeParameterOwner::Type,
                ordinal,
                ..
            } => match arguments.get(*ordinal) {
                Some(argument) => argument.clone(),
                None => self.clone(),
            },
            TypeSymbol::Named { path, arguments: own } => TypeSymbol::Named {
                path: path.clone(),
                arguments: own.iter().map(|a| a.substitute(arguments)).collect(),
            },
            TypeSymbol::Array { element, rank } => TypeSymbol::Array {
                element: Box::new(element.substitute(arguments)),
                rank: *rank,
            },
            TypeSymbol::Nullable(inner) => {
                TypeSymbol::Nullable(Box::new(inner.substitute(arguments)))
            }
            TypeSymbol::Pointer(inner) => TypeSymbol::Pointer(Box::new(inner.substitute(arguments))),
            TypeSymbol::Tuple(elements) => {
                TypeSymbol::Tuple(elements.iter().map(|e| e.substitute(arguments)).collect())
            }
            TypeSymbol::TypeParameter { .. } | TypeSymbol::Unresolved(_) => self.clone(),
        }
    }

    /// Key used by [`SymbolTable`]: dotted path plus a `` `N `` arity
    /// suffix for generic types.
    pub fn lookup_key(&self) -> Option<String> {
        match self {
            TypeSymbol::Named { path, arguments } => Some(lookup_key(path.as_slice(), arguments.len())),
            _ => None,
        }
    }
}

pub(crate) fn lookup_key<S: AsRef<str>>(path: &[S], arity: usize) -> String {
    let mut key = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            key.push('.');
        }
        key.push_str(segment.as_ref());
    }
    if arity > 0 {
        key.push('`');
        key.push_str(&arity.to_string());
    }
    key
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSymbol::Named { path, arguments } => {
                if let ([system, name], true) = (path.as_slice(), arguments.is_empty())
                    && system == "System"
                    && let Some((keyword, _)) = KEYWORD_TYPES.iter().find(|(_, n)| *n == name.as_str())
                {
                    return f.write_str(keyword);
                }
                f.write_str(&path.join("."))?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{argument}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeSymbol::TypeParameter { name, .. } => f.write_str(name),
            TypeSymbol::Array { element, rank } => {
                write!(f, "{element}[{}]", ",".repeat(rank.saturating_sub(1)))
            }
            TypeSymbol::Nullable(inner) => write!(f, "{inner}?"),
            TypeSymbol::Pointer(inner) => write!(f, "{inner}*"),
            TypeSymbol::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
            TypeSymbol::Unresolved(text) => f.write_str(text),
        }
    }
}

/// Structural type equality.
///
/// Compares paths, generic arguments, nullability, array rank, tuple element
/// types and type-parameter position. Type-parameter names and tuple element
/// names are ignored.
pub fn types_equivalent(a: &TypeSymbol, b: &TypeSymbol) -> bool {
    use TypeSymbol::*;

    match (a, b) {
        (
            Named {
                path: pa,
                arguments: aa,
            },
            Named {
                path: pb,
                arguments: ab,
            },
        ) => pa == pb && all_equivalent(aa, ab),
        (
            TypeParameter {
                owner: oa,
                ordinal: ia,
                ..
            },
            TypeParameter {
                owner: ob,
                ordinal: ib,
                ..
            },
        ) => oa == ob && ia == ib,
        (
            Array {
                element: ea,
                rank: ra,
            },
            Array {
                element: eb,
                rank: rb,
            },
        ) => ra == rb && types_equivalent(ea, eb),
        (Nullable(x), Nullable(y)) | (Pointer(x), Pointer(y)) => types_equivalent(x, y),
        (Tuple(xs), Tuple(ys)) => all_equivalent(xs, ys),
        (Unresolved(x), Unresolved(y)) => x == y,
        _ => false,
    }
}

fn all_equivalent(a: &[TypeSymbol], b: &[TypeSymbol]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| types_equivalent(x, y))
}

/// Kind of an interface member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A method.
    Method,
    /// A property.
    Property,
    /// An indexer.
    Indexer,
    /// An event.
    Event,
}

/// How a parameter is passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// By value.
    #[default]
    None,
    /// `ref`
    Ref,
    /// `out`
    Out,
    /// `in` or `ref readonly`
    In,
}

impl RefKind {
    /// Read the ref-kind from parameter modifiers.
    pub fn from_modifiers(modifiers: &[String]) -> Self {
        let has = |token: &str| modifiers.iter().any(|m| m == token);
        if has("out") {
            RefKind::Out
        } else if has("in") || (has("ref") && has("readonly")) {
            RefKind::In
        } else if has("ref") {
            RefKind::Ref
        } else {
            RefKind::None
        }
    }
}

/// Which accessors a member exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AccessorShape {
    /// `get`
    pub get: bool,
    /// `set`
    pub set: bool,
    /// `init`
    pub init: bool,
    /// `add`
    pub add: bool,
    /// `remove`
    pub remove: bool,
}

impl AccessorShape {
    /// A read-only shape: `{ get; }`.
    pub const GETTER: Self = Self {
        get: true,
        set: false,
        init: false,
        add: false,
        remove: false,
    };

    /// The shape of every event: `add` and `remove`.
    pub const EVENT: Self = Self {
        get: false,
        set: false,
        init: false,
        add: true,
        remove: true,
    };

    /// The shape of an accessor list; accessors with their own modifiers are
    /// not visible through an interface and are left out. `None` stands for
    /// an expression body.
    pub fn of(accessors: Option<&[Accessor]>) -> Self {
        let Some(accessors) = accessors else {
            return Self::GETTER;
        };
        let mut shape = Self::default();
        for accessor in accessors.iter().filter(|a| a.modifiers.is_empty()) {
            match accessor.kind {
                AccessorKind::Get => shape.get = true,
                AccessorKind::Set => shape.set = true,
                AccessorKind::Init => shape.init = true,
                AccessorKind::Add => shape.add = true,
                AccessorKind::Remove => shape.remove = true,
            }
        }
        shape
    }
}

/// One parameter of a member signature.
#[derive(Debug, Clone)]
pub struct ParameterSymbol {
    /// Parameter type.
    pub ty: TypeSymbol,
    /// How it is passed.
    pub ref_kind: RefKind,
}

/// The comparable signature of a member.
#[derive(Debug, Clone)]
pub struct MemberSymbol {
    /// Member kind.
    pub kind: MemberKind,
    /// Member name; `this` for indexers.
    pub name: String,
    /// Return, property, indexer or event type.
    pub ty: TypeSymbol,
    /// Method or indexer parameters.
    pub parameters: Vec<ParameterSymbol>,
    /// Number of method type parameters.
    pub arity: usize,
    /// `static` members.
    pub is_static: bool,
    /// Exposed accessors. Empty for methods.
    pub accessors: AccessorShape,
}

impl MemberSymbol {
    /// Replace the owning type's parameters by `arguments`.
    pub fn substitute(&self, arguments: &[TypeSymbol]) -> MemberSymbol {
        MemberSymbol {
            kind: self.kind,
            name: self.name.clone(),
            ty: self.ty.substitute(arguments),
            parameters: self
                .parameters
                .iter()
                .map(|p| ParameterSymbol {
                    ty: p.ty.substitute(arguments),
                    ref_kind: p.ref_kind,
                })
                .collect(),
            arity: self.arity,
            is_static: self.is_static,
            accessors: self.accessors,
        }
    }
}

/// Does `candidate` provide exactly the member `wanted` describes?
pub fn members_equivalent(candidate: &MemberSymbol, wanted: &MemberSymbol) -> bool {
    candidate.kind == wanted.kind
        && candidate.name == wanted.name
        && candidate.is_static == wanted.is_static
        && candidate.arity == wanted.arity
        && candidate.accessors == wanted.accessors
        && types_equivalent(&candidate.ty, &wanted.ty)
        && candidate.parameters.len() == wanted.parameters.len()
        && candidate
            .parameters
            .iter()
            .zip(&wanted.parameters)
            .all(|(a, b)| a.ref_kind == b.ref_kind && types_equivalent(&a.ty, &b.ty))
}

/// An interface as seen by the dedup search.
#[derive(Debug, Clone)]
pub struct InterfaceSymbol {
    /// The interface type, with its generic arguments.
    pub symbol: TypeSymbol,
    /// Declared members, generic arguments already substituted.
    pub members: Vec<MemberSymbol>,
    /// Directly inherited interfaces, generic arguments already substituted.
    pub bases: Vec<TypeSymbol>,
}

/// The host's symbol service.
pub trait SymbolResolver: Sync {
    /// Resolve type syntax written in `scope`.
    fn resolve_type(&self, ty: &TypeSyntax, scope: &Scope) -> TypeSymbol;

    /// The interface `symbol` refers to, if it is a known interface.
    fn interface(&self, symbol: &TypeSymbol) -> Option<InterfaceSymbol>;
}
