//! Projectable member kinds.

use core::fmt::Write as _;

use autoiface_syntax::query::has_modifier;
use autoiface_syntax::{
    Accessor, AttributeList, DocComment, EventDecl, EventFieldDecl, IndexerDecl, MemberDecl,
    MemberHeader, MethodDecl, ParameterList, PropertyDecl, TypeSyntax,
};

use crate::symbols::{
    AccessorShape, MemberKind, MemberSymbol, ParameterSymbol, RefKind, Scope, SymbolResolver,
};

/// A member that can appear in a synthesized interface.
pub trait ProjectMember {
    /// Docs, attribute lists and modifiers.
    fn header(&self) -> &MemberHeader;

    /// The documentation comment, copied verbatim.
    fn leading_docs(&self) -> Option<&DocComment> {
        self.header().docs.as_ref()
    }

    /// The attribute lists, copied verbatim.
    fn leading_attributes(&self) -> &[AttributeList] {
        &self.header().attribute_lists
    }

    /// Declared `static`.
    fn is_static(&self) -> bool {
        has_modifier(&self.header().modifiers, "static")
    }

    /// Declared `public`.
    fn is_public(&self) -> bool {
        has_modifier(&self.header().modifiers, "public")
    }

    /// The interface this member explicitly implements.
    fn explicit_qualifier(&self) -> Option<&TypeSyntax> {
        None
    }

    /// Append the interface form of the declaration, without access or
    /// static prefixes.
    fn write_signature(&self, out: &mut String);

    /// The comparable signatures this member declares. Usually one; a
    /// field-style event declares one per variable.
    fn signatures(&self, scope: &Scope, resolver: &dyn SymbolResolver) -> Vec<MemberSymbol>;
}

/// The closed set of projectable members.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'a> {
    /// A method.
    Method(&'a MethodDecl),
    /// A property.
    Property(&'a PropertyDecl),
    /// An indexer.
    Indexer(&'a IndexerDecl),
    /// A field-style event.
    EventField(&'a EventFieldDecl),
    /// An accessor-style event.
    Event(&'a EventDecl),
}

impl<'a> Candidate<'a> {
    /// `None` for fields, constructors, operators and other kinds that never
    /// reach an interface.
    pub fn from_member(member: &'a MemberDecl) -> Option<Self> {
        match member {
            MemberDecl::Method(m) => Some(Candidate::Method(m)),
            MemberDecl::Property(p) => Some(Candidate::Property(p)),
            MemberDecl::Indexer(i) => Some(Candidate::Indexer(i)),
            MemberDecl::EventField(e) => Some(Candidate::EventField(e)),
            MemberDecl::Event(e) => Some(Candidate::Event(e)),
            MemberDecl::Field(_) | MemberDecl::Other(_) => None,
        }
    }

    fn inner(&self) -> &'a dyn ProjectMember {
        match *self {
            Candidate::Method(m) => m,
            Candidate::Property(p) => p,
            Candidate::Indexer(i) => i,
            Candidate::EventField(e) => e,
            Candidate::Event(e) => e,
        }
    }

    /// Display name for logs.
    pub fn name(&self) -> &'a str {
        match *self {
            Candidate::Method(m) => &m.identifier,
            Candidate::Property(p) => &p.identifier,
            Candidate::Indexer(_) => "this[]",
            Candidate::EventField(e) => e.variables.first().map_or("", String::as_str),
            Candidate::Event(e) => &e.identifier,
        }
    }
}

impl ProjectMember for Candidate<'_> {
    fn header(&self) -> &MemberHeader {
        self.inner().header()
    }

    fn explicit_qualifier(&self) -> Option<&TypeSyntax> {
        self.inner().explicit_qualifier()
    }

    fn write_signature(&self, out: &mut String) {
        self.inner().write_signature(out)
    }

    fn signatures(&self, scope: &Scope, resolver: &dyn SymbolResolver) -> Vec<MemberSymbol> {
        self.inner().signatures(scope, resolver)
    }
}

/// `{ get; set; }` from the public accessors; an expression body is
/// `{ get; }`.
pub(crate) fn write_accessor_block(out: &mut String, accessors: Option<&[Accessor]>) {
    let Some(accessors) = accessors else {
        out.push_str("{ get; }");
        return;
    };
    out.push_str("{ ");
    for accessor in accessors.iter().filter(|a| a.modifiers.is_empty()) {
        out.push_str(accessor.kind.keyword());
        out.push_str("; ");
    }
    out.push('}');
}

fn parameter_symbols(
    parameters: &[autoiface_syntax::Parameter],
    scope: &Scope,
    resolver: &dyn SymbolResolver,
) -> Vec<ParameterSymbol> {
    parameters
        .iter()
        .map(|p| ParameterSymbol {
            ty: resolver.resolve_type(&p.ty, scope),
            ref_kind: RefKind::from_modifiers(&p.modifiers),
        })
        .collect()
}

impl ProjectMember for MethodDecl {
    fn header(&self) -> &MemberHeader {
        &self.header
    }

    fn explicit_qualifier(&self) -> Option<&TypeSyntax> {
        self.explicit_interface.as_ref()
    }

    fn write_signature(&self, out: &mut String) {
        let _ = write!(out, "{} {}", self.return_type, self.identifier);
        if !self.type_parameters.is_empty() {
            out.push('<');
            for (i, parameter) in self.type_parameters.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{parameter}");
            }
            out.push('>');
        }
        let _ = write!(out, "({})", ParameterList(&self.parameters));
        for clause in &self.constraints {
            let _ = write!(out, " {clause}");
        }
        out.push(';');
    }

    fn signatures(&self, scope: &Scope, resolver: &dyn SymbolResolver) -> Vec<MemberSymbol> {
        let scope = scope.with_method_type_parameters(&self.type_parameters);
        vec![MemberSymbol {
            kind: MemberKind::Method,
            name: self.identifier.clone(),
            ty: resolver.resolve_type(&self.return_type, &scope),
            parameters: parameter_symbols(&self.parameters, &scope, resolver),
            arity: self.type_parameters.len(),
            is_static: self.is_static(),
            accessors: AccessorShape::default(),
        }]
    }
}

impl ProjectMember for PropertyDecl {
    fn header(&self) -> &MemberHeader {
        &self.header
    }

    fn explicit_qualifier(&self) -> Option<&TypeSyntax> {
        self.explicit_interface.as_ref()
    }

    fn write_signature(&self, out: &mut String) {
        let _ = write!(out, "{} {} ", self.ty, self.identifier);
        write_accessor_block(out, self.accessors.as_deref());
    }

    fn signatures(&self, scope: &Scope, resolver: &dyn SymbolResolver) -> Vec<MemberSymbol> {
        vec![MemberSymbol {
            kind: MemberKind::Property,
            name: self.identifier.clone(),
            ty: resolver.resolve_type(&self.ty, scope),
            parameters: Vec::new(),
            arity: 0,
            is_static: self.is_static(),
            accessors: AccessorShape::of(self.accessors.as_deref()),
        }]
    }
}

impl ProjectMember for IndexerDecl {
    fn header(&self) -> &MemberHeader {
        &self.header
    }

    fn explicit_qualifier(&self) -> Option<&TypeSyntax> {
        self.explicit_interface.as_ref()
    }

    fn write_signature(&self, out: &mut String) {
        let _ = write!(out, "{} this[{}] ", self.ty, ParameterList(&self.parameters));
        write_accessor_block(out, self.accessors.as_deref());
    }

    fn signatures(&self, scope: &Scope, resolver: &dyn SymbolResolver) -> Vec<MemberSymbol> {
        vec![MemberSymbol {
            kind: MemberKind::Indexer,
            name: "this".to_owned(),
            ty: resolver.resolve_type(&self.ty, scope),
            parameters: parameter_symbols(&self.parameters, scope, resolver),
            arity: 0,
            is_static: self.is_static(),
            accessors: AccessorShape::of(self.accessors.as_deref()),
        }]
    }
}

impl ProjectMember for EventFieldDecl {
    fn header(&self) -> &MemberHeader {
        &self.header
    }

    fn write_signature(&self, out: &mut String) {
        let _ = write!(out, "event {} {};", self.ty, self.variables.join(", "));
    }

    fn signatures(&self, scope: &Scope, resolver: &dyn SymbolResolver) -> Vec<MemberSymbol> {
        let ty = resolver.resolve_type(&self.ty, scope);
        self.variables
            .iter()
            .map(|name| MemberSymbol {
                kind: MemberKind::Event,
                name: name.clone(),
                ty: ty.clone(),
                parameters: Vec::new(),
                arity: 0,
                is_static: self.is_static(),
                accessors: AccessorShape::EVENT,
            })
            .collect()
    }
}

impl ProjectMember for EventDecl {
    fn header(&self) -> &MemberHeader {
        &self.header
    }

    fn explicit_qualifier(&self) -> Option<&TypeSyntax> {
        self.explicit_interface.as_ref()
    }

    fn write_signature(&self, out: &mut String) {
        let _ = write!(out, "event {} {};", self.ty, self.identifier);
    }

    fn signatures(&self, scope: &Scope, resolver: &dyn SymbolResolver) -> Vec<MemberSymbol> {
        vec![MemberSymbol {
            kind: MemberKind::Event,
            name: self.identifier.clone(),
            ty: resolver.resolve_type(&self.ty, scope),
            parameters: Vec::new(),
            arity: 0,
            is_static: self.is_static(),
            accessors: AccessorShape::EVENT,
        }]
    }
}
