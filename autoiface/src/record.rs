//! Members a record declares implicitly through its parameter list.

use core::fmt::Write as _;

use autoiface_syntax::query::has_modifier;
use autoiface_syntax::{MemberDecl, Parameter, TypeDecl, TypeKind};

use crate::symbols::{
    AccessorShape, MemberKind, MemberSymbol, ParameterSymbol, RefKind, Scope, SymbolResolver,
    types_equivalent,
};

/// Tracks which primary-constructor parameters still turn into interface
/// members after the record body has been seen.
#[derive(Debug)]
pub struct RecordParameterTracker<'a> {
    parameters: &'a [Parameter],
    shadowed: Vec<bool>,
    deconstruct_overwritten: bool,
    accessors: AccessorShape,
}

/// A member synthesized from the parameter list.
#[derive(Debug, Clone, Copy)]
pub enum SynthesizedMember<'a> {
    /// The property backing one parameter.
    Property {
        /// The parameter.
        parameter: &'a Parameter,
        /// `get; init;` or `get; set;`
        accessors: AccessorShape,
    },
    /// `void Deconstruct(out ...)` over all parameters.
    Deconstruct {
        /// All primary-constructor parameters.
        parameters: &'a [Parameter],
    },
}

impl<'a> RecordParameterTracker<'a> {
    /// `None` unless `decl` is a record with a non-empty parameter list.
    pub fn new(decl: &'a TypeDecl) -> Option<Self> {
        if !decl.kind.is_record() {
            return None;
        }
        let parameters = decl.parameter_list.as_deref()?;
        if parameters.is_empty() {
            return None;
        }

        let mutable =
            decl.kind == TypeKind::RecordStruct && !has_modifier(&decl.modifiers, "readonly");
        let accessors = AccessorShape {
            get: true,
            set: mutable,
            init: !mutable,
            ..AccessorShape::default()
        };

        Some(Self {
            parameters,
            shadowed: vec![false; parameters.len()],
            deconstruct_overwritten: false,
            accessors,
        })
    }

    /// Account for one declared member.
    ///
    /// Must see every member of the body, whether it ends up in the
    /// interface or not. Parameter types of a declared `Deconstruct` are
    /// compared after resolution in `scope`, so `System.Int32` matches `int`.
    pub fn observe(
        &mut self,
        member: &MemberDecl,
        scope: &Scope,
        resolver: &dyn SymbolResolver,
    ) {
        match member {
            MemberDecl::Field(field) => {
                for variable in &field.variables {
                    self.shadow(variable);
                }
            }
            MemberDecl::Property(property) if property.explicit_interface.is_none() => {
                self.shadow(&property.identifier);
            }
            MemberDecl::Method(method)
                if method.identifier == "Deconstruct"
                    && method.explicit_interface.is_none()
                    && method.type_parameters.is_empty()
                    && !has_modifier(&method.header.modifiers, "static")
                    && method.parameters.len() == self.parameters.len()
                    && method
                        .parameters
                        .iter()
                        .zip(self.parameters)
                        .all(|(declared, record)| {
                            has_modifier(&declared.modifiers, "out")
                                && types_equivalent(
                                    &resolver.resolve_type(&declared.ty, scope),
                                    &resolver.resolve_type(&record.ty, scope),
                                )
                        }) =>
            {
                trace!(record_parameters = self.parameters.len(), "Deconstruct overwritten");
                self.deconstruct_overwritten = true;
            }
            _ => {}
        }
    }

    fn shadow(&mut self, identifier: &str) {
        for (parameter, shadowed) in self.parameters.iter().zip(&mut self.shadowed) {
            if parameter.name == identifier {
                trace!(parameter = %parameter.name, "record parameter shadowed");
                *shadowed = true;
            }
        }
    }

    /// Is the parameter at `index` declared explicitly in the body?
    pub fn is_shadowed(&self, index: usize) -> bool {
        self.shadowed.get(index).copied().unwrap_or(false)
    }

    /// Did the body declare its own matching `Deconstruct`?
    pub fn deconstruct_overwritten(&self) -> bool {
        self.deconstruct_overwritten
    }

    /// The members still to synthesize, in emission order.
    pub fn synthesized(&self) -> Vec<SynthesizedMember<'a>> {
        let mut members: Vec<SynthesizedMember<'a>> = self
            .parameters
            .iter()
            .zip(&self.shadowed)
            .filter(|(_, shadowed)| !**shadowed)
            .map(|(parameter, _)| SynthesizedMember::Property {
                parameter,
                accessors: self.accessors,
            })
            .collect();
        if !self.deconstruct_overwritten {
            members.push(SynthesizedMember::Deconstruct {
                parameters: self.parameters,
            });
        }
        members
    }
}

impl SynthesizedMember<'_> {
    /// The interface declaration text.
    pub fn declaration(&self) -> String {
        let mut out = String::new();
        match self {
            SynthesizedMember::Property {
                parameter,
                accessors,
            } => {
                let _ = write!(out, "{} {} {{ get; ", parameter.ty, parameter.name);
                out.push_str(if accessors.set { "set; }" } else { "init; }" });
            }
            SynthesizedMember::Deconstruct { parameters } => {
                out.push_str("void Deconstruct(");
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let _ = write!(out, "out {} {}", parameter.ty, parameter.name);
                }
                out.push_str(");");
            }
        }
        out
    }

    /// The comparable signature, for inheritance deduplication.
    pub fn signature(&self, scope: &Scope, resolver: &dyn SymbolResolver) -> MemberSymbol {
        match self {
            SynthesizedMember::Property {
                parameter,
                accessors,
            } => MemberSymbol {
                kind: MemberKind::Property,
                name: parameter.name.clone(),
                ty: resolver.resolve_type(&parameter.ty, scope),
                parameters: Vec::new(),
                arity: 0,
                is_static: false,
                accessors: *accessors,
            },
            SynthesizedMember::Deconstruct { parameters } => MemberSymbol {
                kind: MemberKind::Method,
                name: "Deconstruct".to_owned(),
                ty: resolver.resolve_type(&"void".into(), scope),
                parameters: parameters
                    .iter()
                    .map(|p| ParameterSymbol {
                        ty: resolver.resolve_type(&p.ty, scope),
                        ref_kind: RefKind::Out,
                    })
                    .collect(),
                arity: 0,
                is_static: false,
                accessors: AccessorShape::default(),
            },
        }
    }
}
