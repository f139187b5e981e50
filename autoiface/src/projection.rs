//! Per-member inclusion rules and projected declarations.

use std::collections::HashSet;

use autoiface_syntax::query::{find_attribute, matches_attribute_name};
use autoiface_syntax::{AttributeList, DocComment, TypeDecl};

use crate::config::SynthesisConfig;
use crate::inherit::provided_by_bases;
use crate::markers::{IGNORE_AUTO_INTERFACE, VISIBILITY_MARKERS};
use crate::member::{Candidate, ProjectMember};
use crate::options::EligibilityPolicy;
use crate::record::RecordParameterTracker;
use crate::symbols::{MemberSymbol, Scope, SymbolResolver, TypeSymbol};

const STATIC_PREFIX: &str = "static abstract ";

/// One member of the synthesized interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedMember<'a> {
    /// Documentation comment, verbatim.
    pub docs: Option<&'a DocComment>,
    /// Attribute lists, verbatim.
    pub attributes: &'a [AttributeList],
    /// Access prefix, static prefix and signature.
    pub declaration: String,
}

/// Decides, member by member, what goes into the interface.
pub struct Projector<'a> {
    decl: &'a TypeDecl,
    config: &'a SynthesisConfig,
    scope: &'a Scope,
    resolver: &'a dyn SymbolResolver,
    policy: EligibilityPolicy,
    bases: &'a [TypeSymbol],
}

impl<'a> Projector<'a> {
    /// A projector for `decl`. `bases` are the configured base interfaces,
    /// already resolved in `scope`.
    pub fn new(
        decl: &'a TypeDecl,
        config: &'a SynthesisConfig,
        scope: &'a Scope,
        resolver: &'a dyn SymbolResolver,
        bases: &'a [TypeSymbol],
    ) -> Self {
        Self {
            decl,
            config,
            scope,
            resolver,
            policy: EligibilityPolicy::default(),
            bases,
        }
    }

    /// Set the eligibility policy.
    pub fn with_policy(mut self, policy: EligibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Project every member, then the record's synthesized members.
    ///
    /// The result depends only on the inputs: projecting twice gives the same
    /// members in the same order.
    pub fn project(&self) -> Vec<ProjectedMember<'a>> {
        let mut tracker = RecordParameterTracker::new(self.decl);
        let mut seen = HashSet::new();
        let mut projected = Vec::new();

        for member in &self.decl.members {
            if let Some(tracker) = tracker.as_mut() {
                tracker.observe(member, self.scope, self.resolver);
            }
            let Some(candidate) = Candidate::from_member(member) else {
                continue;
            };
            let header = member.header();
            let Some(declaration) = self.project_candidate(candidate) else {
                continue;
            };
            if seen.insert(declaration.clone()) {
                projected.push(ProjectedMember {
                    docs: header.docs.as_ref(),
                    attributes: &header.attribute_lists,
                    declaration,
                });
            }
        }

        if let Some(tracker) = &tracker {
            for synthesized in tracker.synthesized() {
                if self.dedup_enabled()
                    && self.is_inherited(&synthesized.signature(self.scope, self.resolver))
                {
                    continue;
                }
                let declaration = synthesized.declaration();
                if seen.insert(declaration.clone()) {
                    projected.push(ProjectedMember {
                        docs: None,
                        attributes: &[],
                        declaration,
                    });
                }
            }
        }

        projected
    }

    fn project_candidate(&self, candidate: Candidate<'_>) -> Option<String> {
        let attributes = candidate.leading_attributes();
        if find_attribute(attributes, IGNORE_AUTO_INTERFACE).is_some() {
            trace!(member = candidate.name(), "excluded by marker");
            return None;
        }

        let explicit_match = candidate
            .explicit_qualifier()
            .is_some_and(|qualifier| self.config.matches_qualifier(qualifier, &self.decl.identifier));
        if !candidate.is_public() && !explicit_match {
            trace!(member = candidate.name(), "not eligible");
            return None;
        }

        let is_static = candidate.is_static();
        if is_static && !self.config.include_static {
            trace!(member = candidate.name(), "static member skipped");
            return None;
        }

        if self.dedup_enabled() && candidate.is_public() {
            let signatures = candidate.signatures(self.scope, self.resolver);
            if !signatures.is_empty() && signatures.iter().all(|s| self.is_inherited(s)) {
                return None;
            }
        }

        let mut declaration = access_prefix(attributes);
        if is_static {
            declaration.push_str(STATIC_PREFIX);
        }
        candidate.write_signature(&mut declaration);
        Some(declaration)
    }

    fn dedup_enabled(&self) -> bool {
        self.policy == EligibilityPolicy::InheritanceAware && !self.bases.is_empty()
    }

    fn is_inherited(&self, signature: &MemberSymbol) -> bool {
        provided_by_bases(signature, self.bases, self.resolver)
    }
}

/// Access modifiers requested by visibility markers, in source order, each
/// followed by a space.
pub(crate) fn access_prefix(attribute_lists: &[AttributeList]) -> String {
    let mut prefix = String::new();
    for attribute in attribute_lists.iter().flat_map(|list| &list.attributes) {
        if let Some((_, keyword)) = VISIBILITY_MARKERS
            .iter()
            .find(|(marker, _)| matches_attribute_name(attribute.identifier(), marker))
        {
            prefix.push_str(keyword);
            prefix.push(' ');
        }
    }
    prefix
}
