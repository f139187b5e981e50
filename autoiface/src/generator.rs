//! One marker occurrence in, one interface source out.

use autoiface_syntax::{Attribute, NodeId, SyntaxTree, TypeKind};

use crate::assemble::{InterfaceText, interface_header, write_interface};
use crate::config::SynthesisConfig;
use crate::document::OutputDocument;
use crate::host::CancellationToken;
use crate::key::{OutputKey, TypeLocation};
use crate::options::GeneratorOptions;
use crate::pool::BufferPool;
use crate::projection::Projector;
use crate::symbols::{Scope, SymbolResolver, TypeSymbol};

/// Everything one invocation needs.
#[derive(Clone, Copy)]
pub struct Request<'a> {
    /// The tree the marked type is declared in.
    pub tree: &'a SyntaxTree,
    /// The marked type.
    pub node: NodeId,
    /// The `AutoInterface` marker being served.
    pub marker: &'a Attribute,
    /// The host's symbol service.
    pub resolver: &'a dyn SymbolResolver,
    /// Checked before starting and before handing back the text.
    pub cancellation: Option<&'a CancellationToken>,
}

impl<'a> Request<'a> {
    /// A request without cancellation.
    pub fn new(
        tree: &'a SyntaxTree,
        node: NodeId,
        marker: &'a Attribute,
        resolver: &'a dyn SymbolResolver,
    ) -> Self {
        Self {
            tree,
            node,
            marker,
            resolver,
            cancellation: None,
        }
    }

    /// Attach a cancellation token.
    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation.is_some_and(CancellationToken::is_cancelled)
    }
}

/// A synthesized interface, ready for registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Registration key.
    pub key: OutputKey,
    /// The complete file.
    pub text: String,
}

/// What an invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// An interface was synthesized.
    Generated(GeneratedSource),
    /// The node is not a class, struct or record.
    Skipped,
    /// The cancellation token fired; nothing is registered.
    Cancelled,
}

impl Invocation {
    /// The generated source, if any.
    pub fn into_source(self) -> Option<GeneratedSource> {
        match self {
            Invocation::Generated(source) => Some(source),
            Invocation::Skipped | Invocation::Cancelled => None,
        }
    }
}

/// Synthesizes interfaces, sharing a buffer pool between invocations.
///
/// A `Generator` is `Sync`: many invocations may run at once, each on its
/// own pooled buffer.
#[derive(Debug, Default)]
pub struct Generator {
    options: GeneratorOptions,
    pool: BufferPool,
}

impl Generator {
    /// A generator with the given options.
    pub fn new(options: GeneratorOptions) -> Self {
        let pool = BufferPool::new(options.pool_size);
        Self { options, pool }
    }

    /// The options in effect.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// The shared buffer pool.
    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Run one invocation.
    pub fn generate(&self, request: &Request<'_>) -> Invocation {
        if request.is_cancelled() {
            debug!("invocation cancelled before start");
            return Invocation::Cancelled;
        }

        let tree = request.tree;
        let Some(decl) = tree.type_decl(request.node) else {
            return Invocation::Skipped;
        };
        if decl.kind == TypeKind::Interface {
            return Invocation::Skipped;
        }
        let Some(location) = TypeLocation::of(tree, request.node) else {
            return Invocation::Skipped;
        };

        let config = SynthesisConfig::from_marker(request.marker);
        let scope = Scope::for_type(tree, request.node);
        let resolver = request.resolver;
        let bases: Vec<TypeSymbol> = config
            .base_interfaces
            .iter()
            .map(|base| resolver.resolve_type(base, &scope))
            .collect();

        let members = Projector::new(decl, &config, &scope, resolver, &bases)
            .with_policy(self.options.policy)
            .project();

        let target_name = config.target_name(&decl.identifier);
        let type_parameters: Vec<String> =
            decl.type_parameters.iter().map(|p| p.name.clone()).collect();
        let base_names: Vec<String> = bases.iter().map(ToString::to_string).collect();

        let text = InterfaceText {
            preamble: &self.options.preamble,
            usings: tree.using_scopes(request.node),
            namespace: config.namespace_for(&location.namespace),
            containers: &config.nested_containers,
            docs: decl.docs.as_ref(),
            header: interface_header(&config.modifiers, &target_name, &type_parameters, &base_names),
            members: &members,
        };
        let mut doc = OutputDocument::new(self.pool.acquire(), &self.options.indent);
        write_interface(&mut doc, &text);
        let text = doc.finish();

        if request.is_cancelled() {
            debug!(type_name = %decl.identifier, "invocation cancelled before registration");
            return Invocation::Cancelled;
        }

        let key = OutputKey::derive(&target_name, &location);
        debug!(key = %key, members = members.len(), "interface synthesized");
        Invocation::Generated(GeneratedSource { key, text })
    }
}
