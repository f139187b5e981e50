//! Wiring into the host compiler's source pipeline.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use autoiface_syntax::query::attributes_named;
use autoiface_syntax::{Attribute, NodeId, SyntaxTree, TypeDecl, TypeKind};
use indexmap::IndexMap;
use rayon::prelude::*;

use crate::error::OutputError;
use crate::generator::{GeneratedSource, Generator, Invocation, Request};
use crate::markers::{AUTO_INTERFACE, boilerplate_sources};
use crate::options::GeneratorOptions;
use crate::symbols::SymbolResolver;

/// The host's sink for generated sources.
pub trait SourceOutput {
    /// Register `text` under `hint`. Each hint may be used once.
    fn add_source(&mut self, hint: &str, text: String) -> Result<(), OutputError>;
}

/// An in-memory [`SourceOutput`] that keeps registration order.
#[derive(Debug, Default, Clone)]
pub struct SourceCollector {
    sources: IndexMap<String, String>,
}

impl SourceCollector {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text registered under `hint`.
    pub fn get(&self, hint: &str) -> Option<&str> {
        self.sources.get(hint).map(String::as_str)
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// No source registered yet.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// `(hint, text)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources
            .iter()
            .map(|(hint, text)| (hint.as_str(), text.as_str()))
    }

    /// Take the registered sources.
    pub fn into_sources(self) -> IndexMap<String, String> {
        self.sources
    }
}

impl SourceOutput for SourceCollector {
    fn add_source(&mut self, hint: &str, text: String) -> Result<(), OutputError> {
        if self.sources.contains_key(hint) {
            return Err(OutputError::DuplicateHint(hint.to_owned()));
        }
        self.sources.insert(hint.to_owned(), text);
        Ok(())
    }
}

/// Cooperative cancellation shared between the host and running invocations.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// A token that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the token. Every clone observes it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Has the token fired?
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Register the marker definitions.
pub fn register_boilerplate(out: &mut dyn SourceOutput) -> Result<(), OutputError> {
    for source in boilerplate_sources() {
        trace!(hint = source.hint, "registering boilerplate");
        out.add_source(source.hint, source.text)?;
    }
    Ok(())
}

/// One `AutoInterface` marker on one type.
#[derive(Debug, Clone, Copy)]
pub struct MarkedType<'a> {
    /// The marked type's node.
    pub node: NodeId,
    /// The marked type.
    pub decl: &'a TypeDecl,
    /// The marker occurrence.
    pub marker: &'a Attribute,
}

/// Every `AutoInterface` marker on a class, struct or record in `tree`, in
/// document order. A type with several markers yields one entry per marker.
pub fn discover(tree: &SyntaxTree) -> Vec<MarkedType<'_>> {
    tree.type_declarations()
        .filter(|(_, decl)| decl.kind != TypeKind::Interface)
        .flat_map(|(node, decl)| {
            attributes_named(&decl.attribute_lists, AUTO_INTERFACE)
                .map(move |marker| MarkedType { node, decl, marker })
        })
        .collect()
}

/// Counts from one [`Host::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Sources registered.
    pub generated: usize,
    /// Invocations that produced nothing.
    pub skipped: usize,
    /// Invocations dropped because of cancellation.
    pub cancelled: usize,
}

/// Drives the generator over whole syntax trees.
pub struct Host<'r> {
    generator: Generator,
    resolver: &'r dyn SymbolResolver,
    cancellation: Option<CancellationToken>,
}

impl<'r> Host<'r> {
    /// A host with default options.
    pub fn new(resolver: &'r dyn SymbolResolver) -> Self {
        Self {
            generator: Generator::default(),
            resolver,
            cancellation: None,
        }
    }

    /// Replace the generator options.
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.generator = Generator::new(options);
        self
    }

    /// Observe `token` in every invocation.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The generator in use.
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Register the fixed sources. Call once per compilation.
    pub fn initialize(&self, out: &mut dyn SourceOutput) -> Result<(), OutputError> {
        register_boilerplate(out)
    }

    /// Synthesize every marked type of `trees`.
    ///
    /// Invocations run in parallel; results are registered one by one in
    /// discovery order. Once the token fires, nothing more is registered.
    ///
    /// A source the sink rejects does not stop the run: the remaining sources
    /// are still registered, and the first rejection is returned afterwards.
    pub fn run(
        &self,
        trees: &[SyntaxTree],
        out: &mut dyn SourceOutput,
    ) -> Result<RunSummary, OutputError> {
        let jobs: Vec<(&SyntaxTree, MarkedType<'_>)> = trees
            .iter()
            .flat_map(|tree| discover(tree).into_iter().map(move |marked| (tree, marked)))
            .collect();
        debug!(jobs = jobs.len(), trees = trees.len(), "running generator");

        let results: Vec<Invocation> = jobs
            .par_iter()
            .map(|(tree, marked)| {
                let mut request = Request::new(tree, marked.node, marked.marker, self.resolver);
                if let Some(token) = &self.cancellation {
                    request = request.with_cancellation(token);
                }
                self.generator.generate(&request)
            })
            .collect();

        let mut summary = RunSummary::default();
        let mut first_error = None;
        for invocation in results {
            if self.is_cancelled() {
                summary.cancelled += 1;
                continue;
            }
            match invocation {
                Invocation::Generated(GeneratedSource { key, text }) => {
                    trace!(key = %key, "registering source");
                    match out.add_source(key.as_str(), text) {
                        Ok(()) => summary.generated += 1,
                        Err(err) => {
                            debug!(key = %key, "source rejected");
                            first_error.get_or_insert(err);
                        }
                    }
                }
                Invocation::Skipped => summary.skipped += 1,
                Invocation::Cancelled => summary.cancelled += 1,
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(summary),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
