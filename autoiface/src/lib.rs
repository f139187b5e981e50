#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod assemble;
mod config;
mod document;
mod error;
mod generator;
mod host;
mod inherit;
mod key;
mod markers;
mod member;
mod options;
mod pool;
mod projection;
mod record;
pub mod symbols;

pub use config::SynthesisConfig;
pub use document::OutputDocument;
pub use error::OutputError;
pub use generator::{GeneratedSource, Generator, Invocation, Request};
pub use host::{
    CancellationToken, Host, MarkedType, RunSummary, SourceCollector, SourceOutput, discover,
    register_boilerplate,
};
pub use inherit::provided_by_bases;
pub use key::{OutputKey, TypeLocation};
pub use markers::{
    AUTO_INTERFACE, BoilerplateSource, EXCLUDE_SYMBOL, IGNORE_AUTO_INTERFACE, PREAMBLE,
    VISIBILITY_MARKERS, boilerplate_sources,
};
pub use member::{Candidate, ProjectMember};
pub use options::{EligibilityPolicy, GeneratorOptions};
pub use pool::{BufferPool, PooledBuffer};
pub use projection::{ProjectedMember, Projector};
pub use record::{RecordParameterTracker, SynthesizedMember};

use autoiface_syntax::SyntaxTree;
use symbols::SymbolResolver;

/// Synthesize every marked type of `tree` with default options, in discovery
/// order.
pub fn synthesize(tree: &SyntaxTree, resolver: &dyn SymbolResolver) -> Vec<GeneratedSource> {
    let generator = Generator::default();
    discover(tree)
        .into_iter()
        .filter_map(|marked| {
            generator
                .generate(&Request::new(tree, marked.node, marked.marker, resolver))
                .into_source()
        })
        .collect()
}
