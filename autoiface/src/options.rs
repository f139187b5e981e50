//! Generator-wide options.

use crate::markers::PREAMBLE;

/// How the projection engine decides that a member belongs in the interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EligibilityPolicy {
    /// Declared modifiers and explicit-interface qualifiers only.
    DeclaredModifiers,
    /// Like [`DeclaredModifiers`](Self::DeclaredModifiers), but public members
    /// already provided by a configured base interface are left out.
    #[default]
    InheritanceAware,
}

/// Options shared by every invocation of a [`Generator`](crate::Generator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// One level of indentation.
    pub indent: String,
    /// Member eligibility policy.
    pub policy: EligibilityPolicy,
    /// Text placed at the top of every synthesized file.
    pub preamble: String,
    /// Maximum number of idle text buffers kept for reuse.
    pub pool_size: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_owned(),
            policy: EligibilityPolicy::default(),
            preamble: PREAMBLE.to_owned(),
            pool_size: 8,
        }
    }
}

impl GeneratorOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the eligibility policy.
    pub fn with_policy(mut self, policy: EligibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the generated-file preamble.
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// Set how many idle buffers the pool keeps.
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }
}
