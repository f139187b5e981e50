//! Documentation comments.

/// A `///` documentation comment, one entry per line.
///
/// Lines are stored without the `///` marker, so ` <summary>` keeps its
/// leading space and renders back as `/// <summary>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    /// Build a comment from already-stripped lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Extract the `///` lines from leading trivia.
    ///
    /// Other trivia (regions, plain comments, blank lines) is dropped.
    /// Returns `None` when there is no documentation line at all.
    pub fn parse(trivia: &str) -> Option<Self> {
        let lines: Vec<String> = trivia
            .lines()
            .filter_map(|line| line.trim_start().strip_prefix("///"))
            .map(|rest| rest.trim_end().to_owned())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    /// The stripped lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Each line with its `///` marker restored.
    pub fn rendered_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| format!("///{line}"))
    }
}
