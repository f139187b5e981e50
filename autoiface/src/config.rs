//! Marker arguments resolved into a [`SynthesisConfig`].

use std::borrow::Cow;

use autoiface_syntax::query::{named_bool, named_string, named_string_array, named_type_array};
use autoiface_syntax::{Attribute, TypeSyntax};

/// What to synthesize for one marker occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Interface name; `None` means `"I" + type name`.
    pub target_name: Option<String>,
    /// Modifier text in front of `interface`.
    pub modifiers: String,
    /// Output namespace; `None` means the source namespace, an empty string
    /// means no namespace declaration.
    pub namespace: Option<String>,
    /// Entries of the inheritance clause.
    pub base_interfaces: Vec<TypeSyntax>,
    /// Container declarations wrapped around the interface, outermost first,
    /// e.g. `"public static partial class Outer"`.
    pub nested_containers: Vec<String>,
    /// Include static members as `static abstract`.
    pub include_static: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            target_name: None,
            modifiers: Self::DEFAULT_MODIFIERS.to_owned(),
            namespace: None,
            base_interfaces: Vec::new(),
            nested_containers: Vec::new(),
            include_static: false,
        }
    }
}

impl SynthesisConfig {
    /// Modifiers used when the marker does not set `Modifier`.
    pub const DEFAULT_MODIFIERS: &str = "public partial";

    /// Read the named arguments of an `AutoInterface` marker.
    ///
    /// Every argument is resolved on its own; a missing or mistyped argument
    /// keeps its default.
    pub fn from_marker(marker: &Attribute) -> Self {
        Self {
            target_name: named_string(marker, "Name").map(str::to_owned),
            modifiers: named_string(marker, "Modifier")
                .unwrap_or(Self::DEFAULT_MODIFIERS)
                .to_owned(),
            namespace: named_string(marker, "Namespace").map(str::to_owned),
            base_interfaces: named_type_array(marker, "Inheritance"),
            nested_containers: named_string_array(marker, "Nested"),
            include_static: named_bool(marker, "StaticMembers").unwrap_or(false),
        }
    }

    /// The interface name for a source type called `type_name`.
    pub fn target_name<'a>(&'a self, type_name: &str) -> Cow<'a, str> {
        match &self.target_name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("I{type_name}")),
        }
    }

    /// The namespace to emit, given the source type's namespace segments.
    pub fn namespace_for(&self, source: &[String]) -> String {
        match &self.namespace {
            Some(namespace) => namespace.clone(),
            None => source.join("."),
        }
    }

    /// Does an explicit-interface qualifier refer to the synthesized
    /// interface?
    ///
    /// Only the last identifier of the qualifier is compared. With a `Name`
    /// override it must equal that name; otherwise it must be `I` followed by
    /// the type name.
    pub fn matches_qualifier(&self, qualifier: &TypeSyntax, type_name: &str) -> bool {
        let Some(identifier) = qualifier.simple_identifier() else {
            return false;
        };
        match &self.target_name {
            Some(name) => identifier == name,
            None => {
                identifier.len() == type_name.len() + 1
                    && identifier.starts_with('I')
                    && &identifier[1..] == type_name
            }
        }
    }
}
