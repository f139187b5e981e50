//! Marker attribute names and their source definitions.
//!
//! The definitions are registered once per compilation so user code can
//! reference the markers without a package reference of its own.

/// The marker on a type that requests an interface.
pub const AUTO_INTERFACE: &str = "AutoInterface";

/// The marker on a member that keeps it out of the interface.
pub const IGNORE_AUTO_INTERFACE: &str = "IgnoreAutoInterface";

/// Visibility override markers and the access modifier each one adds, in
/// emission order.
pub const VISIBILITY_MARKERS: [(&str, &str); 5] = [
    ("AutoInterfaceVisibilityPublic", "public"),
    ("AutoInterfaceVisibilityInternal", "internal"),
    ("AutoInterfaceVisibilityProtected", "protected"),
    ("AutoInterfaceVisibilityProtectedInternal", "protected internal"),
    ("AutoInterfaceVisibilityPrivateProtected", "private protected"),
];

/// Header of every generated file.
pub const PREAMBLE: &str = "// <auto-generated/>\n#pragma warning disable\n#nullable enable annotations\n";

/// Symbol that lets a project opt out of the bundled marker definitions.
pub const EXCLUDE_SYMBOL: &str = "AUTOINTERFACE_EXCLUDE_ATTRIBUTES";

/// A fixed source registered at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateSource {
    /// Registration key.
    pub hint: &'static str,
    /// Source text.
    pub text: String,
}

const MEMBER_TARGETS: &str = "AttributeTargets.Property | AttributeTargets.Method | AttributeTargets.Event";

const AUTO_INTERFACE_BODY: &str = r#"{
    /// <summary>
    /// <para>The name of the generated interface.</para>
    /// <para>Default is "I{ClassName}".</para>
    /// </summary>
    public string Name { get; init; } = string.Empty;

    /// <summary>
    /// <para>The modifier(s) of the generated interface.</para>
    /// <para>Default is "public partial".</para>
    /// </summary>
    public string Modifier { get; init; } = "public partial";

    /// <summary>
    /// <para>The namespace of the generated interface.</para>
    /// <para>Default is the namespace of the class, an empty string means no namespace.</para>
    /// </summary>
    public string Namespace { get; init; } = string.Empty;

    /// <summary>
    /// <para>The interfaces the generated interface inherits from.</para>
    /// <para>Members already present in one of these are not generated again.</para>
    /// </summary>
    public Type[] Inheritance { get; init; } = [];

    /// <summary>
    /// <para>Declarations of the types the generated interface is nested in, outermost first.</para>
    /// <para>e.g. "public partial class Outer"</para>
    /// </summary>
    public string[] Nested { get; init; } = [];

    /// <summary>
    /// <para>Whether static members are generated as static abstract members.</para>
    /// <para>Default is false.</para>
    /// </summary>
    public bool StaticMembers { get; init; } = false;
}"#;

/// The marker definitions, stamped with this crate's name and version.
pub fn boilerplate_sources() -> Vec<BoilerplateSource> {
    let mut sources = vec![
        BoilerplateSource {
            hint: "AutoInterfaceAttribute.g.cs",
            text: attribute_source(
                "Generates an interface for the decorated class/struct.",
                "AttributeTargets.Class | AttributeTargets.Struct, AllowMultiple = true",
                "AutoInterfaceAttribute",
                AUTO_INTERFACE_BODY,
            ),
        },
        BoilerplateSource {
            hint: "IgnoreAutoInterfaceAttribute.g.cs",
            text: attribute_source(
                "The decorated member will be ignored by the generator.",
                MEMBER_TARGETS,
                "IgnoreAutoInterfaceAttribute",
                "{ }",
            ),
        },
    ];

    const VISIBILITY_HINTS: [&str; 5] = [
        "AutoInterfaceVisibilityPublic.g.cs",
        "AutoInterfaceVisibilityInternal.g.cs",
        "AutoInterfaceVisibilityProtected.g.cs",
        "AutoInterfaceVisibilityProtectedInternal.g.cs",
        "AutoInterfaceVisibilityPrivateProtected.g.cs",
    ];
    for ((class_name, modifier), hint) in VISIBILITY_MARKERS.iter().zip(VISIBILITY_HINTS) {
        sources.push(BoilerplateSource {
            hint,
            text: attribute_source(
                &format!("Adds a \"{modifier}\" access modifier to the interface member."),
                MEMBER_TARGETS,
                class_name,
                "{ }",
            ),
        });
    }
    sources
}

fn attribute_source(summary: &str, usage: &str, class_name: &str, body: &str) -> String {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    format!(
        "{PREAMBLE}

#if !{EXCLUDE_SYMBOL}

using System;

namespace AutoInterfaceAttributes;

/// <summary>
/// {summary}
/// </summary>
[AttributeUsage({usage})]
[System.CodeDom.Compiler.GeneratedCodeAttribute(\"{name}\", \"{version}\")]
internal sealed class {class_name} : Attribute {body}

#endif
"
    )
}
