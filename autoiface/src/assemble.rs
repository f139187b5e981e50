//! Text assembly of one synthesized interface.

use autoiface_syntax::{DocComment, UsingDirective};

use crate::document::OutputDocument;
use crate::projection::ProjectedMember;

/// Everything that goes into one output file, already resolved.
pub(crate) struct InterfaceText<'a> {
    pub preamble: &'a str,
    /// Using scopes, innermost namespace first, file scope last.
    pub usings: Vec<&'a [UsingDirective]>,
    /// Empty for no namespace declaration.
    pub namespace: String,
    pub containers: &'a [String],
    pub docs: Option<&'a DocComment>,
    pub header: String,
    pub members: &'a [ProjectedMember<'a>],
}

/// `{modifiers} interface {name}<T, U> : A, B`
pub(crate) fn interface_header(
    modifiers: &str,
    name: &str,
    type_parameters: &[String],
    bases: &[String],
) -> String {
    let mut header = String::new();
    if !modifiers.trim().is_empty() {
        header.push_str(modifiers.trim());
        header.push(' ');
    }
    header.push_str("interface ");
    header.push_str(name);
    if !type_parameters.is_empty() {
        header.push('<');
        header.push_str(&type_parameters.join(", "));
        header.push('>');
    }
    if !bases.is_empty() {
        header.push_str(" : ");
        header.push_str(&bases.join(", "));
    }
    header
}

pub(crate) fn write_interface(doc: &mut OutputDocument<'_>, text: &InterfaceText<'_>) {
    doc.push_raw(text.preamble);
    if !text.preamble.is_empty() && !text.preamble.ends_with('\n') {
        doc.blank_line();
    }
    doc.blank_line();
    doc.blank_line();

    let mut wrote_usings = false;
    for scope in &text.usings {
        for using in scope.iter() {
            doc.line(&using.to_string());
            wrote_usings = true;
        }
    }
    if wrote_usings {
        doc.blank_line();
    }

    if !text.namespace.is_empty() {
        doc.line(&format!("namespace {};", text.namespace));
        doc.blank_line();
    }

    for container in text.containers {
        doc.open(container);
    }

    if let Some(docs) = text.docs {
        doc.doc_comment(docs);
    }
    doc.open(&text.header);
    for member in text.members {
        if let Some(docs) = member.docs {
            doc.doc_comment(docs);
        }
        for list in member.attributes {
            doc.line(&list.to_string());
        }
        doc.line(&member.declaration);
        doc.blank_line();
    }
    doc.close();

    for _ in text.containers {
        doc.close();
    }
}
