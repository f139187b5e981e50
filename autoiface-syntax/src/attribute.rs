//! Attribute lists and the small expression language of attribute arguments.

use core::fmt;

use crate::types::{QualifiedName, TypeSyntax};

/// `[target: A, B(1)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeList {
    /// `return` in `[return: NotNull]`.
    pub target: Option<String>,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
}

impl AttributeList {
    /// A list holding the given attributes.
    pub fn new(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        Self {
            target: None,
            attributes: attributes.into_iter().collect(),
        }
    }

    /// A list holding exactly one attribute.
    pub fn single(attribute: Attribute) -> Self {
        Self::new([attribute])
    }

    /// Set the target specifier.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// A single attribute application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name as written, e.g. `AutoInterface` or
    /// `AutoInterfaceAttributes.AutoInterfaceAttribute`.
    pub name: QualifiedName,
    /// `None` when written without parentheses.
    pub arguments: Option<Vec<AttributeArgument>>,
}

impl Attribute {
    /// An attribute without an argument list.
    pub fn new(name: &str) -> Self {
        Self {
            name: QualifiedName::lossy(name),
            arguments: None,
        }
    }

    /// Append a positional argument.
    pub fn with_argument(mut self, expression: Expression) -> Self {
        self.arguments
            .get_or_insert_with(Vec::new)
            .push(AttributeArgument {
                name: None,
                expression,
            });
        self
    }

    /// Append a `Name = value` argument.
    pub fn with_named(mut self, name: impl Into<String>, expression: Expression) -> Self {
        self.arguments
            .get_or_insert_with(Vec::new)
            .push(AttributeArgument {
                name: Some(name.into()),
                expression,
            });
        self
    }

    /// Identifier of the last name segment, which is what marker matching
    /// looks at.
    pub fn identifier(&self) -> &str {
        self.name
            .last()
            .map(|segment| segment.identifier.as_str())
            .unwrap_or_default()
    }
}

/// One attribute argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeArgument {
    /// Set for `Name = value` arguments.
    pub name: Option<String>,
    /// The argument value.
    pub expression: Expression,
}

/// Attribute argument expressions.
///
/// Only the shapes that carry configuration are modelled; everything else is
/// [`Expression::Other`] and printed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A literal.
    Literal(Literal),
    /// `typeof(T)`
    TypeOf(TypeSyntax),
    /// `[a, b]`
    Collection(Vec<Expression>),
    /// `new[] { a, b }`
    ImplicitArray(Vec<Expression>),
    /// `new T[] { a, b }`
    ArrayCreation {
        /// The array type being created, `T[]`.
        array_type: TypeSyntax,
        /// The initializer, if any.
        initializer: Option<Vec<Expression>>,
    },
    /// Anything else.
    Other(String),
}

/// Literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `"text"`, stored unescaped.
    String(String),
    /// `true` / `false`
    Bool(bool),
    /// Numeric literal as written.
    Number(String),
    /// `'c'`
    Char(char),
    /// `null`
    Null,
}

impl Expression {
    /// A string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(value.into()))
    }

    /// A boolean literal.
    pub fn bool(value: bool) -> Self {
        Expression::Literal(Literal::Bool(value))
    }

    /// `typeof(ty)`
    pub fn type_of(ty: impl Into<TypeSyntax>) -> Self {
        Expression::TypeOf(ty.into())
    }

    /// Elements of any of the three array forms.
    ///
    /// `new T[]` without an initializer has no elements and gives `None`,
    /// the same as a non-array expression.
    pub fn array_elements(&self) -> Option<&[Expression]> {
        match self {
            Expression::Collection(items) | Expression::ImplicitArray(items) => Some(items),
            Expression::ArrayCreation {
                initializer: Some(items),
                ..
            } => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if let Some(target) = &self.target {
            write!(f, "{target}: ")?;
        }
        write_comma_separated(f, &self.attributes)?;
        f.write_str("]")
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(arguments) = &self.arguments {
            f.write_str("(")?;
            write_comma_separated(f, arguments)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for AttributeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} = ")?;
        }
        write!(f, "{}", self.expression)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{literal}"),
            Expression::TypeOf(ty) => write!(f, "typeof({ty})"),
            Expression::Collection(items) => {
                f.write_str("[")?;
                write_comma_separated(f, items)?;
                f.write_str("]")
            }
            Expression::ImplicitArray(items) => {
                f.write_str("new[] ")?;
                write_initializer(f, items)
            }
            Expression::ArrayCreation {
                array_type,
                initializer,
            } => {
                write!(f, "new {array_type}")?;
                if let Some(items) = initializer {
                    f.write_str(" ")?;
                    write_initializer(f, items)?;
                }
                Ok(())
            }
            Expression::Other(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(value) => {
                f.write_str("\"")?;
                for c in value.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        '\0' => f.write_str("\\0")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Literal::Bool(value) => write!(f, "{value}"),
            Literal::Number(text) => f.write_str(text),
            Literal::Char('\'') => f.write_str("'\\''"),
            Literal::Char('\\') => f.write_str("'\\\\'"),
            Literal::Char(c) => write!(f, "'{c}'"),
            Literal::Null => f.write_str("null"),
        }
    }
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_initializer(f: &mut fmt::Formatter<'_>, items: &[Expression]) -> fmt::Result {
    if items.is_empty() {
        return f.write_str("{ }");
    }
    f.write_str("{ ")?;
    write_comma_separated(f, items)?;
    f.write_str(" }")
}
