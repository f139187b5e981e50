//! Type references as written in source.

use core::fmt;
use core::str::FromStr;

/// The syntactic shape of a type reference.
///
/// Nothing here is resolved: `int` and `System.Int32` are different values.
/// Resolution is the job of a symbol resolver in the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSyntax {
    /// A possibly qualified, possibly generic name such as `List<T>` or
    /// `global::System.IO.Stream`.
    Name(QualifiedName),
    /// `T[]`, `T[,]`, ...
    Array {
        /// Element type.
        element: Box<TypeSyntax>,
        /// Number of dimensions, at least one.
        rank: usize,
    },
    /// `T?`
    Nullable(Box<TypeSyntax>),
    /// `T*`
    Pointer(Box<TypeSyntax>),
    /// `(int, string name)`
    Tuple(Vec<TupleElement>),
    /// Text the parser could not make sense of, kept as written.
    Verbatim(String),
}

/// A dotted name with an optional `alias::` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// `global` in `global::System.String`.
    pub alias: Option<String>,
    /// Dotted segments, never empty.
    pub segments: Vec<NameSegment>,
}

/// One segment of a [`QualifiedName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameSegment {
    /// Identifier of the segment.
    pub identifier: String,
    /// Generic arguments, empty when the segment is not generic.
    pub type_arguments: Vec<TypeSyntax>,
}

/// One element of a tuple type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleElement {
    /// Element type.
    pub ty: TypeSyntax,
    /// Optional element name.
    pub name: Option<String>,
}

impl TypeSyntax {
    /// Parse the textual form of a type.
    pub fn parse(text: &str) -> Result<Self, TypeParseError> {
        let mut parser = Parser { src: text, pos: 0 };
        parser.skip_ws();
        if parser.at_end() {
            return Err(TypeParseError::Empty);
        }
        let ty = parser.parse_type()?;
        parser.skip_ws();
        match parser.peek() {
            None => Ok(ty),
            Some(found) => Err(TypeParseError::UnexpectedChar {
                found,
                offset: parser.pos,
            }),
        }
    }

    /// A single-segment, non-generic name.
    pub fn simple(identifier: impl Into<String>) -> Self {
        TypeSyntax::Name(QualifiedName::simple(identifier))
    }

    /// Returns `true` for the `void` keyword.
    pub fn is_void(&self) -> bool {
        match self {
            TypeSyntax::Name(name) => {
                name.alias.is_none()
                    && matches!(name.segments.as_slice(), [segment]
                        if segment.identifier == "void" && segment.type_arguments.is_empty())
            }
            _ => false,
        }
    }

    /// Identifier of the last name segment, if this is a name.
    ///
    /// `MyCode.ITest<int>` gives `ITest`.
    pub fn simple_identifier(&self) -> Option<&str> {
        match self {
            TypeSyntax::Name(name) => name.last().map(|s| s.identifier.as_str()),
            _ => None,
        }
    }
}

impl QualifiedName {
    /// A name made of one plain identifier.
    pub fn simple(identifier: impl Into<String>) -> Self {
        Self {
            alias: None,
            segments: vec![NameSegment {
                identifier: identifier.into(),
                type_arguments: Vec::new(),
            }],
        }
    }

    /// Parse a dotted name. Anything that is not a plain name is kept as a
    /// single segment holding the whole text.
    pub fn lossy(text: &str) -> Self {
        match TypeSyntax::parse(text) {
            Ok(TypeSyntax::Name(name)) => name,
            _ => Self::simple(text.trim()),
        }
    }

    /// The last segment.
    pub fn last(&self) -> Option<&NameSegment> {
        self.segments.last()
    }

    /// Total number of generic arguments across all segments.
    pub fn arity(&self) -> usize {
        self.segments.iter().map(|s| s.type_arguments.len()).sum()
    }
}

impl FromStr for TypeSyntax {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for TypeSyntax {
    /// Parses `text`, falling back to [`TypeSyntax::Verbatim`].
    fn from(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|_| TypeSyntax::Verbatim(text.trim().to_owned()))
    }
}

impl From<String> for TypeSyntax {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<QualifiedName> for TypeSyntax {
    fn from(name: QualifiedName) -> Self {
        TypeSyntax::Name(name)
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSyntax::Name(name) => write!(f, "{name}"),
            TypeSyntax::Array { element, rank } => {
                write!(f, "{element}[")?;
                for _ in 1..*rank {
                    f.write_str(",")?;
                }
                f.write_str("]")
            }
            TypeSyntax::Nullable(inner) => write!(f, "{inner}?"),
            TypeSyntax::Pointer(inner) => write!(f, "{inner}*"),
            TypeSyntax::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element.ty)?;
                    if let Some(name) = &element.name {
                        write!(f, " {name}")?;
                    }
                }
                f.write_str(")")
            }
            TypeSyntax::Verbatim(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "{alias}::")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for NameSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)?;
        write_type_list(f, &self.type_arguments)
    }
}

/// Writes `<A, B>`, or nothing for an empty list.
pub(crate) fn write_type_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(">")
}

/// Error returned by [`TypeSyntax::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeParseError {
    /// The input was empty or whitespace.
    Empty,
    /// A character that cannot appear at this position.
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Byte offset into the input.
        offset: usize,
    },
    /// The input ended in the middle of a type.
    UnexpectedEnd,
    /// Parenthesized single type, which is not a tuple.
    SingleElementTuple {
        /// Byte offset of the opening parenthesis.
        offset: usize,
    },
}

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeParseError::Empty => write!(f, "empty type"),
            TypeParseError::UnexpectedChar { found, offset } => {
                write!(f, "unexpected character `{found}` at offset {offset}")
            }
            TypeParseError::UnexpectedEnd => write!(f, "unexpected end of type"),
            TypeParseError::SingleElementTuple { offset } => {
                write!(
                    f,
                    "tuple at offset {offset} must have at least two elements"
                )
            }
        }
    }
}

impl core::error::Error for TypeParseError {}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        self.skip_ws();
        if self.src[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> TypeParseError {
        match self.peek() {
            Some(found) => TypeParseError::UnexpectedChar {
                found,
                offset: self.pos,
            },
            None => TypeParseError::UnexpectedEnd,
        }
    }

    fn at_identifier(&mut self) -> bool {
        self.skip_ws();
        self.peek()
            .is_some_and(|c| c == '_' || c == '@' || c.is_alphabetic())
    }

    fn identifier(&mut self) -> Result<String, TypeParseError> {
        if !self.at_identifier() {
            return Err(self.unexpected());
        }
        let start = self.pos;
        self.bump();
        while self
            .peek()
            .is_some_and(|c| c == '_' || c.is_alphanumeric())
        {
            self.bump();
        }
        Ok(self.src[start..self.pos].to_owned())
    }

    fn parse_type(&mut self) -> Result<TypeSyntax, TypeParseError> {
        self.skip_ws();
        let mut ty = if self.peek() == Some('(') {
            self.parse_tuple()?
        } else {
            TypeSyntax::Name(self.parse_name()?)
        };

        loop {
            self.skip_ws();
            match self.peek() {
                Some('?') => {
                    self.bump();
                    ty = TypeSyntax::Nullable(Box::new(ty));
                }
                Some('*') => {
                    self.bump();
                    ty = TypeSyntax::Pointer(Box::new(ty));
                }
                Some('[') => {
                    self.bump();
                    let mut rank = 1;
                    while self.eat(',') {
                        rank += 1;
                    }
                    self.expect(']')?;
                    ty = TypeSyntax::Array {
                        element: Box::new(ty),
                        rank,
                    };
                }
                _ => return Ok(ty),
            }
        }
    }

    fn parse_name(&mut self) -> Result<QualifiedName, TypeParseError> {
        let first = self.identifier()?;
        let (alias, first) = if self.eat_str("::") {
            (Some(first), self.identifier()?)
        } else {
            (None, first)
        };

        let mut segments = vec![self.parse_segment(first)?];
        while self.eat('.') {
            let identifier = self.identifier()?;
            segments.push(self.parse_segment(identifier)?);
        }
        Ok(QualifiedName { alias, segments })
    }

    fn parse_segment(&mut self, identifier: String) -> Result<NameSegment, TypeParseError> {
        let mut type_arguments = Vec::new();
        if self.eat('<') {
            loop {
                type_arguments.push(self.parse_type()?);
                if self.eat('>') {
                    break;
                }
                self.expect(',')?;
            }
        }
        Ok(NameSegment {
            identifier,
            type_arguments,
        })
    }

    fn parse_tuple(&mut self) -> Result<TypeSyntax, TypeParseError> {
        let offset = self.pos;
        self.expect('(')?;
        let mut elements = Vec::new();
        loop {
            let ty = self.parse_type()?;
            let name = if self.at_identifier() {
                Some(self.identifier()?)
            } else {
                None
            };
            elements.push(TupleElement { ty, name });
            if self.eat(')') {
                break;
            }
            self.expect(',')?;
        }
        if elements.len() < 2 {
            return Err(TypeParseError::SingleElementTuple { offset });
        }
        Ok(TypeSyntax::Tuple(elements))
    }
}
