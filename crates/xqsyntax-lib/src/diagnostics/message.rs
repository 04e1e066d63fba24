use rowan::TextRange;
use serde::{Serialize, Serializer};

/// Diagnostic kinds ordered by priority (highest priority first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    // Lexical
    BadCharacter,
    UnclosedComment,
    UnclosedStringLiteral,
    UnclosedXmlComment,
    UnclosedCData,
    UnclosedProcessingInstruction,
    UnclosedPragma,
    InvalidEntityReference,
    MissingWhitespace,
    IncompleteExponent,

    // Something required is absent
    ExpectedExpression,
    ExpectedToken,
    ExpectedName,
    ExpectedVariableName,
    ExpectedSequenceType,
    ExpectedItemType,
    ExpectedNodeTest,
    ExpectedStringLiteral,
    ExpectedClause,
    UnclosedDelimiter,
    UnclosedElement,

    // Something present does not belong
    UnexpectedToken,
    InvalidAxis,
    MismatchedEndTag,
    NonAssociativeOperator,
    ReservedFunctionName,

    // Valid in another dialect
    UnsupportedSyntax,

    NestingTooDeep,
}

impl DiagnosticKind {
    /// W3C error code reported for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEntityReference => "XQST0090",
            Self::NestingTooDeep => "XPDY0130",
            _ => "XPST0003",
        }
    }

    pub fn is_lexical(&self) -> bool {
        *self <= Self::IncompleteExponent
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::BadCharacter => "unrecognized character",
            Self::UnclosedComment => "unclosed comment",
            Self::UnclosedStringLiteral => "unclosed string literal",
            Self::UnclosedXmlComment => "unclosed XML comment",
            Self::UnclosedCData => "unclosed CDATA section",
            Self::UnclosedProcessingInstruction => "unclosed processing instruction",
            Self::UnclosedPragma => "unclosed pragma",
            Self::InvalidEntityReference => "invalid character or entity reference",
            Self::MissingWhitespace => "missing whitespace",
            Self::IncompleteExponent => "incomplete exponent",

            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedToken => "missing token",
            Self::ExpectedName => "expected a name",
            Self::ExpectedVariableName => "expected a variable name",
            Self::ExpectedSequenceType => "expected a sequence type",
            Self::ExpectedItemType => "expected an item type",
            Self::ExpectedNodeTest => "expected a node test",
            Self::ExpectedStringLiteral => "expected a string literal",
            Self::ExpectedClause => "expected a clause",
            Self::UnclosedDelimiter => "unclosed delimiter",
            Self::UnclosedElement => "unclosed element",

            Self::UnexpectedToken => "unexpected token",
            Self::InvalidAxis => "invalid axis",
            Self::MismatchedEndTag => "end tag does not match start tag",
            Self::NonAssociativeOperator => "operator is not associative",
            Self::ReservedFunctionName => "reserved function name",

            Self::UnsupportedSyntax => "syntax not supported by this dialect",

            Self::NestingTooDeep => "expression nested too deeply",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ExpectedToken => "expected {}".to_string(),
            Self::UnexpectedToken => "unexpected {}".to_string(),
            Self::UnclosedDelimiter => "missing closing {}".to_string(),
            Self::UnclosedElement => "missing end tag for `<{}>`".to_string(),
            Self::MismatchedEndTag => "end tag does not match start tag `<{}>`".to_string(),
            Self::InvalidAxis => "`{}` is not an axis".to_string(),
            Self::ReservedFunctionName => "`{}` is a reserved function name".to_string(),
            Self::UnsupportedSyntax => "{}".to_string(),
            Self::MissingWhitespace => "missing whitespace between {}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// Secondary location of a diagnostic, such as where an unclosed delimiter opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_text_range")]
    pub range: TextRange,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

/// A syntax error with its kind, location and message.
///
/// Every `Error` node in a tree has a `ParseError` at the same range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub kind: DiagnosticKind,
    pub message: String,
    #[serde(serialize_with = "serialize_text_range")]
    pub range: TextRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedInfo>,
}

impl ParseError {
    pub fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            range,
            related: None,
        }
    }

    pub fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

fn serialize_text_range<S: Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error[{}] at {}..{}: {}",
            self.code(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(related) = &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
