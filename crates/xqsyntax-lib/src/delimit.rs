//! Terminal delimitation.
//!
//! Numeric literals, names and keywords are *non-delimiting*: written next to
//! each other they re-lex as a single token. [`space_requirement`] tells a
//! caller whether whitespace between two adjacent tokens can be dropped.

use serde::Serialize;

use crate::Error;
use crate::parser::cst::SyntaxKind;

/// Whether whitespace is needed between two adjacent tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpaceRequirement {
    Required,
    Optional,
}

impl std::fmt::Display for SpaceRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceRequirement::Required => write!(f, "required"),
            SpaceRequirement::Optional => write!(f, "optional"),
        }
    }
}

/// Space requirement between `left` and a directly following `right`.
///
/// Total over all kind pairs and independent of dialect. Not symmetric:
/// `name -` needs a space, `- name` does not.
pub fn space_requirement(left: SyntaxKind, right: SyntaxKind) -> SpaceRequirement {
    use SyntaxKind::*;

    let dots = matches!(right, Dot | DotDot);
    let required = (left.is_non_delimiting() && right.is_non_delimiting())
        || (left.is_numeric_literal() && dots)
        || (matches!(left, Dot | DotDot) && right.is_numeric_literal())
        || ((left == NCName || left.is_keyword()) && (dots || right == Minus));

    if required {
        SpaceRequirement::Required
    } else {
        SpaceRequirement::Optional
    }
}

/// [`space_requirement`] for token kinds named as in `SyntaxKind` (`IntegerLiteral`, `KwDiv`).
pub fn space_requirement_by_name(left: &str, right: &str) -> crate::Result<SpaceRequirement> {
    let kind = |name: &str| {
        SyntaxKind::token_from_name(name).ok_or_else(|| Error::UnknownTokenKind(name.to_string()))
    };
    Ok(space_requirement(kind(left)?, kind(right)?))
}
