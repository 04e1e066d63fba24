//! JSON view of a parse: the tree with byte ranges plus diagnostics.

use rowan::NodeOrToken;
use serde::Serialize;
use xqsyntax_lib::{Parse, ParseError, SyntaxNode};

#[derive(Debug, Serialize)]
pub struct JsonParse<'p> {
    pub tree: JsonElement,
    pub errors: &'p [ParseError],
}

#[derive(Debug, Serialize)]
pub struct JsonElement {
    pub kind: String,
    pub start: u32,
    pub end: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonElement>,
}

impl<'p> JsonParse<'p> {
    pub fn new(parse: &'p Parse, trivia: bool) -> Self {
        Self {
            tree: node(&parse.syntax(), trivia),
            errors: parse.errors(),
        }
    }
}

fn node(node: &SyntaxNode, trivia: bool) -> JsonElement {
    let range = node.text_range();
    let children = node
        .children_with_tokens()
        .filter_map(|child| match child {
            NodeOrToken::Node(n) => Some(self::node(&n, trivia)),
            NodeOrToken::Token(t) if trivia || !t.kind().is_trivia() => {
                let range = t.text_range();
                Some(JsonElement {
                    kind: format!("{:?}", t.kind()),
                    start: range.start().into(),
                    end: range.end().into(),
                    text: Some(t.text().to_string()),
                    children: Vec::new(),
                })
            }
            NodeOrToken::Token(_) => None,
        })
        .collect();
    JsonElement {
        kind: format!("{:?}", node.kind()),
        start: range.start().into(),
        end: range.end().into(),
        text: None,
        children,
    }
}

/// Pretty-printed JSON for `parse`.
pub fn render(parse: &Parse, trivia: bool) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonParse::new(parse, trivia))
}
