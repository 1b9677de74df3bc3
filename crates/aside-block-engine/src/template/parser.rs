use std::sync::OnceLock;

use regex::Regex;

use super::Node;
use super::error::ParseError;
use super::lexer::{Token, TokenKind, lex};
use super::registry::TagRegistry;

/// Deepest block nesting a template may have.
pub const MAX_DEPTH: usize = 100;

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^\s*(\w+)(?:\s+(.*?))?\s*$").expect("Invalid tag regex")
    })
}

fn variable_regex() -> &'static Regex {
    static VARIABLE_REGEX: OnceLock<Regex> = OnceLock::new();
    VARIABLE_REGEX.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_.-]*)\s*$").expect("Invalid variable regex")
    })
}

/// Splits tag markup into its name and trimmed parameter text.
pub fn split_tag_markup(markup: &str) -> Option<(&str, &str)> {
    let caps = tag_regex().captures(markup)?;
    let name = caps.get(1)?.as_str();
    let params = caps.get(2).map_or("", |m| m.as_str());
    Some((name, params))
}

/// The block currently being filled, and the marker that closes it.
struct OpenBlock<'s> {
    tag: &'s str,
    end_tag: String,
    offset: usize,
}

struct Parser<'s, 'r> {
    tokens: std::vec::IntoIter<Token<'s>>,
    registry: &'r TagRegistry,
}

impl<'s> Parser<'s, '_> {
    fn parse_nodes(
        &mut self,
        open: Option<&OpenBlock<'s>>,
        depth: usize,
    ) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();

        while let Some(token) = self.tokens.next() {
            match token.kind {
                TokenKind::Text => nodes.push(Node::Text(token.text.to_string())),
                TokenKind::Variable => nodes.push(parse_variable(&token)?),
                TokenKind::Tag => {
                    let (name, params) =
                        split_tag_markup(token.text).ok_or_else(|| ParseError::MalformedTag {
                            markup: token.text.to_string(),
                            offset: token.offset,
                        })?;

                    if open.is_some_and(|block| block.end_tag == name) {
                        return Ok(nodes);
                    }

                    if let Some(factory) = self.registry.block(name) {
                        if depth >= MAX_DEPTH {
                            return Err(ParseError::NestingTooDeep {
                                offset: token.offset,
                            });
                        }
                        let inner = OpenBlock {
                            tag: name,
                            end_tag: format!("end{name}"),
                            offset: token.offset,
                        };
                        let body = self.parse_nodes(Some(&inner), depth + 1)?;
                        nodes.push(Node::Block(factory(params, body)));
                    } else if name.starts_with("end") {
                        return Err(ParseError::UnexpectedEndTag {
                            name: name.to_string(),
                            offset: token.offset,
                        });
                    } else {
                        return Err(ParseError::UnknownTag {
                            name: name.to_string(),
                            offset: token.offset,
                        });
                    }
                }
            }
        }

        match open {
            Some(block) => Err(ParseError::UnclosedBlock {
                tag: block.tag.to_string(),
                end_tag: block.end_tag.clone(),
                offset: block.offset,
            }),
            None => Ok(nodes),
        }
    }
}

fn parse_variable(token: &Token<'_>) -> Result<Node, ParseError> {
    let name = variable_regex()
        .captures(token.text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ParseError::InvalidVariable {
            expression: token.text.trim().to_string(),
            offset: token.offset,
        })?;
    Ok(Node::Variable {
        name: name.as_str().to_string(),
        offset: token.offset,
    })
}

/// Parses template source into a node tree, building registered block tags
/// as their closing markers are reached.
pub fn parse(source: &str, registry: &TagRegistry) -> Result<Vec<Node>, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        tokens: tokens.into_iter(),
        registry,
    };
    parser.parse_nodes(None, 0)
}
