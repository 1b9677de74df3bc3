//! Splits template source into text runs, `{{ variable }}` outputs and
//! `{% tag %}` markers.
//!
//! Every byte of the input lands in exactly one token, either as text or
//! inside a marker's delimiters, except for whitespace removed by Liquid's
//! whitespace control: `{%-` / `{{-` strip the whitespace before a marker and
//! `-%}` / `-}}` the whitespace after it. The dashes are not part of the
//! token text.

use super::cursor::Cursor;
use super::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Variable,
    Tag,
}

impl TokenKind {
    fn close(self) -> &'static [u8] {
        match self {
            TokenKind::Variable => b"}}",
            _ => b"%}",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Variable => "variable '{{'",
            TokenKind::Tag => "tag '{%'",
        }
    }
}

/// A lexed token. For markers, `text` is the markup between the delimiters
/// and `offset` points at the opening delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

/// Pushes `source[start..end]` as a text token, trimming whitespace on the
/// sides a neighbouring `-` marker asked for. Empty runs are dropped.
fn push_text<'a>(
    tokens: &mut Vec<Token<'a>>,
    source: &'a str,
    start: usize,
    end: usize,
    trim_start: bool,
    trim_end: bool,
) {
    let mut text = &source[start..end];
    let mut offset = start;
    if trim_start {
        let trimmed = text.trim_start();
        offset += text.len() - trimmed.len();
        text = trimmed;
    }
    if trim_end {
        text = text.trim_end();
    }
    if !text.is_empty() {
        tokens.push(Token {
            kind: TokenKind::Text,
            text,
            offset,
        });
    }
}

pub fn lex(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut cur = Cursor::new(source);
    let mut text_start = 0;
    let mut trim_next = false;

    while !cur.eof() {
        let kind = if cur.starts_with(b"{{") {
            TokenKind::Variable
        } else if cur.starts_with(b"{%") {
            TokenKind::Tag
        } else {
            cur.bump();
            continue;
        };

        let start = cur.pos();
        cur.bump_n(2);
        let inner_start = cur.pos();
        if !cur.skip_until(kind.close()) {
            return Err(ParseError::Unterminated {
                kind: kind.describe(),
                offset: start,
            });
        }

        let mut inner = &source[inner_start..cur.pos()];
        let trim_before = inner.starts_with('-');
        if trim_before {
            inner = &inner[1..];
        }
        let trim_after = inner.ends_with('-');
        if trim_after {
            inner = &inner[..inner.len() - 1];
        }

        push_text(&mut tokens, source, text_start, start, trim_next, trim_before);
        tokens.push(Token {
            kind,
            text: inner,
            offset: start,
        });
        cur.bump_n(2);
        text_start = cur.pos();
        trim_next = trim_after;
    }

    push_text(&mut tokens, source, text_start, source.len(), trim_next, false);

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(kind: TokenKind, text: &str, offset: usize) -> Token<'_> {
        Token { kind, text, offset }
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex("").unwrap(), vec![]);
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(
            lex("hello { world }").unwrap(),
            vec![token(TokenKind::Text, "hello { world }", 0)]
        );
    }

    #[test]
    fn lex_aside_block() {
        assert_eq!(
            lex("{% aside warning %}Careful{% endaside %}").unwrap(),
            vec![
                token(TokenKind::Tag, " aside warning ", 0),
                token(TokenKind::Text, "Careful", 19),
                token(TokenKind::Tag, " endaside ", 26),
            ]
        );
    }

    #[test]
    fn lex_variable_between_text() {
        assert_eq!(
            lex("Hi {{ name }}!").unwrap(),
            vec![
                token(TokenKind::Text, "Hi ", 0),
                token(TokenKind::Variable, " name ", 3),
                token(TokenKind::Text, "!", 13),
            ]
        );
    }

    #[test]
    fn lex_multibyte_text_keeps_offsets() {
        let tokens = lex("é{{x}}ü").unwrap();
        assert_eq!(
            tokens,
            vec![
                token(TokenKind::Text, "é", 0),
                token(TokenKind::Variable, "x", 2),
                token(TokenKind::Text, "ü", 7),
            ]
        );
    }

    #[test]
    fn lex_unterminated_tag() {
        assert_eq!(
            lex("text {% aside note").unwrap_err(),
            ParseError::Unterminated {
                kind: "tag '{%'",
                offset: 5,
            }
        );
    }

    #[test]
    fn lex_unterminated_variable() {
        assert!(matches!(
            lex("{{ name").unwrap_err(),
            ParseError::Unterminated { offset: 0, .. }
        ));
    }

    #[test]
    fn lex_whitespace_control_trims_neighbours() {
        assert_eq!(
            lex("a \n{%- aside note -%}\n  b").unwrap(),
            vec![
                token(TokenKind::Text, "a", 0),
                token(TokenKind::Tag, " aside note ", 3),
                token(TokenKind::Text, "b", 24),
            ]
        );
    }

    #[test]
    fn lex_whitespace_control_drops_blank_runs() {
        assert_eq!(
            lex("{{- x -}}  \n  {%- endaside %}").unwrap(),
            vec![
                token(TokenKind::Variable, " x ", 0),
                token(TokenKind::Tag, " endaside ", 14),
            ]
        );
    }

    #[test]
    fn lex_one_sided_whitespace_control() {
        assert_eq!(
            lex("a {{ x -}} b {{- y }} c").unwrap(),
            vec![
                token(TokenKind::Text, "a ", 0),
                token(TokenKind::Variable, " x ", 2),
                token(TokenKind::Text, "b", 11),
                token(TokenKind::Variable, " y ", 13),
                token(TokenKind::Text, " c", 21),
            ]
        );
    }

    #[test]
    fn all_bytes_preserved() {
        let input = "a {% aside note %}\n*b* {{ c }}\n{% endaside %} d";
        let reconstructed: String = lex(input)
            .unwrap()
            .iter()
            .map(|t| match t.kind {
                TokenKind::Text => t.text.to_string(),
                TokenKind::Variable => format!("{{{{{}}}}}", t.text),
                TokenKind::Tag => format!("{{%{}%}}", t.text),
            })
            .collect();
        assert_eq!(input, reconstructed);
    }
}
