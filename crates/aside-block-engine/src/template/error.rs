use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unterminated {kind} starting at byte {offset}")]
    Unterminated { kind: &'static str, offset: usize },

    #[error("Malformed tag at byte {offset}: {markup:?}")]
    MalformedTag { markup: String, offset: usize },

    #[error("Invalid variable expression at byte {offset}: {expression:?}")]
    InvalidVariable { expression: String, offset: usize },

    #[error("Unknown tag '{name}' at byte {offset}")]
    UnknownTag { name: String, offset: usize },

    #[error("Unexpected '{name}' at byte {offset}")]
    UnexpectedEndTag { name: String, offset: usize },

    #[error("Nesting too deep at byte {offset}")]
    NestingTooDeep { offset: usize },

    #[error("'{tag}' tag opened at byte {offset} was never closed with '{end_tag}'")]
    UnclosedBlock {
        tag: String,
        end_tag: String,
        offset: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("No converter found for {0}")]
    ConverterNotFound(&'static str),

    #[error("Undefined variable '{0}'")]
    UndefinedVariable(String),
}
