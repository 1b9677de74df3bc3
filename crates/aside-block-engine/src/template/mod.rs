//! # Host template seams
//!
//! The pieces a block tag needs from the engine that hosts it:
//!
//! - [`TagRegistry`] maps tag names to factories. The host fills it during
//!   startup and hands it to the parser.
//! - [`BlockTag`] is what a factory returns. It renders itself given a
//!   [`BlockContentRenderer`] for its body and a [`RenderContext`].
//! - [`NodeRenderer`] is the stock body renderer: text verbatim, variables
//!   from the context, nested blocks recursively.
//!
//! ```text
//! source ─lex→ tokens ─parse(registry)→ Vec<Node> ─render(context)→ String
//! ```
//!
//! Only `{{ name }}` outputs and registered block tags are understood;
//! there are no filters, loops or conditionals.

mod context;
mod cursor;
mod error;
pub mod lexer;
pub mod parser;
mod registry;

use std::fmt::Debug;

pub use context::{RenderContext, Site};
pub use error::{ParseError, RenderError};
pub use registry::{BlockFactory, TagRegistry};

/// A parsed template node.
#[derive(Debug)]
pub enum Node {
    Text(String),
    Variable { name: String, offset: usize },
    Block(Box<dyn BlockTag>),
}

/// A block tag instance built by the parser from one `{% name ... %}` ...
/// `{% endname %}` pair.
pub trait BlockTag: Debug + Send + Sync {
    fn render(
        &self,
        renderer: &dyn BlockContentRenderer,
        context: &RenderContext,
    ) -> Result<String, RenderError>;
}

/// Evaluates a block's body against a context.
pub trait BlockContentRenderer {
    fn render(&self, nodes: &[Node], context: &RenderContext) -> Result<String, RenderError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NodeRenderer;

impl BlockContentRenderer for NodeRenderer {
    fn render(&self, nodes: &[Node], context: &RenderContext) -> Result<String, RenderError> {
        let mut out = String::new();
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Variable { name, .. } => out.push_str(context.variable(name)?),
                Node::Block(block) => out.push_str(&block.render(self, context)?),
            }
        }
        Ok(out)
    }
}

/// A parsed template, ready to render any number of times.
#[derive(Debug)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    pub fn parse(source: &str, registry: &TagRegistry) -> Result<Self, ParseError> {
        Ok(Self {
            nodes: parser::parse(source, registry)?,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn render(&self, context: &RenderContext) -> Result<String, RenderError> {
        NodeRenderer.render(&self.nodes, context)
    }
}
