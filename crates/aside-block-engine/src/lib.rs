pub mod aside;
pub mod markdown;
pub mod template;

// Re-export key types for easier usage
pub use aside::{AsideBlock, capitalize, register};
pub use markdown::{MarkdownConverter, PulldownConverter};
pub use template::{
    BlockContentRenderer, BlockFactory, BlockTag, Node, NodeRenderer, ParseError, RenderContext,
    RenderError, Site, TagRegistry, Template,
};
