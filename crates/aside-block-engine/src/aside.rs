//! The `aside` block tag.
//!
//! ```text
//! {% aside warning %}
//! Mind the **gap**.
//! {% endaside %}
//! ```
//!
//! renders its body, converts it from Markdown and wraps it as
//! `<aside class="warning"><h1>Warning</h1>...</aside>`. The parameter is
//! interpolated as-is into both the class attribute and the heading.

use crate::template::{
    BlockContentRenderer, BlockTag, Node, RenderContext, RenderError, TagRegistry,
};

#[derive(Debug)]
pub struct AsideBlock {
    kind: String,
    body: Vec<Node>,
}

impl AsideBlock {
    pub const TAG: &'static str = "aside";

    pub fn new(kind: impl Into<String>, body: Vec<Node>) -> Self {
        Self {
            kind: kind.into(),
            body,
        }
    }

    /// Factory handed to the [`TagRegistry`].
    pub fn parse(params: &str, body: Vec<Node>) -> Box<dyn BlockTag> {
        Box::new(Self::new(params, body))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }
}

impl BlockTag for AsideBlock {
    fn render(
        &self,
        renderer: &dyn BlockContentRenderer,
        context: &RenderContext,
    ) -> Result<String, RenderError> {
        let converter = context.site().markdown_converter()?;
        let content = renderer.render(&self.body, context)?;
        log::trace!("rendering aside '{}' ({} bytes)", self.kind, content.len());

        Ok(format!(
            "<aside class=\"{kind}\"><h1>{heading}</h1>{html}</aside>",
            kind = self.kind,
            heading = capitalize(&self.kind),
            html = converter.convert(&content),
        ))
    }
}

/// Uppercases the first character and leaves the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Registers the `aside` tag with the host's registry.
pub fn register(registry: &mut TagRegistry) {
    registry.register_block(AsideBlock::TAG, AsideBlock::parse);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::MarkdownConverter;
    use crate::template::{NodeRenderer, Site};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::Arc;

    /// Wraps input in a paragraph without touching it.
    struct ParagraphConverter;

    impl MarkdownConverter for ParagraphConverter {
        fn convert(&self, content: &str) -> String {
            format!("<p>{content}</p>")
        }
    }

    fn context() -> RenderContext {
        RenderContext::new(Site::new().with_markdown_converter(Arc::new(ParagraphConverter)))
    }

    #[rstest]
    #[case("warning", "Warning")]
    #[case("WARNING", "WARNING")]
    #[case("", "")]
    #[case("note to self", "Note to self")]
    #[case("éclair", "Éclair")]
    #[case("ß", "SS")]
    #[case("1st", "1st")]
    fn capitalizes_first_character_only(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }

    #[test]
    fn test_wraps_body() {
        let aside = AsideBlock::new("warning", vec![Node::Text("Careful".to_string())]);

        let out = aside.render(&NodeRenderer, &context()).unwrap();

        assert_eq!(
            out,
            r#"<aside class="warning"><h1>Warning</h1><p>Careful</p></aside>"#
        );
    }

    #[test]
    fn test_empty_kind_is_accepted() {
        let aside = AsideBlock::new("", vec![Node::Text("x".to_string())]);

        let out = aside.render(&NodeRenderer, &context()).unwrap();

        assert_eq!(out, r#"<aside class=""><h1></h1><p>x</p></aside>"#);
    }

    #[test]
    fn test_kind_is_not_escaped() {
        let aside = AsideBlock::new("a\"b<i>", Vec::new());

        let out = aside.render(&NodeRenderer, &context()).unwrap();

        assert_eq!(out, r#"<aside class="a"b<i>"><h1>A"b<i></h1><p></p></aside>"#);
    }

    #[test]
    fn test_missing_converter_is_fatal() {
        let aside = AsideBlock::new("note", vec![Node::Text("x".to_string())]);

        let err = aside
            .render(&NodeRenderer, &RenderContext::default())
            .unwrap_err();

        assert_eq!(err, RenderError::ConverterNotFound("markdown"));
    }

    #[test]
    fn test_body_variables_resolve_before_conversion() {
        let aside = AsideBlock::new(
            "note",
            vec![
                Node::Text("By ".to_string()),
                Node::Variable {
                    name: "author".to_string(),
                    offset: 0,
                },
            ],
        );
        let context = context().with_variable("author", "X");

        let out = aside.render(&NodeRenderer, &context).unwrap();

        assert_eq!(out, r#"<aside class="note"><h1>Note</h1><p>By X</p></aside>"#);
    }

    #[test]
    fn test_render_is_repeatable() {
        let aside = AsideBlock::new("tip", vec![Node::Text("Same".to_string())]);
        let context = context();

        let first = aside.render(&NodeRenderer, &context).unwrap();
        let second = aside.render(&NodeRenderer, &context).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_register_uses_aside_name() {
        let mut registry = TagRegistry::new();
        register(&mut registry);

        assert!(registry.contains("aside"));
        assert_eq!(registry.names(), vec!["aside"]);

        let tag = (registry.block("aside").unwrap())("note", Vec::new());
        let out = tag.render(&NodeRenderer, &context()).unwrap();
        assert_eq!(out, r#"<aside class="note"><h1>Note</h1><p></p></aside>"#);
    }

    #[test]
    fn test_accessors() {
        let aside = AsideBlock::new("info", vec![Node::Text("x".to_string())]);

        assert_eq!(aside.kind(), "info");
        assert_eq!(aside.body().len(), 1);
    }
}
