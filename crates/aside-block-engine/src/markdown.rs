use aside_block_config::MarkdownConfig;
use pulldown_cmark::{Options, Parser, html};

/// Turns Markdown source into an HTML fragment.
pub trait MarkdownConverter: Send + Sync {
    fn convert(&self, content: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct PulldownConverter {
    options: Options,
}

impl Default for PulldownConverter {
    fn default() -> Self {
        Self::with_options(Options::empty())
    }
}

impl PulldownConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn from_config(config: &MarkdownConfig) -> Self {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, config.tables);
        options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, config.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, config.smart_punctuation);
        options.set(Options::ENABLE_HEADING_ATTRIBUTES, config.heading_attributes);
        Self::with_options(options)
    }

    pub fn options(&self) -> Options {
        self.options
    }
}

impl MarkdownConverter for PulldownConverter {
    fn convert(&self, content: &str) -> String {
        let parser = Parser::new_ext(content, self.options);
        let mut out = String::with_capacity(content.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
