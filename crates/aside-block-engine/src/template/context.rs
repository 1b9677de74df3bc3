use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use aside_block_config::Config;

use super::RenderError;
use crate::markdown::{MarkdownConverter, PulldownConverter};

/// Site-wide capabilities available to tags while rendering.
#[derive(Clone, Default)]
pub struct Site {
    markdown: Option<Arc<dyn MarkdownConverter>>,
    strict_variables: bool,
}

impl Site {
    pub fn new() -> Self {
        Self::default()
    }

    /// A site with a pulldown-cmark converter and strictness taken from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_markdown_converter(Arc::new(PulldownConverter::from_config(&config.markdown)))
            .with_strict_variables(config.strict_variables)
    }

    pub fn with_markdown_converter(mut self, converter: Arc<dyn MarkdownConverter>) -> Self {
        self.markdown = Some(converter);
        self
    }

    pub fn with_strict_variables(mut self, strict: bool) -> Self {
        self.strict_variables = strict;
        self
    }

    pub fn strict_variables(&self) -> bool {
        self.strict_variables
    }

    pub fn markdown_converter(&self) -> Result<&dyn MarkdownConverter, RenderError> {
        self.markdown
            .as_deref()
            .ok_or(RenderError::ConverterNotFound("markdown"))
    }
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("markdown", &self.markdown.is_some())
            .field("strict_variables", &self.strict_variables)
            .finish()
    }
}

/// Variable bindings plus the site registry for one render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    site: Site,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            variables: HashMap::new(),
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Looks up a binding. Missing names render as empty text unless the
    /// site is strict.
    pub fn variable(&self, name: &str) -> Result<&str, RenderError> {
        match self.variables.get(name) {
            Some(value) => Ok(value.as_str()),
            None if self.site.strict_variables => {
                Err(RenderError::UndefinedVariable(name.to_string()))
            }
            None => {
                log::debug!("undefined variable '{name}' rendered as empty");
                Ok("")
            }
        }
    }
}
