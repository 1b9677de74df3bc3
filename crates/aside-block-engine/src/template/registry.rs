use std::collections::HashMap;

use super::{BlockTag, Node};

/// Builds a block tag from its trimmed parameter text and parsed body.
pub type BlockFactory = fn(params: &str, body: Vec<Node>) -> Box<dyn BlockTag>;

/// Block tags known to the parser, keyed by tag name.
///
/// Owned by the host and filled in during its startup; there is no global
/// registry.
#[derive(Debug, Default, Clone)]
pub struct TagRegistry {
    blocks: HashMap<String, BlockFactory>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`. A later registration of the same
    /// name replaces the earlier one.
    pub fn register_block(&mut self, name: impl Into<String>, factory: BlockFactory) {
        let name = name.into();
        log::debug!("registering block tag '{name}'");
        self.blocks.insert(name, factory);
    }

    pub fn block(&self, name: &str) -> Option<BlockFactory> {
        self.blocks.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.blocks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
