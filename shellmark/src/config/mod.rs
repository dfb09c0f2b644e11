use serde::Deserialize;

use crate::vocabulary::Vocabulary;

/// Highlighting settings, usually read from a TOML file.
///
/// ```toml
/// language = "sh"
/// preview_len = 30
/// extra_commands = ["kubectl", "helm"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Class on the `<code>` element that marks a shell block.
    pub language: String,
    /// Characters of each processed block shown in the report.
    pub preview_len: usize,
    /// Command names recognized in addition to the built-in ones.
    pub extra_commands: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: "sh".to_string(),
            preview_len: 30,
            extra_commands: Vec::new(),
        }
    }
}

impl Config {
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_extra(&self.extra_commands)
    }
}
