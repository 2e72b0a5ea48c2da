//! General review settings.

use serde::{Deserialize, Serialize};

fn default_plan_id() -> String {
    String::from("plan_generated_001")
}

fn default_section_marker() -> String {
    String::from("## ")
}

const fn default_separator() -> char {
    ' '
}

const fn default_max_doc_chars() -> usize {
    18_000
}

const fn default_stream() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Plan id stamped on generated plans that carry none.
    #[serde(default = "default_plan_id")]
    pub plan_id: String,

    /// Prefix that marks a heading line.
    #[serde(default = "default_section_marker")]
    pub section_marker: String,

    /// Inserted between struck-through text and its replacement.
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Number of document characters included in the prompt.
    #[serde(default = "default_max_doc_chars")]
    pub max_doc_chars: usize,

    #[serde(default = "default_stream")]
    pub stream: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            plan_id: default_plan_id(),
            section_marker: default_section_marker(),
            separator: default_separator(),
            max_doc_chars: default_max_doc_chars(),
            stream: default_stream(),
        }
    }
}
