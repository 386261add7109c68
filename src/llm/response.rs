//! Model response as seen by the planning flow

use serde::{Deserialize, Serialize};

use crate::core::{Part, ToolCall};
use crate::llm::request::Content;

/// Response from a model turn
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Content produced by the model, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Model that generated the response
    #[serde(default)]
    pub model: String,
}

impl LlmResponse {
    /// Create a model response from parts
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            content: Some(Content::model(parts)),
            model: String::new(),
        }
    }

    /// Parts of the response, empty when there is no content
    pub fn parts(&self) -> &[Part] {
        self.content
            .as_ref()
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// Concatenated text of all parts shown to the user
    pub fn visible_text(&self) -> String {
        self.collect_text(false)
    }

    /// Concatenated text of all parts marked as thought
    pub fn thought_text(&self) -> String {
        self.collect_text(true)
    }

    /// Function calls in response order
    pub fn function_calls(&self) -> impl Iterator<Item = &ToolCall> {
        self.parts().iter().filter_map(Part::as_function_call)
    }

    fn collect_text(&self, thought: bool) -> String {
        self.parts()
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) if text.thought == thought => Some(text.text.as_str()),
                _ => None,
            })
            .collect()
    }
}
