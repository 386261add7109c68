//! Model request and conversation content
//!
//! The host builds an [`LlmRequest`] per turn; planners read it and the
//! planning flow appends instructions to it.

use serde::{Deserialize, Serialize};

use crate::core::Part;

/// A turn in the conversation: a role and its ordered parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Role of the sender (user, model)
    pub role: String,
    /// Ordered parts of this turn
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user turn with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// Create a model turn from parts
    pub fn model(parts: Vec<Part>) -> Self {
        Self {
            role: "model".to_string(),
            parts,
        }
    }
}

/// A request about to be sent to the model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmRequest {
    /// Model name
    #[serde(default)]
    pub model: String,
    /// System instruction sent ahead of the contents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    /// Conversation contents
    #[serde(default)]
    pub contents: Vec<Content>,
}

impl LlmRequest {
    /// Create an empty request for a model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Append instructions to the system instruction, separated by blank lines
    pub fn append_instructions(&mut self, instructions: &[String]) {
        if instructions.is_empty() {
            return;
        }

        let joined = instructions.join("\n\n");
        self.system_instruction = Some(match self.system_instruction.take() {
            Some(existing) if !existing.is_empty() => format!("{}\n\n{}", existing, joined),
            _ => joined,
        });
    }

    /// Clear the thought flag on every text part of previous turns
    ///
    /// Returns how many parts were changed.
    pub fn remove_thoughts(&mut self) -> usize {
        let mut cleared = 0;
        for content in &mut self.contents {
            for part in &mut content.parts {
                if let Part::Text(text) = part {
                    if text.thought {
                        text.thought = false;
                        cleared += 1;
                    }
                }
            }
        }
        cleared
    }
}
