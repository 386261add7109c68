//! Shared types used across plan-reflect modules
//!
//! Contains response parts and tool calls.

use serde::{Deserialize, Serialize};

/// One atomic piece of a model response: either free text or a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Free text, optionally marked as internal thought
    Text(TextPart),
    /// Reference to a tool the model wants to invoke
    FunctionCall(ToolCall),
}

impl Part {
    /// Create a plain (visible) text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextPart::new(text))
    }

    /// Create a text part already marked as thought
    pub fn thought(text: impl Into<String>) -> Self {
        let mut part = TextPart::new(text);
        part.mark_as_thought();
        Self::Text(part)
    }

    /// Create a function call part with empty arguments
    pub fn function_call(name: impl Into<String>) -> Self {
        Self::FunctionCall(ToolCall::new(name, serde_json::json!({})))
    }

    /// Get the text if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(part) => Some(&part.text),
            Part::FunctionCall(_) => None,
        }
    }

    /// Get the call if this is a function call part
    pub fn as_function_call(&self) -> Option<&ToolCall> {
        match self {
            Part::FunctionCall(call) => Some(call),
            Part::Text(_) => None,
        }
    }

    /// Whether this part is a function call
    pub fn is_function_call(&self) -> bool {
        matches!(self, Part::FunctionCall(_))
    }

    /// Whether this part is text marked as thought
    pub fn is_thought(&self) -> bool {
        matches!(self, Part::Text(part) if part.thought)
    }
}

/// A text part of a model response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPart {
    /// Text content
    pub text: String,
    /// Whether this text is internal reasoning hidden from the user
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub thought: bool,
}

impl TextPart {
    /// Create a new visible text part
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            thought: false,
        }
    }

    /// Mark as thought. Empty text is left untouched.
    pub fn mark_as_thought(&mut self) {
        if !self.text.is_empty() {
            self.thought = true;
        }
    }
}

/// A tool call made by the LLM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to invoke
    #[serde(default)]
    pub name: String,
    /// JSON arguments for the tool
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Whether the call names a tool
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}
