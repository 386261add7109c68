//! LLM module - request and response shapes exchanged with the model
//!
//! Planners only see these types; the client that actually talks to a model
//! lives in the host.

pub mod request;
pub mod response;

pub use request::{Content, LlmRequest};
pub use response::LlmResponse;
