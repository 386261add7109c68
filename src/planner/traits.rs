//! Planner trait for plugging reasoning strategies into the host
//!
//! A planner shapes both sides of a model turn: it contributes instructions to
//! the outgoing request and rewrites the parts of the incoming response.

use crate::core::Part;
use crate::llm::LlmRequest;
use crate::planner::context::{CallbackContext, ReadonlyContext};

/// Trait for planning strategies
pub trait Planner: Send + Sync {
    /// Build the instruction appended to the system instruction of `request`
    ///
    /// Returning `None` leaves the request untouched.
    fn build_planning_instruction(
        &self,
        context: &ReadonlyContext,
        request: &LlmRequest,
    ) -> Option<String>;

    /// Rewrite the parts of a model response
    ///
    /// Implementations may mutate `parts` in place. `None` means there is
    /// nothing to keep.
    fn process_planning_response(
        &self,
        context: &CallbackContext,
        parts: &mut [Part],
    ) -> Option<Vec<Part>>;

    /// Get the planner name
    fn name(&self) -> &str;
}
