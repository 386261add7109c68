//! Planning flow
//!
//! Applies a [`Planner`] to both sides of a model turn: instructions go into
//! the outgoing request, and the incoming response parts are replaced by what
//! the planner keeps.

use std::sync::Arc;

use crate::core::Config;
use crate::llm::{LlmRequest, LlmResponse};
use crate::planner::{CallbackContext, PlanReflectionPlanner, Planner, ReadonlyContext};

/// Runs a planner around a model call
#[derive(Clone)]
pub struct PlanningFlow {
    /// Planner applied to requests and responses
    planner: Arc<dyn Planner>,
    /// Whether the flow does anything
    enabled: bool,
}

impl PlanningFlow {
    /// Create an enabled flow around a planner
    pub fn new(planner: Arc<dyn Planner>) -> Self {
        Self {
            planner,
            enabled: true,
        }
    }

    /// Create a plan-reflection flow from configuration
    pub fn from_config(config: &Config) -> Self {
        let mut flow = Self::new(Arc::new(PlanReflectionPlanner::new()));
        flow.enabled = config.planner.enabled;
        flow
    }

    /// Check if the flow is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add the planning instruction to a request
    ///
    /// Thought flags from earlier turns are cleared so previous reasoning is
    /// sent back as ordinary text.
    pub fn process_request(&self, context: &ReadonlyContext, request: &mut LlmRequest) {
        if !self.enabled {
            return;
        }

        if let Some(instruction) = self.planner.build_planning_instruction(context, request) {
            request.append_instructions(&[instruction]);
        }

        let cleared = request.remove_thoughts();
        tracing::debug!(
            planner = self.planner.name(),
            cleared,
            "Applied planning instruction to request"
        );
    }

    /// Replace the response parts with what the planner keeps
    pub fn process_response(&self, context: &CallbackContext, response: &mut LlmResponse) {
        if !self.enabled {
            return;
        }

        let Some(content) = response.content.as_mut() else {
            return;
        };

        content.parts = self
            .planner
            .process_planning_response(context, &mut content.parts)
            .unwrap_or_default();
    }
}

impl std::fmt::Debug for PlanningFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanningFlow")
            .field("planner", &self.planner.name())
            .field("enabled", &self.enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Part;
    use crate::llm::Content;

    fn flow() -> PlanningFlow {
        PlanningFlow::new(Arc::new(PlanReflectionPlanner::new()))
    }

    #[test]
    fn test_request_gets_instruction() {
        let mut request = LlmRequest::new("m");
        request.system_instruction = Some("You are a research assistant.".to_string());
        request
            .contents
            .push(Content::model(vec![Part::thought("/*PLANNING*/ old plan")]));

        flow().process_request(&ReadonlyContext::default(), &mut request);

        let system = request.system_instruction.unwrap();
        assert!(system.starts_with("You are a research assistant.\n\nWhen answering"));
        assert!(!request.contents[0].parts[0].is_thought());
    }

    #[test]
    fn test_response_parts_replaced() {
        let mut response = LlmResponse::from_parts(vec![
            Part::text("/*REFLECTION*/ progress is good /*FINAL_ANSWER*/ The answer is 42"),
        ]);

        flow().process_response(&CallbackContext::default(), &mut response);

        assert_eq!(response.visible_text(), " The answer is 42");
        assert_eq!(
            response.thought_text(),
            "/*REFLECTION*/ progress is good /*FINAL_ANSWER*/"
        );
    }

    #[test]
    fn test_empty_response_parts_stay_empty() {
        let mut response = LlmResponse::from_parts(vec![]);
        flow().process_response(&CallbackContext::default(), &mut response);
        assert!(response.parts().is_empty());

        let mut response = LlmResponse::default();
        flow().process_response(&CallbackContext::default(), &mut response);
        assert!(response.content.is_none());
    }

    #[test]
    fn test_disabled_flow_is_noop() {
        let mut config = Config::default();
        config.planner.enabled = false;
        let flow = PlanningFlow::from_config(&config);
        assert!(!flow.is_enabled());

        let mut request = LlmRequest::new("m");
        flow.process_request(&ReadonlyContext::default(), &mut request);
        assert!(request.system_instruction.is_none());

        let mut response = LlmResponse::from_parts(vec![Part::text("/*PLANNING*/ x")]);
        flow.process_response(&CallbackContext::default(), &mut response);
        assert!(!response.parts()[0].is_thought());
    }
}
