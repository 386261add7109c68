//! Plan-reflection planner
//!
//! Asks the model to plan, act, reflect, optionally replan and only then give a
//! final answer, with every section introduced by a tag from
//! [`tags`](crate::planner::tags). On the way back, tagged narrative text is
//! marked as thought so the host can hide it from the user while keeping the
//! final answer and the tool calls visible.

use crate::core::{Part, TextPart};
use crate::llm::LlmRequest;
use crate::planner::context::{CallbackContext, ReadonlyContext};
use crate::planner::tags::{
    split_by_last_pattern, starts_with_narrative_tag, ACTION_TAG, FINAL_ANSWER_TAG, PLANNING_TAG,
    REASONING_TAG, REFLECTION_TAG, REPLANNING_TAG,
};
use crate::planner::traits::Planner;

/// Planner that enforces a reflection step in the reason-act cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanReflectionPlanner;

impl PlanReflectionPlanner {
    pub fn new() -> Self {
        Self
    }

    /// The full instruction block: seven sections separated by blank lines
    pub fn instruction() -> String {
        [
            high_level_preamble(),
            planning_preamble(),
            reasoning_preamble(),
            reflection_preamble(),
            replanning_preamble(),
            final_answer_preamble(),
            tool_code_preamble(),
        ]
        .join("\n\n")
    }

    /// Classify one text part and push what survives into `preserved`
    fn handle_text_part(&self, part: &mut TextPart, preserved: &mut Vec<Part>) {
        if part.text.contains(FINAL_ANSWER_TAG) {
            let (reasoning, final_answer) = split_by_last_pattern(&part.text, FINAL_ANSWER_TAG);
            if !reasoning.is_empty() {
                let mut reasoning_part = TextPart::new(reasoning);
                reasoning_part.mark_as_thought();
                preserved.push(Part::Text(reasoning_part));
            }
            if !final_answer.is_empty() {
                preserved.push(Part::text(final_answer));
            }
        } else {
            if starts_with_narrative_tag(&part.text) {
                part.mark_as_thought();
            }
            preserved.push(Part::Text(part.clone()));
        }
    }
}

impl Planner for PlanReflectionPlanner {
    fn build_planning_instruction(
        &self,
        _context: &ReadonlyContext,
        _request: &LlmRequest,
    ) -> Option<String> {
        let instruction = Self::instruction();
        tracing::trace!(len = instruction.len(), "Built plan-reflection instruction");
        Some(instruction)
    }

    fn process_planning_response(
        &self,
        context: &CallbackContext,
        parts: &mut [Part],
    ) -> Option<Vec<Part>> {
        if parts.is_empty() {
            return None;
        }

        let mut preserved = Vec::with_capacity(parts.len());
        let mut first_call_index = None;

        for (i, part) in parts.iter_mut().enumerate() {
            match part {
                Part::FunctionCall(call) if !call.has_name() => {
                    tracing::debug!(
                        invocation_id = %context.invocation_id,
                        index = i,
                        "Dropping function call without a name"
                    );
                }
                Part::FunctionCall(_) => {
                    preserved.push(part.clone());
                    first_call_index = Some(i);
                    break;
                }
                Part::Text(text) => self.handle_text_part(text, &mut preserved),
            }
        }

        // Calls directly following the first one are kept with it, but only
        // when something came before that first call.
        if let Some(first) = first_call_index.filter(|&i| i > 0) {
            preserved.extend(
                parts[first + 1..]
                    .iter()
                    .take_while(|part| part.is_function_call())
                    .cloned(),
            );
        }

        tracing::debug!(
            invocation_id = %context.invocation_id,
            input = parts.len(),
            preserved = preserved.len(),
            thoughts = preserved.iter().filter(|p| p.is_thought()).count(),
            "Processed planning response"
        );

        Some(preserved)
    }

    fn name(&self) -> &str {
        "plan_reflection"
    }
}

fn high_level_preamble() -> String {
    format!(
        r#"When answering the question, try to leverage the available tools to gather the information instead of your memorized knowledge.

Follow this enhanced process when answering the question:

(1) **Initial Planning Phase**: First come up with a comprehensive plan in natural language text format
(2) **Execution Phase**: Use tools to execute the plan with reasoning between tool code snippets to summarize current state and determine next steps. Tool code snippets and reasoning should be interleaved with each other
(3) **Reflection Phase**: After each major step or when encountering obstacles, reflect on the progress, effectiveness of the approach, and quality of results obtained
(4) **Replanning Phase**: Based on reflections, adjust the plan if necessary, considering new information, alternative approaches, or course corrections
(5) **Iterative Execution**: Continue with refined execution based on updated plans
(6) **Final Answer**: Return one comprehensive final answer incorporating all insights gained

Follow this structured format when answering the question:

- **(1) {PLANNING_TAG}**: The initial planning part should be under this tag
- **(2) {ACTION_TAG}**: Tool code snippets should be under this tag
- **(3) {REASONING_TAG}**: Reasoning parts should be under this tag
- **(4) {REFLECTION_TAG}**: Critical analysis of progress, results quality, approach effectiveness, and identification of potential issues or improvements
- **(5) {REPLANNING_TAG}**: Updated plans, alternative strategies, or course corrections based on reflections and new information discovered
- **(6) {FINAL_ANSWER_TAG}**: The comprehensive final answer incorporating all findings and insights

**Process Flow Guidelines:**
- Interleave ACTION_TAG and REASONING_TAG as you execute steps
- Use REFLECTION_TAG after completing significant milestones or when encountering challenges
- Follow REFLECTION_TAG with REPLANNING_TAG when adjustments to the approach are needed
- Continue the ACTION → REASONING → REFLECTION → REPLANNING cycle as necessary
- Multiple reflection-replanning cycles are encouraged for complex problems
- End with FINAL_ANSWER_TAG containing the complete, well-reasoned response"#
    )
}

fn planning_preamble() -> String {
    format!(
        "{PLANNING_TAG} Requirements:\n\
         Create a numbered plan that breaks down the user query into actionable steps. \
         Each step should specify which tools to use."
    )
}

fn reasoning_preamble() -> String {
    "Below are the requirements for the reasoning:\n\
     The reasoning makes a summary of the current trajectory based on the user query and tool outputs.\n\
     Based on the tool outputs and plan, the reasoning also comes up with instructions to the next steps, \
     making the trajectory closer to the final answer."
        .to_string()
}

fn reflection_preamble() -> String {
    format!(
        "{REFLECTION_TAG} Requirements - ABSOLUTELY MANDATORY:\n\
         After completing your actions, you MUST include this section to:\n\
         1. Evaluate if your actions achieved the intended goals\n\
         2. Identify any gaps or issues in your approach\n\
         3. Assess if you have enough information to answer the user's query\n\
         4. Determine if replanning is necessary\n\
         \n\
         This section is REQUIRED - do not proceed to final answer without reflection."
    )
}

fn replanning_preamble() -> String {
    format!(
        "{REPLANNING_TAG} Requirements (conditional):\n\
         Only if reflection reveals issues, create a revised plan and execute it with new \
         {ACTION_TAG} and {REASONING_TAG} sections."
    )
}

fn final_answer_preamble() -> String {
    format!(
        "{FINAL_ANSWER_TAG} Requirements:\n\
         Provide your final answer only after completing reflection. \
         Base your answer on execution results and reflection insights."
    )
}

fn tool_code_preamble() -> String {
    "Below are the requirements for the tool code:\n\
     \n\
     **Custom Tools:** The available tools are described in the context and can be directly used.\n\
     - Code must be valid self-contained Python snippets with no imports and no references to tools or Python libraries that are not in the context.\n\
     - You cannot use any parameters or fields that are not explicitly defined in the APIs in the context.\n\
     - The code snippets should be readable, efficient, and directly relevant to the user query and reasoning steps.\n\
     - When using the tools, you should use the library name together with the function name, e.g., vertex_search.search().\n\
     - If Python libraries are not provided in the context, NEVER write your own code other than the function calls using the provided tools."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(parts: &mut [Part]) -> Option<Vec<Part>> {
        PlanReflectionPlanner::new().process_planning_response(&CallbackContext::default(), parts)
    }

    #[test]
    fn test_empty_input_returns_none() {
        assert_eq!(process(&mut []), None);
    }

    #[test]
    fn test_instruction_has_seven_sections() {
        let instruction = PlanReflectionPlanner::instruction();
        assert!(instruction.starts_with("When answering the question"));
        assert!(instruction.contains("(6) **Final Answer**"));
        assert!(instruction.contains("/*PLANNING*/ Requirements:"));
        assert!(instruction.contains("Below are the requirements for the reasoning:"));
        assert!(instruction.contains("/*REFLECTION*/ Requirements - ABSOLUTELY MANDATORY:"));
        assert!(instruction.contains("do not proceed to final answer without reflection"));
        assert!(instruction.contains("/*REPLANNING*/ Requirements (conditional):"));
        assert!(instruction.contains("/*FINAL_ANSWER*/ Requirements:"));
        assert!(instruction.ends_with("other than the function calls using the provided tools."));
        assert!(instruction.contains("vertex_search.search()"));
    }

    #[test]
    fn test_instruction_wording() {
        let instruction = PlanReflectionPlanner::instruction();
        assert!(instruction.contains("- Interleave ACTION_TAG and REASONING_TAG as you execute steps"));
        assert!(instruction.contains("- End with FINAL_ANSWER_TAG containing the complete"));
        assert!(instruction.contains("valid self-contained Python snippets with no imports"));
        assert!(instruction.contains("- If Python libraries are not provided in the context, NEVER"));
    }

    #[test]
    fn test_instruction_lists_every_tag() {
        let instruction = PlanReflectionPlanner::instruction();
        for tag in [
            PLANNING_TAG,
            REASONING_TAG,
            ACTION_TAG,
            REFLECTION_TAG,
            REPLANNING_TAG,
            FINAL_ANSWER_TAG,
        ] {
            assert!(instruction.contains(tag), "missing {}", tag);
        }
    }

    #[test]
    fn test_instruction_ignores_context() {
        let planner = PlanReflectionPlanner::new();
        let mut request = LlmRequest::new("model-a");
        request.system_instruction = Some("be brief".to_string());

        let a = planner.build_planning_instruction(&ReadonlyContext::default(), &LlmRequest::default());
        let b = planner.build_planning_instruction(&ReadonlyContext::new("inv-1", "root"), &request);
        assert_eq!(a, b);
        assert_eq!(a, Some(PlanReflectionPlanner::instruction()));
    }

    #[test]
    fn test_prefix_tag_marks_original_in_place() {
        let mut parts = vec![Part::text("/*PLANNING*/ 1. search the docs")];
        let out = process(&mut parts).unwrap();

        assert!(parts[0].is_thought());
        assert_eq!(out, parts);
    }

    #[test]
    fn test_tag_mid_text_is_not_thought() {
        let mut parts = vec![Part::text("I will now /*REASONING*/ think")];
        let out = process(&mut parts).unwrap();
        assert!(!out[0].is_thought());
        assert!(!parts[0].is_thought());
    }

    #[test]
    fn test_final_answer_precedes_prefix_rule() {
        let mut parts = vec![Part::text("/*PLANNING*/ done /*FINAL_ANSWER*/")];
        let out = process(&mut parts).unwrap();

        assert_eq!(out, vec![Part::thought("/*PLANNING*/ done /*FINAL_ANSWER*/")]);
        // The split produces new parts; the original stays untouched.
        assert!(!parts[0].is_thought());
    }

    #[test]
    fn test_final_answer_only_tail() {
        let mut parts = vec![Part::text("/*FINAL_ANSWER*/Paris")];
        let out = process(&mut parts).unwrap();
        assert_eq!(
            out,
            vec![Part::thought("/*FINAL_ANSWER*/"), Part::text("Paris")]
        );
    }

    #[test]
    fn test_empty_text_kept_unmarked() {
        let mut parts = vec![Part::text("")];
        let out = process(&mut parts).unwrap();
        assert_eq!(out, vec![Part::text("")]);
    }

    #[test]
    fn test_call_first_skips_lookahead() {
        let mut parts = vec![
            Part::function_call("search"),
            Part::function_call("lookup"),
        ];
        let out = process(&mut parts).unwrap();
        assert_eq!(out, vec![Part::function_call("search")]);
    }

    #[test]
    fn test_only_unnamed_calls() {
        let mut parts = vec![Part::function_call(""), Part::function_call("")];
        assert_eq!(process(&mut parts), Some(vec![]));
    }

    #[test]
    fn test_lookahead_keeps_unnamed_calls() {
        let mut parts = vec![
            Part::text("/*ACTION*/"),
            Part::function_call("search"),
            Part::function_call(""),
            Part::function_call("lookup"),
        ];
        let out = process(&mut parts).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out[0].is_thought());
        assert_eq!(out[2], Part::function_call(""));
    }

    #[test]
    fn test_text_after_first_call_is_dropped() {
        let mut parts = vec![
            Part::text("/*REASONING*/ need data"),
            Part::function_call("search"),
            Part::text("/*REFLECTION*/ never seen"),
            Part::function_call("lookup"),
        ];
        let out = process(&mut parts).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], Part::function_call("search"));
        // Never visited, so never marked.
        assert!(!parts[2].is_thought());
    }

    #[test]
    fn test_planner_name() {
        assert_eq!(PlanReflectionPlanner::new().name(), "plan_reflection");
    }
}
