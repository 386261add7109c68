//! plan-reflect - Plan/Reflection Planner for Tool-Using Agents
//!
//! Instructs a model to plan, act, reflect, replan and answer using tagged
//! sections, then splits the model's response into hidden reasoning and
//! user-visible output.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **LLM**: Request and response shapes seen by planners
//! - **Planner**: The planner trait, section tags, and the plan-reflection planner
//! - **Agent**: Planning flow that applies a planner to a model turn
//! - **CLI**: Subcommand handlers for the binary
//!
//! # Usage
//!
//! ```rust
//! use plan_reflect::core::Part;
//! use plan_reflect::planner::{CallbackContext, PlanReflectionPlanner, Planner};
//!
//! let planner = PlanReflectionPlanner::new();
//! let mut parts = vec![Part::text("/*REFLECTION*/ done /*FINAL_ANSWER*/ 42")];
//! let kept = planner
//!     .process_planning_response(&CallbackContext::default(), &mut parts)
//!     .unwrap();
//!
//! assert!(kept[0].is_thought());
//! assert_eq!(kept[1].as_text(), Some(" 42"));
//! ```

pub mod agent;
pub mod cli;
pub mod core;
pub mod llm;
pub mod planner;

// Re-export commonly used items
pub use agent::PlanningFlow;
pub use core::{Config, Part, PlanReflectError, Result};
pub use planner::{PlanReflectionPlanner, Planner};
