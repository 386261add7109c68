//! Agent module - host-side glue around planners
//!
//! Contains the planning flow that applies a planner to each model turn.

pub mod flow;

pub use flow::PlanningFlow;
