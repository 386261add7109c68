//! Planner module - reasoning strategies plugged into the host
//!
//! A [`Planner`] contributes prompt instructions and post-processes model
//! responses. [`PlanReflectionPlanner`] is the plan, act, reflect, replan,
//! answer strategy.

pub mod context;
pub mod plan_reflection;
pub mod tags;
pub mod traits;

pub use context::{CallbackContext, ReadonlyContext};
pub use plan_reflection::PlanReflectionPlanner;
pub use traits::Planner;
