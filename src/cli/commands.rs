//! CLI commands
//!
//! Each subcommand produces the text the binary prints.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::agent::PlanningFlow;
use crate::core::config::OutputFormat;
use crate::core::{Config, Part, PlanReflectError, Result};
use crate::llm::LlmResponse;
use crate::planner::{CallbackContext, PlanReflectionPlanner, ReadonlyContext};

/// Print the planning instruction
pub fn instruction() -> String {
    PlanReflectionPlanner::instruction()
}

/// Read a response document from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            PlanReflectError::with_context(format!("Failed to read {}", path.display()), e)
        }),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| PlanReflectError::with_context("Failed to read stdin", e))?;
            Ok(input)
        }
    }
}

/// Parse a response document: a full response object or a bare array of parts
pub fn parse_response(input: &str) -> Result<LlmResponse> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    if value.is_array() {
        let parts: Vec<Part> = serde_json::from_value(value)?;
        Ok(LlmResponse::from_parts(parts))
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

/// Run a response document through the planning flow and render it
pub fn process(input: &str, config: &Config) -> Result<String> {
    let mut response = parse_response(input)?;

    let flow = PlanningFlow::from_config(config);
    let context = CallbackContext::new(ReadonlyContext::new("cli", "plan-reflect"));
    flow.process_response(&context, &mut response);

    match config.output.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => Ok(render_text(&response, config.output.show_thoughts)),
    }
}

/// Render a processed response for a terminal
pub fn render_text(response: &LlmResponse, show_thoughts: bool) -> String {
    let mut output = String::new();

    for part in response.parts() {
        match part {
            Part::Text(text) if text.thought => {
                if show_thoughts {
                    output.push_str(&format!("[thought] {}\n", text.text.trim()));
                }
            }
            Part::Text(text) => output.push_str(&text.text),
            Part::FunctionCall(call) => {
                output.push_str(&format!("\n-> {}({})\n", call.name, call.arguments));
            }
        }
    }

    output
}

/// Show the default config, or write it to the config file
pub fn config(init: bool) -> Result<String> {
    if !init {
        return Ok(Config::default_config_toml());
    }

    if Config::config_exists() {
        return Err(PlanReflectError::config(format!(
            "Config already exists at {}",
            Config::config_file().display()
        )));
    }

    let path = Config::default().save()?;
    Ok(format!("Wrote default config to {}", path.display()))
}
