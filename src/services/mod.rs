// SPDX-License-Identifier: MIT

//! Services module - LLM, prompt, extraction and sandbox logic.

pub mod extract;
pub mod llm;
pub mod prompts;
pub mod sandbox;

pub use extract::{clean_output, extract_metadata, parse_checker_decision, CheckerDecision};
pub use llm::{LlmClient, ModelProfile};
pub use sandbox::SandboxClient;
