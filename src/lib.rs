// SPDX-License-Identifier: MIT

//! Algoverse backend: LLM-generated interactive algorithm teaching pages.
//!
//! This crate provides the backend API that turns a requested algorithm name
//! into a stored teaching page (generate-or-reuse), serves the catalog, and
//! proxies code execution to a third-party sandbox.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::{LlmClient, SandboxClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub llm: LlmClient,
    pub sandbox: SandboxClient,
}
