// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod algorithm;
pub mod legacy;
pub mod user;

pub use algorithm::{Algorithm, AlgorithmMetadata, AlgorithmSummary, PracticeProblem};
pub use legacy::LegacyCode;
pub use user::User;
