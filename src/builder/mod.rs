//! Builder API for configuring a calculator engine.
//!
//! `EngineBuilder` validates settings before a `CalculatorStateMachine` is
//! created; `EngineConfig` holds the validated result.

pub mod config;
pub mod error;
pub mod machine;

pub use config::EngineConfig;
pub use error::BuildError;
pub use machine::EngineBuilder;
