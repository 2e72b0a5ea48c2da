//! # redline-schema
//!
//! JSON Schema generation, validation, and registry for Redline.
//!
//! This crate provides:
//! - `SchemaRegistry`: the JSON Schemas of every transport type
//! - Validation of plan files before they are linted (`redline lint`)
//! - The structured-output hint handed to the text producer
//! - Schema export (`redline schema`)
//!
//! ## Architecture
//!
//! Transport types are defined in `redline-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation layer.

mod error;
pub mod hint;
pub mod registry;

pub use error::SchemaError;
pub use hint::{PLAN_SCHEMA_NAME, plan_output_schema};
pub use registry::SchemaRegistry;
