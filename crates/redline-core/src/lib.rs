//! # redline-core
//!
//! Core types and error types for Redline.
//!
//! This crate provides the foundational types shared across all Redline crates:
//! - The patch plan data contract (`Patch`, `Preamble`, `PatchPlan`) with
//!   strict field-by-field construction from untrusted JSON
//! - The native document tree (paragraphs of text runs, nested tables)
//! - Edit operations and markup colours issued against native index ranges
//! - Field-level validation errors for untrusted JSON
//! - Response types returned as JSON by the `redline` binary

pub mod document;
pub mod edits;
pub mod errors;
pub mod plan;
pub mod responses;
