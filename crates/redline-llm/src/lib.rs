//! # redline-llm
//!
//! OpenAI-compatible chat-completions text producer for Redline.
//!
//! Sends the review prompt with a structured-output hint, falling back
//! through the configured response formats (`json_schema`, `json_object`,
//! unconstrained) when the endpoint rejects one. Streamed and non-streamed
//! completions are both returned as one accumulated string.

mod client;
mod error;
mod http;
pub mod request;
pub mod sse;

pub use client::OpenAiProducer;
pub use error::LlmError;
