//! Structured-output schema handed to the text producer.
//!
//! The registry's `patch_plan` schema is generated for validation and carries
//! `$defs` references and `null`-able optionals, which structured-output
//! endpoints handle poorly. This is the flat, closed form of the same shape.
//! Conformance is never assumed: the response parser tolerates anything.

use serde_json::{Value, json};

/// Name under which the schema is submitted.
pub const PLAN_SCHEMA_NAME: &str = "PatchPlan";

/// Closed JSON Schema for a patch plan, suitable as a structured-output hint.
#[must_use]
pub fn plan_output_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["schema_version", "plan_id", "patches"],
        "properties": {
            "schema_version": {"const": "1.0"},
            "plan_id": {"type": "string"},
            "preamble": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "summary": {"type": "string"},
                    "considerations": {"type": "array", "items": {"type": "string"}}
                }
            },
            "patches": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["id", "section", "orig_text", "replace_text"],
                    "properties": {
                        "id": {"type": "string"},
                        "section": {"type": "string"},
                        "segment": {"type": "string"},
                        "orig_text": {"type": "string"},
                        "replace_text": {"type": "string"},
                        "rationale": {"type": "string"},
                        "topic": {"type": "string"},
                        "choice_group": {"type": "string"}
                    }
                }
            }
        }
    })
}
