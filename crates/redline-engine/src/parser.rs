//! Recovery of a patch plan from unreliable generated text.
//!
//! Generated output may be valid JSON, JSON wrapped in prose, JSON cut off by
//! a stream limit, or garbage. Parsing never fails: the worst case is a plan
//! with no patches. Recovery proceeds in stages:
//!
//! 1. strict JSON parse of the whole text;
//! 2. strict parse of the span from the first `{` to the last `}`;
//! 3. otherwise an empty envelope carrying the fallback plan id.
//!
//! The recovered object gets the fallback `plan_id` if it has none, and is
//! then constructed strictly. If that fails, patches are constructed one by
//! one and malformed elements are skipped.
//!
//! [`parse_plan`] always lints the result against the source document before
//! returning it.

use redline_core::plan::{Patch, PatchPlan};
use serde_json::{Map, Value};

use crate::lint::PlanVerifier;

/// Parse and verify generated text against `doc_text`.
///
/// Never fails. Only patches whose section and original line exist in
/// `doc_text` are returned.
#[must_use]
pub fn parse_plan(raw_text: &str, fallback_plan_id: &str, doc_text: &str) -> PatchPlan {
    parse_plan_with(raw_text, fallback_plan_id, &PlanVerifier::new(doc_text))
}

/// [`parse_plan`] with a prebuilt verifier (e.g. a non-default section marker).
#[must_use]
pub fn parse_plan_with(
    raw_text: &str,
    fallback_plan_id: &str,
    verifier: &PlanVerifier<'_>,
) -> PatchPlan {
    verifier.lint(&recover_plan(raw_text, fallback_plan_id))
}

/// Recover a plan from `raw_text` without verifying it.
///
/// Never fails; see the module docs for the recovery stages.
#[must_use]
pub fn recover_plan(raw_text: &str, fallback_plan_id: &str) -> PatchPlan {
    let mut object = extract_object(raw_text).unwrap_or_else(|| {
        tracing::warn!(
            len = raw_text.len(),
            "no JSON object recoverable from generated text"
        );
        Map::new()
    });

    object
        .entry("plan_id")
        .or_insert_with(|| Value::String(fallback_plan_id.to_string()));

    let value = Value::Object(object);
    match PatchPlan::from_value(&value) {
        Ok(plan) => plan,
        Err(error) => {
            tracing::debug!(%error, "plan envelope invalid; salvaging patches individually");
            salvage_patches(&value, fallback_plan_id)
        }
    }
}

/// First JSON object recoverable from `raw_text`.
fn extract_object(raw_text: &str) -> Option<Map<String, Value>> {
    let value = serde_json::from_str::<Value>(raw_text).ok().or_else(|| {
        let start = raw_text.find('{')?;
        let end = raw_text.rfind('}')?;
        if end < start {
            return None;
        }
        tracing::debug!(start, end, "strict parse failed; retrying on brace span");
        serde_json::from_str::<Value>(&raw_text[start..=end]).ok()
    })?;

    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Build a plan from whichever patches construct cleanly.
fn salvage_patches(value: &Value, fallback_plan_id: &str) -> PatchPlan {
    let plan_id = value
        .get("plan_id")
        .and_then(Value::as_str)
        .unwrap_or(fallback_plan_id);

    let items = value
        .get("patches")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    let patches: Vec<Patch> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match Patch::from_value(item) {
            Ok(patch) => Some(patch),
            Err(error) => {
                tracing::debug!(index = i, %error, "skipping malformed patch");
                None
            }
        })
        .collect();

    PatchPlan {
        patches,
        ..PatchPlan::empty(plan_id)
    }
}
