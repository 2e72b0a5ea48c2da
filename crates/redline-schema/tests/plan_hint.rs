//! The structured-output hint and the generated registry schema must agree on
//! what a plan looks like.

use redline_schema::{SchemaRegistry, plan_output_schema};
use rstest::rstest;
use serde_json::{Value, json};

fn hint_accepts(instance: &Value) -> bool {
    jsonschema::validator_for(&plan_output_schema())
        .unwrap()
        .is_valid(instance)
}

#[test]
fn hint_compiles() {
    assert!(jsonschema::validator_for(&plan_output_schema()).is_ok());
}

#[rstest]
#[case::minimal(json!({"schema_version": "1.0", "plan_id": "p", "patches": []}))]
#[case::full(json!({
    "schema_version": "1.0",
    "plan_id": "p",
    "preamble": {"summary": "s", "considerations": ["a", "b"]},
    "patches": [{
        "id": "1", "section": "## 5. Service Levels", "segment": "uptime",
        "orig_text": "99.5% uptime.", "replace_text": "99.9% uptime.",
        "rationale": "r", "topic": "sla", "choice_group": "uptime"
    }]
}))]
fn both_schemas_accept_well_formed_plans(#[case] plan: Value) {
    assert!(hint_accepts(&plan));
    assert!(SchemaRegistry::new().validate_plan(&plan).is_ok());
}

#[rstest]
#[case::missing_orig(json!({
    "schema_version": "1.0", "plan_id": "p",
    "patches": [{"id": "1", "section": "## A", "replace_text": "y"}]
}))]
#[case::wrong_version(json!({"schema_version": "2.0", "plan_id": "p", "patches": []}))]
#[case::patches_not_array(json!({"schema_version": "1.0", "plan_id": "p", "patches": {}}))]
fn both_schemas_reject_malformed_plans(#[case] plan: Value) {
    assert!(!hint_accepts(&plan));
    assert!(SchemaRegistry::new().validate_plan(&plan).is_err());
}

#[test]
fn registry_exports_every_transport_type() {
    let registry = SchemaRegistry::new();
    for name in [
        "applied_edit",
        "document_body",
        "edit_operation",
        "lint_report",
        "located_edit",
        "patch",
        "patch_plan",
        "plan_outcome",
        "section_summary",
    ] {
        assert!(registry.get(name).is_some(), "missing schema: {name}");
    }
}
