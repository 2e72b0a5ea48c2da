//! Serde roundtrip and JsonSchema validation tests for the transport types.

use redline_core::document::{Block, DocumentBody, TableCell};
use redline_core::edits::{EditOperation, MarkupPalette, NativeRange, TextStyle};
use redline_core::plan::{Patch, PatchPlan, Preamble, SchemaVersion};
use redline_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_patch() -> Patch {
    Patch {
        id: "sla-1".into(),
        section: "## 5. Service Levels (SLA)".into(),
        segment: Some("uptime".into()),
        orig_text: "Provider guarantees 99.0% uptime.".into(),
        replace_text: "Provider guarantees 99.9% uptime.".into(),
        rationale: Some("Market standard".into()),
        topic: Some("availability".into()),
        choice_group: Some("uptime".into()),
    }
}

fn sample_plan() -> PatchPlan {
    PatchPlan {
        schema_version: SchemaVersion::V1,
        plan_id: "plan_generated_001".into(),
        preamble: Some(Preamble {
            summary: Some("Customer-favourable SLA".into()),
            considerations: Some(vec!["Check credits".into(), "Check carve-outs".into()]),
        }),
        patches: vec![sample_patch()],
    }
}

roundtrip_and_validate!(patch_roundtrip, Patch, sample_patch());

roundtrip_and_validate!(plan_roundtrip, PatchPlan, sample_plan());

roundtrip_and_validate!(
    minimal_plan_roundtrip,
    PatchPlan,
    PatchPlan::empty("plan-empty")
);

roundtrip_and_validate!(
    lint_report_roundtrip,
    LintReport,
    LintReport {
        plan: sample_plan(),
        dropped: vec![DroppedPatch {
            id: "fees-2".into(),
            reason: RejectReason::OrigTextNotFound,
        }],
    }
);

roundtrip_and_validate!(
    applied_edit_roundtrip,
    AppliedEdit,
    AppliedEdit {
        file_id: "1AbCdEfGhIjKlMnOpQrStUvWxYz".into(),
        original_text: "12 months".into(),
        replacement_text: "24 months".into(),
        original_start: 100,
        original_end: 109,
        new_text_start: 110,
        new_text_end: 119,
    }
);

roundtrip_and_validate!(
    located_edit_roundtrip,
    LocatedEdit,
    LocatedEdit {
        segment: "12 months".into(),
        original: NativeRange::new(100, 109),
        replacement_text: "24 months".into(),
        new_text: NativeRange::new(110, 119),
        operations: vec![
            EditOperation::UpdateTextStyle {
                range: NativeRange::new(100, 109),
                style: TextStyle::removed(&MarkupPalette::default()),
            },
            EditOperation::InsertText {
                index: 109,
                text: " 24 months".into(),
            },
        ],
    }
);

roundtrip_and_validate!(
    document_body_roundtrip,
    DocumentBody,
    DocumentBody::new(vec![
        Block::SectionBreak,
        Block::text(1, "## 1. Term\n"),
        Block::table(vec![vec![TableCell::new(vec![Block::text(13, "Cap\n")])]]),
    ])
);

#[test]
fn plan_deserializes_without_schema_version() {
    let json = r#"{"plan_id":"p1","patches":[]}"#;
    let plan: PatchPlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.schema_version, SchemaVersion::V1);
}

#[test]
fn plan_schema_rejects_wrong_version_literal() {
    let schema = serde_json::to_value(schema_for!(PatchPlan)).unwrap();
    let instance = serde_json::json!({
        "schema_version": "9.9",
        "plan_id": "p1",
        "patches": []
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
