//! The patch plan data contract.
//!
//! A [`PatchPlan`] is an ordered list of proposed single-line replacements,
//! each tied to a level-2 heading of the source document. Plans arrive as
//! untrusted JSON from a text producer; [`PatchPlan::from_value`] and
//! [`Patch::from_value`] construct them strictly, reporting the first
//! offending field as a [`ValidationError`].
//!
//! Serialized keys are exactly:
//! `schema_version`, `plan_id`, `preamble.summary`, `preamble.considerations`,
//! `patches[].{id,section,segment,orig_text,replace_text,rationale,topic,choice_group}`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{FieldProblem, ValidationError};

/// Fixed literal tag carried by every plan for forward compatibility.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum SchemaVersion {
    #[default]
    #[serde(rename = "1.0")]
    V1,
}

impl SchemaVersion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "1.0",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text context attached once per plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Preamble {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub considerations: Option<Vec<String>>,
}

/// A single proposed edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Patch {
    /// Opaque identifier, unique within a plan.
    pub id: String,

    /// Exact heading line the edit belongs to, e.g. `"## 5. Service Levels"`.
    pub section: String,

    /// Advisory sub-selector for disambiguating locations within a section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,

    /// Exact line expected verbatim under `section`.
    pub orig_text: String,

    /// Exact replacement line.
    pub replace_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,

    /// Loose grouping of independent but related edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Marks mutually exclusive alternatives; at most one per group should be accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_group: Option<String>,
}

/// An ordered collection of patches plus an optional preamble.
///
/// Order is significant for display only. Duplicate or conflicting patches
/// are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatchPlan {
    #[serde(default)]
    pub schema_version: SchemaVersion,

    pub plan_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble: Option<Preamble>,

    pub patches: Vec<Patch>,
}

impl PatchPlan {
    /// A plan with no preamble and no patches.
    #[must_use]
    pub fn empty(plan_id: impl Into<String>) -> Self {
        Self {
            schema_version: SchemaVersion::V1,
            plan_id: plan_id.into(),
            preamble: None,
            patches: Vec::new(),
        }
    }

    /// Strictly construct a plan from an untrusted JSON value.
    ///
    /// `schema_version` may be absent (defaults to `"1.0"`) but must be the
    /// literal `"1.0"` when present. `plan_id` and `patches` are required, and
    /// every element of `patches` must pass [`Patch::from_value`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, naming its field path.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(value, "")?;

        let schema_version = match fields.get("schema_version") {
            None => SchemaVersion::V1,
            Some(Value::String(s)) if s == SchemaVersion::V1.as_str() => SchemaVersion::V1,
            Some(_) => {
                return Err(ValidationError::new(
                    fields.path("schema_version"),
                    FieldProblem::UnexpectedValue { expected: "\"1.0\"" },
                ));
            }
        };

        let plan_id = fields.required_str("plan_id")?;
        let preamble = match fields.get("preamble") {
            None => None,
            Some(value) => Some(Preamble::from_value(value, &fields.path("preamble"))?),
        };

        let patches = fields
            .required_array("patches")?
            .iter()
            .enumerate()
            .map(|(i, item)| Patch::from_value_at(item, &format!("patches[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            schema_version,
            plan_id,
            preamble,
            patches,
        })
    }
}

impl Preamble {
    fn from_value(value: &Value, path: &str) -> Result<Self, ValidationError> {
        let fields = Fields::of(value, path)?;
        let summary = fields.optional_str("summary")?;
        let considerations = match fields.get("considerations") {
            None => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        item.as_str().map(str::to_owned).ok_or_else(|| {
                            ValidationError::wrong_type(
                                format!("{}[{i}]", fields.path("considerations")),
                                "a string",
                            )
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(_) => {
                return Err(ValidationError::wrong_type(
                    fields.path("considerations"),
                    "an array of strings",
                ));
            }
        };

        Ok(Self {
            summary,
            considerations,
        })
    }
}

impl Patch {
    /// Strictly construct a patch from an untrusted JSON value.
    ///
    /// `id`, `section`, `orig_text` and `replace_text` must be strings. The
    /// optional fields may be absent or `null`, but must be strings otherwise.
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_at(value, "")
    }

    fn from_value_at(value: &Value, path: &str) -> Result<Self, ValidationError> {
        let fields = Fields::of(value, path)?;
        Ok(Self {
            id: fields.required_str("id")?,
            section: fields.required_str("section")?,
            segment: fields.optional_str("segment")?,
            orig_text: fields.required_str("orig_text")?,
            replace_text: fields.required_str("replace_text")?,
            rationale: fields.optional_str("rationale")?,
            topic: fields.optional_str("topic")?,
            choice_group: fields.optional_str("choice_group")?,
        })
    }
}

/// Field accessor over a JSON object that builds error paths as it goes.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    prefix: &'a str,
}

impl<'a> Fields<'a> {
    fn of(value: &'a Value, prefix: &'a str) -> Result<Self, ValidationError> {
        value.as_object().map_or_else(
            || {
                let field = if prefix.is_empty() { "$" } else { prefix };
                Err(ValidationError::wrong_type(field, "an object"))
            },
            |map| Ok(Self { map, prefix }),
        )
    }

    fn path(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.prefix)
        }
    }

    /// Present and non-null value for `name`.
    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|value| !value.is_null())
    }

    fn required_str(&self, name: &str) -> Result<String, ValidationError> {
        match self.get(name) {
            None => Err(ValidationError::missing(self.path(name))),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(ValidationError::wrong_type(self.path(name), "a string")),
        }
    }

    fn optional_str(&self, name: &str) -> Result<Option<String>, ValidationError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ValidationError::wrong_type(self.path(name), "a string")),
        }
    }

    fn required_array(&self, name: &str) -> Result<&'a Vec<Value>, ValidationError> {
        match self.get(name) {
            None => Err(ValidationError::missing(self.path(name))),
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(ValidationError::wrong_type(self.path(name), "an array")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn term_patch() -> Value {
        json!({
            "id": "p-1",
            "section": "## 1. Term",
            "orig_text": "This Agreement expires in 12 months.",
            "replace_text": "This Agreement expires in 24 months."
        })
    }

    #[test]
    fn patch_from_value_accepts_required_fields_only() {
        let patch = Patch::from_value(&term_patch()).unwrap();
        assert_eq!(patch.id, "p-1");
        assert_eq!(patch.section, "## 1. Term");
        assert!(patch.segment.is_none());
        assert!(patch.choice_group.is_none());
    }

    #[test]
    fn patch_from_value_treats_null_optionals_as_absent() {
        let mut value = term_patch();
        value["topic"] = Value::Null;
        value["rationale"] = json!("longer term");
        let patch = Patch::from_value(&value).unwrap();
        assert!(patch.topic.is_none());
        assert_eq!(patch.rationale.as_deref(), Some("longer term"));
    }

    #[rstest]
    #[case("id")]
    #[case("section")]
    #[case("orig_text")]
    #[case("replace_text")]
    fn patch_missing_required_field_is_named(#[case] field: &str) {
        let mut value = term_patch();
        value.as_object_mut().unwrap().remove(field);
        let err = Patch::from_value(&value).unwrap_err();
        assert_eq!(err, ValidationError::missing(field));
    }

    #[test]
    fn patch_rejects_non_string_id() {
        let mut value = term_patch();
        value["id"] = json!(7);
        let err = Patch::from_value(&value).unwrap_err();
        assert_eq!(err, ValidationError::wrong_type("id", "a string"));
    }

    #[test]
    fn patch_rejects_non_object() {
        let err = Patch::from_value(&json!("nope")).unwrap_err();
        assert_eq!(err.field, "$");
    }

    #[test]
    fn plan_from_value_defaults_schema_version() {
        let plan = PatchPlan::from_value(&json!({
            "plan_id": "p1",
            "patches": [term_patch()]
        }))
        .unwrap();
        assert_eq!(plan.schema_version, SchemaVersion::V1);
        assert_eq!(plan.patches.len(), 1);
        assert!(plan.preamble.is_none());
    }

    #[test]
    fn plan_rejects_other_schema_versions() {
        let err = PatchPlan::from_value(&json!({
            "schema_version": "2.0",
            "plan_id": "p1",
            "patches": []
        }))
        .unwrap_err();
        assert_eq!(err.field, "schema_version");
    }

    #[test]
    fn plan_error_points_into_the_failing_patch() {
        let mut broken = term_patch();
        broken.as_object_mut().unwrap().remove("orig_text");
        let err = PatchPlan::from_value(&json!({
            "plan_id": "p1",
            "patches": [term_patch(), broken]
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::missing("patches[1].orig_text"));
    }

    #[test]
    fn plan_requires_patches() {
        let err = PatchPlan::from_value(&json!({"plan_id": "p1"})).unwrap_err();
        assert_eq!(err, ValidationError::missing("patches"));
    }

    #[test]
    fn preamble_considerations_must_be_strings() {
        let err = PatchPlan::from_value(&json!({
            "plan_id": "p1",
            "preamble": {"summary": "s", "considerations": ["a", 3]},
            "patches": []
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::wrong_type("preamble.considerations[1]", "a string")
        );
    }

    #[test]
    fn plan_serializes_with_literal_version_and_without_absent_optionals() {
        let plan = PatchPlan {
            preamble: Some(Preamble {
                summary: Some("Tighten term".into()),
                considerations: None,
            }),
            patches: vec![Patch::from_value(&term_patch()).unwrap()],
            ..PatchPlan::empty("plan-7")
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["schema_version"], json!("1.0"));
        assert_eq!(value["preamble"], json!({"summary": "Tighten term"}));
        assert!(value["patches"][0].get("segment").is_none());
    }
}
