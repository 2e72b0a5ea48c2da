//! Central schema registry for the Redline transport types.
//!
//! The `SchemaRegistry` builds JSON Schemas from redline-core types at
//! construction time using [`schemars::schema_for!`] and validates values
//! against them with `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Central store of the JSON Schemas of every type `redline` reads or writes.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, Value::from(schema_for!($ty)));
    };
}

impl SchemaRegistry {
    /// Build a registry containing the plan, document and response schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Plan contract ---
        register!(schemas, "patch_plan", redline_core::plan::PatchPlan);
        register!(schemas, "patch", redline_core::plan::Patch);

        // --- Native document ---
        register!(schemas, "document_body", redline_core::document::DocumentBody);
        register!(schemas, "edit_operation", redline_core::edits::EditOperation);

        // --- Responses ---
        register!(schemas, "lint_report", redline_core::responses::LintReport);
        register!(schemas, "plan_outcome", redline_core::responses::PlanOutcome);
        register!(
            schemas,
            "section_summary",
            redline_core::responses::SectionSummary
        );
        register!(schemas, "located_edit", redline_core::responses::LocatedEdit);
        register!(schemas, "applied_edit", redline_core::responses::AppliedEdit);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compilation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Shorthand for validating a patch plan.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn validate_plan(&self, instance: &Value) -> Result<(), SchemaError> {
        self.validate("patch_plan", instance)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
