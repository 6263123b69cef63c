use crate::schemas::SchemaHandle;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Describe how a raw payload deviates from a schema.
///
/// Used for diagnostics only: an empty list means the payload already has the
/// requested shape, anything else is logged and then repaired by the
/// normalizer.
pub fn shape_issues(schema: &SchemaHandle, payload: &Value) -> Vec<String> {
    let validator = match JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
    {
        Ok(validator) => validator,
        Err(err) => {
            return vec![format!(
                "failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            )];
        }
    };

    let mut details = Vec::new();
    if let Err(errors) = validator.validate(payload) {
        for (idx, error) in errors.enumerate() {
            if idx == MAX_SCHEMA_ERRORS {
                details.push("additional errors truncated".to_string());
                break;
            }
            let mut path = error.instance_path.to_string();
            if path.is_empty() {
                path = "<root>".to_string();
            }
            details.push(format!("{}: {}", path, error));
        }
    }

    details
}
