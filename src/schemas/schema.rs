use schemars::schema::RootSchema;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

use crate::types::Itinerary;

/// Cached JSON schema describing the itinerary shape the model is asked for.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    pub fn from_root_schema(schema_name: &'static str, root: RootSchema) -> Self {
        let schema_json = serde_json::to_value(root).unwrap_or_else(|err| {
            tracing::warn!(
                target: "trip_planner::schema",
                schema = schema_name,
                error = %err,
                "schema serialization failed; falling back to permissive schema"
            );
            Value::Bool(true)
        });

        Self {
            schema_name,
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }
}

/// Schema for a full itinerary, generated once from the Rust types.
pub fn itinerary_schema() -> &'static SchemaHandle {
    static HANDLE: OnceLock<SchemaHandle> = OnceLock::new();
    HANDLE.get_or_init(|| {
        SchemaHandle::from_root_schema("Itinerary", schemars::schema_for!(Itinerary))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_schema_is_array_of_days() {
        let schema = itinerary_schema().schema_json();
        assert_eq!(schema["type"], "array");
        assert!(schema["definitions"]["Day"].is_object());
        assert!(schema["definitions"]["Activity"].is_object());
        assert_eq!(itinerary_schema().schema_name(), "Itinerary");
    }
}
