use pantry_audit::CompletenessSchema;
use pantry_core::responses::SchemaResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `pantry schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_response(&CompletenessSchema::standard()), flags.format)
}

fn schema_response(schema: &CompletenessSchema) -> SchemaResponse {
    SchemaResponse {
        total_fields: schema.total_fields(),
        fields: schema.fields().to_vec(),
    }
}
