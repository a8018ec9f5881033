use crate::errors::{GhError, Result};
use serde_json::Value;
use std::io::Write;

/// Write `value` as JSON indented by two spaces, followed by a newline
pub fn render_json<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write the `id` of a freshly created resource on its own line
pub fn render_id<W: Write>(out: &mut W, created: &Value) -> Result<()> {
    let id = created
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| GhError::UnexpectedResponse("created resource has no numeric id".to_string()))?;
    writeln!(out, "{}", id)?;
    Ok(())
}
