//! Template list import and export for the editor.
//!
//! The JSON form is the same one the detection feed uses, so an exported
//! list can be pasted back in or handed to the backend unchanged.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use canvas::geom::Rect;
use canvas::template::{Template, TemplateError};

/// Size of a template added from the toolbar.
pub const NEW_TEMPLATE_SIZE: f64 = 100.0;

/// Serialize a list as pretty JSON.
///
/// # Errors
///
/// Returns the serializer error message on failure.
pub fn export_templates(templates: &[Template]) -> Result<String, String> {
    serde_json::to_string_pretty(templates).map_err(|e| e.to_string())
}

/// Parse a JSON list. Negative sizes are rejected.
///
/// # Errors
///
/// Returns the parse error message, including template validation failures.
pub fn import_templates(raw: &str) -> Result<Vec<Template>, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

/// A square template at the image origin with the first unused
/// `template N` name.
///
/// # Errors
///
/// Returns the template validation error; a square of
/// [`NEW_TEMPLATE_SIZE`] always passes.
pub fn next_template(existing: &[Template]) -> Result<Template, TemplateError> {
    let mut n = 1_usize;
    let name = loop {
        let name = format!("template {n}");
        if existing.iter().all(|t| t.name != name) {
            break name;
        }
        n += 1;
    };
    Template::untracked(name, Rect::new(0.0, 0.0, NEW_TEMPLATE_SIZE, NEW_TEMPLATE_SIZE))
}
