//! Server-side HTML rendering with Tera.
//!
//! Templates are embedded into the binary at compile time and loaded into a
//! single Tera instance with inheritance chains built up front, so a broken
//! template fails at startup rather than on the first request.

use include_dir::{Dir, include_dir};
use tera::Tera;

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Build the Tera engine from the embedded templates directory
pub fn build_templates() -> Result<Tera, String> {
    let mut tera = Tera::default();

    let mut templates = Vec::new();
    for entry in TEMPLATES_DIR.files() {
        let path = entry.path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("invalid template path: {}", path.to_string_lossy()))?;
        let content = String::from_utf8_lossy(entry.contents()).into_owned();
        templates.push((name, content));
    }
    tera.add_raw_templates(templates)
        .map_err(|e| format!("failed to add templates: {}", e))?;

    tera.build_inheritance_chains()
        .map_err(|e| format!("failed to build template inheritance chains: {}", e))?;

    Ok(tera)
}
