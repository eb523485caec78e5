//! Canonical rendering of project-structure documents.
//!
//! The contract: identical descriptors always render identical bytes. Two
//! ordering rules make that hold. Structural objects (descriptor, module,
//! android config, dependency) emit their fields in fixed schema order:
//! the declaration order of the corresponding struct, not alphabetical.
//! Data-dependent maps (only `buildFeatures`) emit keys sorted ascending,
//! which the `BTreeMap` in [`AndroidConfig`] guarantees. Output is
//! pretty-printed with two-space indentation and no trailing newline;
//! absent optionals are omitted, empty sequences render as `[]`.

use crate::error::ExtractError;
use crate::structure::ProjectDescriptor;

/// Renders a descriptor to its canonical JSON text.
///
/// # Errors
///
/// Returns [`ExtractError::Render`] if the JSON serializer fails; nothing
/// is written anywhere by this function, so a failed render leaves no
/// partial output behind.
pub fn render(descriptor: &ProjectDescriptor) -> Result<String, ExtractError> {
    serde_json::to_string_pretty(descriptor).map_err(ExtractError::Render)
}
