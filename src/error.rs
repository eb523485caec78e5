//! Error types for the extraction pipeline.

use thiserror::Error;

/// Fatal extraction failures.
///
/// Extraction is all-or-nothing: any of these aborts the run before the
/// output document is written.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// An override named a build feature the registry does not recognize.
    #[error("unrecognized build feature `{flag}` in module `{module}`")]
    UnknownBuildFeature {
        /// The flag name as it appeared in the build model.
        flag: String,
        /// Path of the module carrying the override.
        module: String,
    },
    /// A dependency template fired but no plugin version was available to
    /// complete its coordinate.
    #[error(
        "build feature `{flag}` in module `{module}` injects dependencies \
         but no plugin version was supplied"
    )]
    MissingPluginVersion {
        /// The flag whose template could not be completed.
        flag: String,
        /// Path of the module being assembled.
        module: String,
    },
    /// Two modules in the same model share a path identifier.
    #[error("duplicate module path `{0}`")]
    DuplicateModulePath(String),
    /// The assembled descriptor could not be rendered to JSON.
    #[error("failed to render project structure: {0}")]
    Render(#[from] serde_json::Error),
}
