//! Project-structure document types.
//!
//! These are the output vocabulary of an extraction run. Field declaration
//! order is load-bearing: the canonical serializer emits structural fields
//! in exactly this order, while `buildFeatures` (the only data-dependent
//! map) uses a `BTreeMap` so its keys always render sorted.

pub mod canonical;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical description of one evaluated project.
///
/// Assembled once per extraction run and never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    /// Host build-tool version.
    pub gradle: String,
    /// Version of the Android plugin under test.
    pub agp: String,
    /// Companion-language version, or `"n/a"` when the project has none.
    pub kotlin: String,
    /// Free-form property strings, in the order the host supplied them.
    pub properties: Vec<String>,
    /// The root module, always present.
    pub root_module: Module,
    /// Submodules, in the order the host supplied them.
    pub modules: Vec<Module>,
}

/// One module of the project tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Colon-delimited module path, unique within a descriptor.
    pub path: String,
    /// Applied plugin identifiers, insertion order, deduplicated.
    pub plugins: Vec<String>,
    /// Source-file census for the module.
    pub java_sources: JavaSources,
    /// Dependency records, declared first, then inferred.
    pub dependencies: Vec<Dependency>,
    /// Android configuration; absent for non-Android modules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidConfig>,
}

/// Source-file census.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaSources {
    /// Number of source files in the module.
    pub file_count: u64,
}

/// A single dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Library coordinate, `group:artifact:version`.
    pub library: String,
    /// How the module resolves against the library.
    pub method: ResolutionMethod,
}

/// The declared relationship between a module and a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionMethod {
    /// Exported compile + runtime dependency.
    Api,
    /// Internal compile + runtime dependency.
    Implementation,
    /// Compile-time only.
    CompileOnly,
    /// Runtime only.
    RuntimeOnly,
    /// Java annotation processor.
    AnnotationProcessor,
    /// Kotlin annotation processor.
    Kapt,
    /// Build-script classpath entry.
    Classpath,
    /// Unit-test dependency.
    TestImplementation,
    /// Instrumented-test dependency.
    AndroidTestImplementation,
}

/// Android-specific configuration of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidConfig {
    /// Compile SDK platform string, e.g. `"android-30"`.
    pub compile_sdk_version: String,
    /// Minimum supported SDK level.
    pub min_sdk_version: u32,
    /// Target SDK level.
    pub target_sdk_version: u32,
    /// Reportable feature flags only, keyed by flag name (sorted).
    pub build_features: BTreeMap<String, bool>,
}
