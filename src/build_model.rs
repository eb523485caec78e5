//! Evaluated build model: the input side of an extraction.
//!
//! The host build tool evaluates the project and hands the core a plain
//! data snapshot: version strings, properties, and one entry per module
//! with its plugins, source census, declared dependencies, and android
//! settings. The core never parses build scripts or walks source trees;
//! everything here arrives already resolved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::structure::ResolutionMethod;

/// Snapshot of one evaluated project, as supplied by the host build tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildModel {
    /// Host build-tool version.
    pub gradle: String,
    /// Version of the Android plugin under test.
    pub agp: String,
    /// Companion-language version; absent when the project has none.
    #[serde(default)]
    pub kotlin: Option<String>,
    /// Free-form property strings, in host order.
    #[serde(default)]
    pub properties: Vec<String>,
    /// The root module.
    pub root: ModuleModel,
    /// Submodules, in host order.
    #[serde(default)]
    pub modules: Vec<ModuleModel>,
}

/// One evaluated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleModel {
    /// Colon-delimited module path (`":"` for the root).
    pub path: String,
    /// Applied plugin identifiers, in application order.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Number of source files found by the host.
    #[serde(default)]
    pub java_file_count: u64,
    /// Dependencies declared in the build configuration.
    #[serde(default)]
    pub dependencies: Vec<DeclaredDependency>,
    /// Android settings; absent for non-Android modules.
    #[serde(default)]
    pub android: Option<AndroidModel>,
}

/// A dependency as declared by the build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    /// Library coordinate, `group:artifact:version`.
    pub library: String,
    /// Resolution method for the declaration.
    pub method: ResolutionMethod,
}

/// Android settings of one evaluated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidModel {
    /// Compile SDK platform string, e.g. `"android-30"`.
    pub compile_sdk_version: String,
    /// Minimum supported SDK level.
    pub min_sdk_version: u32,
    /// Target SDK level.
    pub target_sdk_version: u32,
    /// Explicit feature-flag overrides only; flags the configuration never
    /// set do not appear here.
    #[serde(default)]
    pub build_features: BTreeMap<String, bool>,
}

/// Parses a build model from its YAML text.
///
/// # Errors
///
/// Returns a formatted error string when the document is not valid YAML or
/// does not match the model schema.
pub fn from_yaml(text: &str) -> Result<BuildModel, String> {
    serde_yaml::from_str(text).map_err(|e| format!("invalid build model: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_android_model() {
        let yaml = r#"
gradle: "6.5"
agp: "4.1.0-beta02"
root:
  path: ":"
  plugins: [com.android.application]
  android:
    compileSdkVersion: android-30
    minSdkVersion: 24
    targetSdkVersion: 30
    buildFeatures:
      aidl: false
"#;
        let model = from_yaml(yaml).unwrap();
        assert_eq!(model.gradle, "6.5");
        assert_eq!(model.kotlin, None);
        assert!(model.properties.is_empty());
        assert!(model.modules.is_empty());
        assert_eq!(model.root.path, ":");
        assert_eq!(model.root.java_file_count, 0);

        let android = model.root.android.as_ref().unwrap();
        assert_eq!(android.compile_sdk_version, "android-30");
        assert_eq!(android.min_sdk_version, 24);
        assert_eq!(android.build_features.get("aidl"), Some(&false));
    }

    #[test]
    fn parses_submodules_and_declared_dependencies() {
        let yaml = r#"
gradle: "6.5"
agp: "4.1.0-beta02"
kotlin: "1.4.0"
properties:
  - android.useAndroidX=true
root:
  path: ":"
  plugins: [com.android.application]
  android:
    compileSdkVersion: android-30
    minSdkVersion: 24
    targetSdkVersion: 30
modules:
  - path: ":lib"
    plugins: [java-library]
    javaFileCount: 7
    dependencies:
      - { library: "junit:junit:4.13", method: testImplementation }
      - { library: "com.google.guava:guava:28.1-jre", method: api }
"#;
        let model = from_yaml(yaml).unwrap();
        assert_eq!(model.kotlin.as_deref(), Some("1.4.0"));
        assert_eq!(model.properties, vec!["android.useAndroidX=true"]);
        assert_eq!(model.modules.len(), 1);

        let lib = &model.modules[0];
        assert_eq!(lib.path, ":lib");
        assert_eq!(lib.java_file_count, 7);
        assert!(lib.android.is_none());
        assert_eq!(lib.dependencies.len(), 2);
        assert_eq!(lib.dependencies[0].method, ResolutionMethod::TestImplementation);
    }

    #[test]
    fn rejects_an_unknown_resolution_method() {
        let yaml = r#"
gradle: "6.5"
agp: "4.1.0-beta02"
root:
  path: ":"
  dependencies:
    - { library: "junit:junit:4.13", method: linkOnly }
"#;
        let err = from_yaml(yaml).unwrap_err();
        assert!(err.contains("invalid build model"));
    }

    #[test]
    fn rejects_non_yaml_input() {
        assert!(from_yaml("{ not yaml: [").is_err());
    }
}
