//! Dependency side effects of enabled feature flags.
//!
//! Some build features pull libraries into the module when enabled. The
//! mapping is a static table; the injected coordinates are versioned with
//! the plugin under test, so the result is a deterministic function of
//! (flag states, plugin version).

use crate::error::ExtractError;
use crate::features::resolver::ResolvedFeatures;
use crate::features::BuildFeature;
use crate::structure::{Dependency, ResolutionMethod};

/// One library a flag injects, minus the version suffix.
struct DependencyTemplate {
    feature: BuildFeature,
    group_artifact: &'static str,
    method: ResolutionMethod,
}

/// Flag → injected-dependency table. Applies whenever the flag's effective
/// value is true, explicit or defaulted.
const TEMPLATES: &[DependencyTemplate] = &[
    DependencyTemplate {
        feature: BuildFeature::ViewBinding,
        group_artifact: "com.android.databinding:viewbinding",
        method: ResolutionMethod::Api,
    },
    DependencyTemplate {
        feature: BuildFeature::DataBinding,
        group_artifact: "androidx.databinding:databinding-compiler",
        method: ResolutionMethod::AnnotationProcessor,
    },
    DependencyTemplate {
        feature: BuildFeature::DataBinding,
        group_artifact: "com.android.databinding:adapters",
        method: ResolutionMethod::Api,
    },
    DependencyTemplate {
        feature: BuildFeature::DataBinding,
        group_artifact: "com.android.databinding:baseLibrary",
        method: ResolutionMethod::Api,
    },
    DependencyTemplate {
        feature: BuildFeature::DataBinding,
        group_artifact: "com.android.databinding:library",
        method: ResolutionMethod::Api,
    },
];

/// Computes the dependencies implied by a module's effective flag values.
///
/// The result is sorted lexicographically ascending by library coordinate,
/// independent of flag declaration or processing order. `module` is used
/// for error context only.
///
/// # Errors
///
/// Returns [`ExtractError::MissingPluginVersion`] when a template fires but
/// `plugin_version` is blank, leaving no way to complete the coordinate.
pub fn inferred_dependencies(
    features: &ResolvedFeatures,
    plugin_version: &str,
    module: &str,
) -> Result<Vec<Dependency>, ExtractError> {
    let mut dependencies = Vec::new();

    for template in TEMPLATES {
        if !features.effective(template.feature) {
            continue;
        }
        if plugin_version.trim().is_empty() {
            return Err(ExtractError::MissingPluginVersion {
                flag: template.feature.name().to_string(),
                module: module.to_string(),
            });
        }
        dependencies.push(Dependency {
            library: format!("{}:{plugin_version}", template.group_artifact),
            method: template.method,
        });
    }

    dependencies.sort_by(|a, b| a.library.cmp(&b.library));
    Ok(dependencies)
}
