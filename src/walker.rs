//! Descriptor assembly: one `Module` record per evaluated module.
//!
//! The walker consumes the host-supplied build model and produces the
//! immutable [`ProjectDescriptor`]. For android modules it runs flag
//! resolution and dependency inference; for everything else it copies the
//! supplied facts through. Submodules keep host order.

use std::collections::BTreeSet;

use crate::build_model::{BuildModel, ModuleModel};
use crate::error::ExtractError;
use crate::features::resolver::ResolvedFeatures;
use crate::inference;
use crate::structure::{
    AndroidConfig, Dependency, JavaSources, Module, ProjectDescriptor,
};

/// Sentinel reported when the project has no companion-language version.
const NO_KOTLIN: &str = "n/a";

/// Assembles the canonical descriptor for an evaluated build model.
///
/// # Errors
///
/// Returns a configuration error for an unrecognized feature override, a
/// fired dependency template with no plugin version, or a duplicate module
/// path. On error no descriptor is produced.
pub fn assemble(model: &BuildModel) -> Result<ProjectDescriptor, ExtractError> {
    let mut seen_paths = BTreeSet::new();
    seen_paths.insert(model.root.path.clone());

    let root_module = assemble_module(&model.root, &model.agp)?;

    let mut modules = Vec::with_capacity(model.modules.len());
    for submodule in &model.modules {
        if !seen_paths.insert(submodule.path.clone()) {
            return Err(ExtractError::DuplicateModulePath(submodule.path.clone()));
        }
        modules.push(assemble_module(submodule, &model.agp)?);
    }

    Ok(ProjectDescriptor {
        gradle: model.gradle.clone(),
        agp: model.agp.clone(),
        kotlin: model.kotlin.clone().unwrap_or_else(|| NO_KOTLIN.to_string()),
        properties: model.properties.clone(),
        root_module,
        modules,
    })
}

fn assemble_module(input: &ModuleModel, plugin_version: &str) -> Result<Module, ExtractError> {
    let mut dependencies: Vec<Dependency> = input
        .dependencies
        .iter()
        .map(|d| Dependency { library: d.library.clone(), method: d.method })
        .collect();

    let android = match &input.android {
        Some(settings) => {
            let features = ResolvedFeatures::resolve(&settings.build_features, &input.path)?;
            let inferred =
                inference::inferred_dependencies(&features, plugin_version, &input.path)?;
            for dependency in inferred {
                if !dependencies.contains(&dependency) {
                    dependencies.push(dependency);
                }
            }
            Some(AndroidConfig {
                compile_sdk_version: settings.compile_sdk_version.clone(),
                min_sdk_version: settings.min_sdk_version,
                target_sdk_version: settings.target_sdk_version,
                build_features: features.reportable(),
            })
        }
        None => None,
    };

    Ok(Module {
        path: input.path.clone(),
        plugins: dedup_preserving_order(&input.plugins),
        java_sources: JavaSources { file_count: input.java_file_count },
        dependencies,
        android,
    })
}

/// Drops repeated plugin identifiers, keeping the first occurrence of each.
fn dedup_preserving_order(plugins: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(plugins.len());
    for plugin in plugins {
        if !out.contains(plugin) {
            out.push(plugin.clone());
        }
    }
    out
}
