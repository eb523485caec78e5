//! The `check` command: run the pipeline, report, write nothing.

use std::path::Path;

use crate::build_model;
use crate::context::ServiceContext;
use crate::structure::canonical;
use crate::structure::{Module, ProjectDescriptor};
use crate::walker;

/// Validates a build model by running the full extraction pipeline
/// (parse, assemble, render) and printing a per-module summary.
///
/// # Errors
///
/// Returns an error string on the same failures as `extract`; the output
/// document is never written.
pub fn run_with_context(ctx: &ServiceContext, model_path: &Path) -> Result<(), String> {
    let text = ctx
        .fs
        .read_to_string(model_path)
        .map_err(|e| format!("Failed to read build model {}: {e}", model_path.display()))?;
    let model = build_model::from_yaml(&text)
        .map_err(|e| format!("Failed to parse build model {}: {e}", model_path.display()))?;

    let descriptor = walker::assemble(&model).map_err(|e| e.to_string())?;
    // Rendering is part of the contract being checked.
    let document = canonical::render(&descriptor).map_err(|e| e.to_string())?;

    println!("{}", format_report(&descriptor, document.len()));
    Ok(())
}

fn format_report(descriptor: &ProjectDescriptor, document_bytes: usize) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Model: gradle {}, agp {}, kotlin {}",
        descriptor.gradle, descriptor.agp, descriptor.kotlin
    ));
    lines.push(module_line(&descriptor.root_module));
    for module in &descriptor.modules {
        lines.push(module_line(module));
    }
    lines.push(format!(
        "Result: OK ({} module(s), {document_bytes} bytes)",
        1 + descriptor.modules.len()
    ));
    lines.join("\n")
}

fn module_line(module: &Module) -> String {
    let android = match &module.android {
        Some(config) => format!("android, {} reported flag(s)", config.build_features.len()),
        None => "no android config".to_string(),
    };
    format!(
        "  {}: {} plugin(s), {} dependencies, {android}",
        module.path,
        module.plugins.len(),
        module.dependencies.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{AndroidConfig, JavaSources, Module};

    #[test]
    fn report_lists_every_module_and_ends_with_ok() {
        let descriptor = ProjectDescriptor {
            gradle: "6.5".to_string(),
            agp: "4.1.0-beta02".to_string(),
            kotlin: "n/a".to_string(),
            properties: Vec::new(),
            root_module: Module {
                path: ":".to_string(),
                plugins: vec!["com.android.application".to_string()],
                java_sources: JavaSources { file_count: 0 },
                dependencies: Vec::new(),
                android: Some(AndroidConfig {
                    compile_sdk_version: "android-30".to_string(),
                    min_sdk_version: 24,
                    target_sdk_version: 30,
                    build_features: [("mlModelBinding".to_string(), false)]
                        .into_iter()
                        .collect(),
                }),
            },
            modules: vec![Module {
                path: ":lib".to_string(),
                plugins: vec!["java-library".to_string()],
                java_sources: JavaSources { file_count: 4 },
                dependencies: Vec::new(),
                android: None,
            }],
        };

        let report = format_report(&descriptor, 512);
        assert!(report.starts_with("Model: gradle 6.5, agp 4.1.0-beta02, kotlin n/a"));
        assert!(report.contains("  :: 1 plugin(s), 0 dependencies, android, 1 reported flag(s)"));
        assert!(report.contains("  :lib: 1 plugin(s), 0 dependencies, no android config"));
        assert!(report.ends_with("Result: OK (2 module(s), 512 bytes)"));
    }
}
