//! Build-feature flag registry.
//!
//! The registry is the single authority for which feature flags exist, what
//! each flag's platform default is, and whether a flag is reported in every
//! extraction regardless of explicit state. Defaults track the 4.x line of
//! the Android Gradle plugin.

pub mod resolver;

use serde::{Deserialize, Serialize};

/// A feature flag recognized by the android `buildFeatures` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildFeature {
    /// AIDL interface compilation.
    Aidl,
    /// Generation of the `BuildConfig` class.
    BuildConfig,
    /// Jetpack Compose support.
    Compose,
    /// Data binding (layout expression) support.
    DataBinding,
    /// ML model binding code generation.
    MlModelBinding,
    /// Prefab native dependency consumption.
    Prefab,
    /// Prefab native dependency publishing.
    PrefabPublishing,
    /// RenderScript compilation.
    RenderScript,
    /// Generation of resource values from the DSL.
    ResValues,
    /// Shader compilation.
    Shaders,
    /// View binding class generation.
    ViewBinding,
}

impl BuildFeature {
    /// Every recognized flag, in lexicographic name order.
    pub const ALL: [Self; 11] = [
        Self::Aidl,
        Self::BuildConfig,
        Self::Compose,
        Self::DataBinding,
        Self::MlModelBinding,
        Self::Prefab,
        Self::PrefabPublishing,
        Self::RenderScript,
        Self::ResValues,
        Self::Shaders,
        Self::ViewBinding,
    ];

    /// Returns the flag name as it appears in build configurations and in
    /// the output document.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aidl => "aidl",
            Self::BuildConfig => "buildConfig",
            Self::Compose => "compose",
            Self::DataBinding => "dataBinding",
            Self::MlModelBinding => "mlModelBinding",
            Self::Prefab => "prefab",
            Self::PrefabPublishing => "prefabPublishing",
            Self::RenderScript => "renderScript",
            Self::ResValues => "resValues",
            Self::Shaders => "shaders",
            Self::ViewBinding => "viewBinding",
        }
    }

    /// Looks up a flag by its configuration name.
    ///
    /// Returns `None` for names the registry does not recognize; callers
    /// treat that as a configuration error rather than ignoring the entry.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|feature| feature.name() == name)
    }

    /// Effective value when the build configuration never sets the flag.
    #[must_use]
    pub fn platform_default(self) -> bool {
        matches!(self, Self::Aidl | Self::BuildConfig | Self::RenderScript | Self::ResValues)
    }

    /// Whether the flag is reported in every extraction.
    ///
    /// Exactly one flag (`mlModelBinding`) carries this marker.
    #[must_use]
    pub fn always_observed(self) -> bool {
        matches!(self, Self::MlModelBinding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_are_sorted_and_unique() {
        let names: Vec<&str> = BuildFeature::ALL.iter().map(|f| f.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn exactly_one_flag_is_always_observed() {
        let observed: Vec<BuildFeature> =
            BuildFeature::ALL.into_iter().filter(|f| f.always_observed()).collect();
        assert_eq!(observed, vec![BuildFeature::MlModelBinding]);
    }

    #[test]
    fn from_name_round_trips_every_flag() {
        for feature in BuildFeature::ALL {
            assert_eq!(BuildFeature::from_name(feature.name()), Some(feature));
        }
    }

    #[test]
    fn from_name_rejects_unknown_and_miscased_names() {
        assert_eq!(BuildFeature::from_name("jniLibs"), None);
        assert_eq!(BuildFeature::from_name("viewbinding"), None);
        assert_eq!(BuildFeature::from_name(""), None);
    }

    #[test]
    fn platform_defaults_match_the_agp_4x_line() {
        assert!(BuildFeature::Aidl.platform_default());
        assert!(BuildFeature::BuildConfig.platform_default());
        assert!(BuildFeature::RenderScript.platform_default());
        assert!(BuildFeature::ResValues.platform_default());
        assert!(!BuildFeature::Compose.platform_default());
        assert!(!BuildFeature::DataBinding.platform_default());
        assert!(!BuildFeature::MlModelBinding.platform_default());
        assert!(!BuildFeature::Prefab.platform_default());
        assert!(!BuildFeature::PrefabPublishing.platform_default());
        assert!(!BuildFeature::Shaders.platform_default());
        assert!(!BuildFeature::ViewBinding.platform_default());
    }

    #[test]
    fn serde_names_match_registry_names() {
        for feature in BuildFeature::ALL {
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{}\"", feature.name()));
        }
    }
}
