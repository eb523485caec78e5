//! Feature flag resolution.
//!
//! Turns a module's partial override map into a tri-state view of every
//! recognized flag, and derives the subset that must appear in the module's
//! reported feature map.

use std::collections::BTreeMap;

use crate::error::ExtractError;
use crate::features::BuildFeature;

/// Resolution state of a single flag for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagState {
    /// The build configuration never set the flag; the registry default
    /// applies.
    Unset,
    /// Explicitly set to `true`.
    ExplicitTrue,
    /// Explicitly set to `false`.
    ExplicitFalse,
}

impl FlagState {
    /// Returns `true` if the flag was set explicitly, with either value.
    #[must_use]
    pub fn is_explicit(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// The resolved state of every recognized flag for one module.
///
/// Resolution is a pure function of the override map; resolving the same
/// input twice yields the same states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFeatures {
    states: BTreeMap<BuildFeature, FlagState>,
}

impl ResolvedFeatures {
    /// Resolves a module's explicit overrides against the registry.
    ///
    /// `module` is used for error context only.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::UnknownBuildFeature`] if the override map
    /// names a flag the registry does not recognize.
    pub fn resolve(
        overrides: &BTreeMap<String, bool>,
        module: &str,
    ) -> Result<Self, ExtractError> {
        let mut states: BTreeMap<BuildFeature, FlagState> =
            BuildFeature::ALL.into_iter().map(|f| (f, FlagState::Unset)).collect();

        for (name, &value) in overrides {
            let feature = BuildFeature::from_name(name).ok_or_else(|| {
                ExtractError::UnknownBuildFeature {
                    flag: name.clone(),
                    module: module.to_string(),
                }
            })?;
            let state =
                if value { FlagState::ExplicitTrue } else { FlagState::ExplicitFalse };
            states.insert(feature, state);
        }

        Ok(Self { states })
    }

    /// Returns the resolution state of a flag.
    #[must_use]
    pub fn state(&self, feature: BuildFeature) -> FlagState {
        self.states.get(&feature).copied().unwrap_or(FlagState::Unset)
    }

    /// Returns the flag's effective value: the explicit override when
    /// present, the registry default otherwise.
    #[must_use]
    pub fn effective(&self, feature: BuildFeature) -> bool {
        match self.state(feature) {
            FlagState::Unset => feature.platform_default(),
            FlagState::ExplicitTrue => true,
            FlagState::ExplicitFalse => false,
        }
    }

    /// Returns the reported feature map for this module.
    ///
    /// A flag is included iff it was set explicitly or the registry marks it
    /// always-observed. An explicit override equal to the registry default
    /// is still reported.
    #[must_use]
    pub fn reportable(&self) -> BTreeMap<String, bool> {
        BuildFeature::ALL
            .into_iter()
            .filter(|&f| self.state(f).is_explicit() || f.always_observed())
            .map(|f| (f.name().to_string(), self.effective(f)))
            .collect()
    }
}
