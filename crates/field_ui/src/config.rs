//! Library configuration and the provider that scopes it to a subtree.

use std::str::FromStr;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{parse_or_default, ClassMerge, FieldConfigError, FieldContractError};

/// Default container width, in CSS pixels, at which responsive fields switch to
/// a horizontal layout.
pub const DEFAULT_RESPONSIVE_THRESHOLD_PX: u32 = 448;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables shared by every field primitive under a [`FieldUiProvider`].
pub struct FieldUiConfig {
    /// Container width at or above which responsive fields lay out horizontally.
    pub responsive_threshold_px: u32,
    /// Panic on contract violations in debug builds instead of falling back.
    pub strict_contracts: bool,
}

impl Default for FieldUiConfig {
    fn default() -> Self {
        Self {
            responsive_threshold_px: DEFAULT_RESPONSIVE_THRESHOLD_PX,
            strict_contracts: false,
        }
    }
}

impl FieldUiConfig {
    /// Parses and validates a JSON config payload. Missing keys take defaults.
    pub fn from_json(raw: &str) -> Result<Self, FieldConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        if self.responsive_threshold_px == 0 {
            return Err(FieldConfigError::ZeroThreshold);
        }
        Ok(())
    }

    /// Parses a prop token from markup or data, honoring `strict_contracts`.
    pub fn parse_token<T>(&self, raw: &str) -> T
    where
        T: FromStr<Err = FieldContractError> + Default,
    {
        parse_or_default(raw, self.strict_contracts)
    }
}

#[derive(Debug, Clone, Default)]
/// Context value installed by [`FieldUiProvider`].
pub struct FieldUiContext {
    /// Active configuration.
    pub config: FieldUiConfig,
    /// Class composition helper used by every primitive.
    pub class_merge: ClassMerge,
}

#[component]
/// Scopes configuration and the class merge helper to its children.
///
/// Primitives rendered outside any provider use [`FieldUiContext::default`].
/// An invalid config is logged and replaced with the defaults.
pub fn FieldUiProvider(
    #[prop(optional)] config: Option<FieldUiConfig>,
    #[prop(optional)] class_merge: Option<ClassMerge>,
    children: Children,
) -> impl IntoView {
    let config = match config {
        Some(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                logging::warn!("field ui config rejected: {err}");
                FieldUiConfig::default()
            }
        },
        None => FieldUiConfig::default(),
    };
    let context = FieldUiContext {
        config,
        class_merge: class_merge.unwrap_or_default(),
    };

    view! { <Provider value=context>{children()}</Provider> }
}

/// Returns the nearest [`FieldUiContext`], or the defaults outside a provider.
pub fn use_field_ui_context() -> FieldUiContext {
    use_context::<FieldUiContext>().unwrap_or_default()
}

/// Returns the active [`FieldUiConfig`].
pub fn use_field_ui_config() -> FieldUiConfig {
    use_field_ui_context().config
}
