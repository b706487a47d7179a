//! Typed errors for caller contract violations and configuration parsing.

use std::str::FromStr;

use leptos::logging;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A prop value outside the closed set a primitive accepts.
pub enum FieldContractError {
    /// Orientation token is not `vertical`, `horizontal`, or `responsive`.
    #[error("unknown field orientation `{0}`")]
    UnknownOrientation(String),
    /// Legend variant token is not `legend` or `label`.
    #[error("unknown field legend variant `{0}`")]
    UnknownLegendVariant(String),
    /// Group marker token is not `default`, `checkbox-group`, or `radio-group`.
    #[error("unknown field group kind `{0}`")]
    UnknownGroupKind(String),
}

#[derive(Debug, Error)]
/// Failure loading a [`crate::FieldUiConfig`].
pub enum FieldConfigError {
    /// The payload is not valid configuration JSON.
    #[error("field ui config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// Responsive layouts need a positive container width threshold.
    #[error("responsive threshold must be greater than zero")]
    ZeroThreshold,
}

/// Parses a token, falling back to the type's default on a contract violation.
///
/// With `strict` set, debug builds panic instead so the bad call site surfaces
/// during development. Release builds always log and fall back.
pub fn parse_or_default<T>(raw: &str, strict: bool) -> T
where
    T: FromStr<Err = FieldContractError> + Default,
{
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(err) => {
            if strict && cfg!(debug_assertions) {
                panic!("{err}");
            }
            logging::warn!("{err}; using default");
            T::default()
        }
    }
}
