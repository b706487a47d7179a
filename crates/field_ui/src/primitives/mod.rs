//! Field containers, structural leaves, validation rendering, and their shared tokens.

use std::str::FromStr;

use leptos::*;

use crate::{
    config::{use_field_ui_config, use_field_ui_context},
    FieldContractError,
};

mod error_list;
mod field;
mod scope;
mod text;

pub use error_list::{dedupe_errors, ErrorEntry, FieldError, FieldErrorContent};
pub use field::{Field, FieldContent, FieldGroup, FieldSet};
pub use scope::{use_field_markers, use_field_scope, FieldMarkers, FieldScope, FieldScopeKind};
pub use text::{FieldDescription, FieldLabel, FieldLegend, FieldSeparator, FieldTitle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Layout axis requested by a [`Field`].
pub enum FieldOrientation {
    /// Children stack top-to-bottom at full width.
    Vertical,
    /// Children sit left-to-right, vertically centered.
    Horizontal,
    /// Vertical below the container width threshold, horizontal at or above it.
    Responsive,
}

impl Default for FieldOrientation {
    fn default() -> Self {
        Self::Vertical
    }
}

impl FieldOrientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Responsive => "responsive",
        }
    }

    /// Resolves the concrete layout axis for a container of the given width.
    ///
    /// An unmeasured container keeps responsive fields vertical.
    pub fn resolve(self, container_width: Option<u32>, threshold_px: u32) -> FieldLayout {
        match self {
            Self::Vertical => FieldLayout::Vertical,
            Self::Horizontal => FieldLayout::Horizontal,
            Self::Responsive => match container_width {
                Some(width) if width >= threshold_px => FieldLayout::Horizontal,
                _ => FieldLayout::Vertical,
            },
        }
    }
}

impl FromStr for FieldOrientation {
    type Err = FieldContractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            "responsive" => Ok(Self::Responsive),
            other => Err(FieldContractError::UnknownOrientation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Concrete axis a field renders with after responsive resolution.
pub enum FieldLayout {
    /// Stacked layout.
    Vertical,
    /// Inline layout.
    Horizontal,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self::Vertical
    }
}

impl FieldLayout {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Appearance of a [`FieldLegend`].
pub enum FieldLegendVariant {
    /// Heading-weight legend.
    Legend,
    /// Label-weight legend.
    Label,
}

impl Default for FieldLegendVariant {
    fn default() -> Self {
        Self::Legend
    }
}

impl FieldLegendVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Legend => "legend",
            Self::Label => "label",
        }
    }
}

impl FromStr for FieldLegendVariant {
    type Err = FieldContractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "legend" => Ok(Self::Legend),
            "label" => Ok(Self::Label),
            other => Err(FieldContractError::UnknownLegendVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic marker on a [`FieldSet`] or [`FieldGroup`] describing its controls.
///
/// Only selects spacing; carries no validation meaning.
pub enum FieldGroupKind {
    /// Ordinary stack of fields.
    Default,
    /// Group of checkbox-like controls.
    CheckboxGroup,
    /// Group of radio-like controls.
    RadioGroup,
}

impl Default for FieldGroupKind {
    fn default() -> Self {
        Self::Default
    }
}

impl FieldGroupKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CheckboxGroup => "checkbox-group",
            Self::RadioGroup => "radio-group",
        }
    }

    pub(crate) fn is_choice(self) -> bool {
        matches!(self, Self::CheckboxGroup | Self::RadioGroup)
    }

    /// Gap between a set's or group's children.
    ///
    /// Choice groups, and containers holding a choice group as a direct child,
    /// are tight. A plain container nested directly in a group steps down one
    /// size.
    pub fn gap(self, nested_in_group: bool, has_choice_child: bool) -> LayoutGap {
        if self.is_choice() || has_choice_child {
            LayoutGap::Sm
        } else if nested_in_group {
            LayoutGap::Md
        } else {
            LayoutGap::Lg
        }
    }
}

impl FromStr for FieldGroupKind {
    type Err = FieldContractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "default" => Ok(Self::Default),
            "checkbox-group" => Ok(Self::CheckboxGroup),
            "radio-group" => Ok(Self::RadioGroup),
            other => Err(FieldContractError::UnknownGroupKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared cross-axis alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    use_field_ui_context()
        .class_merge
        .merge(&[base, layout_class.unwrap_or_default()])
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
