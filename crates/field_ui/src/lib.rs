//! Shared form-field primitive library.
//!
//! The crate owns the `Field` family of Leptos primitives and the stable
//! `data-ui-*` DOM contract consumed by the stylesheet layer. A [`Field`]
//! publishes its orientation, invalid, and disabled markers to descendants
//! through a scoped context, so labels, descriptions, and content regions adapt
//! to the nearest enclosing field without explicit prop threading.
//! [`FieldError`] renders caller-supplied validation results after
//! deduplicating them by message.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_merge;
mod config;
mod error;
mod primitives;

pub use class_merge::{join_class_tokens, ClassMerge};
pub use config::{
    use_field_ui_config, use_field_ui_context, FieldUiConfig, FieldUiContext, FieldUiProvider,
    DEFAULT_RESPONSIVE_THRESHOLD_PX,
};
pub use error::{parse_or_default, FieldConfigError, FieldContractError};
pub use primitives::{
    dedupe_errors, use_field_markers, use_field_scope, ErrorEntry, Field, FieldContent,
    FieldDescription, FieldError, FieldErrorContent, FieldGroup, FieldGroupKind, FieldLabel,
    FieldLayout, FieldLegend, FieldLegendVariant, FieldMarkers, FieldOrientation, FieldScope,
    FieldScopeKind, FieldSeparator, FieldSet, FieldTitle, LayoutAlign, LayoutGap,
};

/// Convenience imports for application crates composing forms.
pub mod prelude {
    pub use crate::{
        ErrorEntry, Field, FieldContent, FieldDescription, FieldError, FieldGroup,
        FieldGroupKind, FieldLabel, FieldLegend, FieldLegendVariant, FieldOrientation,
        FieldSeparator, FieldSet, FieldTitle, FieldUiConfig, FieldUiProvider,
    };
}
