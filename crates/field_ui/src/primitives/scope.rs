//! Nearest-ancestor marker scope shared by field containers and their descendants.

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Read-only state a field container publishes to its descendants.
pub struct FieldMarkers {
    /// Requested orientation of the nearest field.
    pub orientation: FieldOrientation,
    /// Orientation after responsive resolution.
    pub layout: FieldLayout,
    /// Caller-supplied validation failure flag. Never inherited.
    pub invalid: bool,
    /// Disabled flag, inherited from enclosing containers.
    pub disabled: bool,
}

impl FieldMarkers {
    /// Markers for a [`Field`] nested under `enclosing`.
    ///
    /// Orientation and `invalid` belong to the field alone. A field inside a
    /// disabled set is disabled regardless of its own flag.
    pub fn for_field(
        orientation: FieldOrientation,
        invalid: bool,
        disabled: bool,
        enclosing: Option<&FieldMarkers>,
        container_width: Option<u32>,
        threshold_px: u32,
    ) -> Self {
        Self {
            orientation,
            layout: orientation.resolve(container_width, threshold_px),
            invalid,
            disabled: disabled || enclosing.is_some_and(|parent| parent.disabled),
        }
    }

    /// Markers for a [`FieldSet`] or [`FieldGroup`] nested under `enclosing`.
    pub fn for_group(disabled: bool, enclosing: Option<&FieldMarkers>) -> Self {
        Self {
            disabled: disabled || enclosing.is_some_and(|parent| parent.disabled),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which container established a [`FieldScope`].
pub enum FieldScopeKind {
    /// A [`Field`].
    Field,
    /// A [`FieldSet`].
    FieldSet,
    /// A [`FieldGroup`].
    FieldGroup,
}

#[derive(Clone, Copy)]
/// Context handle visible to descendants of the nearest field container.
pub struct FieldScope {
    /// Container that owns the markers.
    pub kind: FieldScopeKind,
    /// Reactive markers of that container.
    pub markers: Signal<FieldMarkers>,
    /// Measured width of the nearest container-query host, when known.
    pub container_width: Signal<Option<u32>>,
    /// Number of checkbox-like or radio-like groups mounted as direct children.
    ///
    /// Spacing only. Validation markers never flow upward.
    pub choice_children: RwSignal<usize>,
}

impl FieldScope {
    pub(crate) fn new(
        kind: FieldScopeKind,
        markers: Signal<FieldMarkers>,
        container_width: Signal<Option<u32>>,
    ) -> Self {
        Self {
            kind,
            markers,
            container_width,
            choice_children: create_rw_signal(0),
        }
    }

    pub(crate) fn has_choice_child(&self) -> bool {
        self.choice_children.get() > 0
    }

    /// Counts a directly nested choice group for this container's spacing.
    pub(crate) fn register_choice_child(self) {
        if self.kind == FieldScopeKind::Field {
            return;
        }
        self.choice_children.update(|count| *count += 1);
        on_cleanup(move || {
            self.choice_children
                .try_update(|count| *count = count.saturating_sub(1));
        });
    }

    pub(crate) fn provide_under(self, children: Children) -> View {
        view! { <Provider value=self>{children()}</Provider> }.into_view()
    }
}

/// Returns the scope of the nearest enclosing field container.
pub fn use_field_scope() -> Option<FieldScope> {
    use_context::<FieldScope>()
}

/// Returns the nearest container's markers, or defaults outside any field.
pub fn use_field_markers() -> Signal<FieldMarkers> {
    match use_field_scope() {
        Some(scope) => scope.markers,
        None => Signal::derive(FieldMarkers::default),
    }
}
