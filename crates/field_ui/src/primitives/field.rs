use super::*;

fn inherited_width(enclosing: Option<FieldScope>) -> Signal<Option<u32>> {
    match enclosing {
        Some(scope) => scope.container_width,
        None => Signal::derive(|| None),
    }
}

#[component]
/// Orientation-aware field container.
///
/// Publishes `data-orientation`, `data-invalid`, and `data-disabled` on its own
/// element and scopes the same markers to descendants. `invalid` is always
/// caller-supplied; the field never validates anything itself.
pub fn Field(
    #[prop(default = FieldOrientation::Vertical)] orientation: FieldOrientation,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let threshold_px = use_field_ui_config().responsive_threshold_px;
    let enclosing = use_field_scope();
    let container_width = inherited_width(enclosing);
    let markers = Signal::derive(move || {
        let parent = enclosing.map(|scope| scope.markers.get());
        FieldMarkers::for_field(
            orientation,
            invalid.get(),
            disabled.get(),
            parent.as_ref(),
            container_width.get(),
            threshold_px,
        )
    });
    let scope = FieldScope::new(FieldScopeKind::Field, markers, container_width);

    view! {
        <div
            class=merge_layout_class("ui-field", layout_class)
            id=id
            role="group"
            data-ui-primitive="true"
            data-ui-kind="field"
            data-orientation=orientation.token()
            data-ui-layout=move || markers.get().layout.token()
            data-invalid=move || bool_token(markers.get().invalid)
            data-disabled=move || bool_token(markers.get().disabled)
            aria-invalid=move || markers.get().invalid.then_some("true")
        >
            {scope.provide_under(children)}
        </div>
    }
}

#[component]
/// Native fieldset grouping related fields under an optional [`FieldLegend`].
///
/// `disabled` fans out to every nested field. Spacing tightens when a choice
/// [`FieldGroup`] is a direct child.
pub fn FieldSet(
    #[prop(default = FieldGroupKind::Default)] kind: FieldGroupKind,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let enclosing = use_field_scope();
    let nested_in_group = enclosing.is_some_and(|scope| scope.kind == FieldScopeKind::FieldGroup);
    let markers = Signal::derive(move || {
        let parent = enclosing.map(|scope| scope.markers.get());
        FieldMarkers::for_group(disabled.get(), parent.as_ref())
    });
    let scope = FieldScope::new(
        FieldScopeKind::FieldSet,
        markers,
        inherited_width(enclosing),
    );
    // Children mount first so direct choice groups are counted before the gap renders.
    let body = scope.provide_under(children);

    view! {
        <fieldset
            class=merge_layout_class("ui-field-set", layout_class)
            disabled=move || markers.get().disabled
            data-ui-primitive="true"
            data-ui-kind="field-set"
            data-ui-group=kind.token()
            data-ui-gap=move || kind.gap(nested_in_group, scope.has_choice_child()).token()
            data-disabled=move || bool_token(markers.get().disabled)
        >
            {body}
        </fieldset>
    }
}

#[component]
/// Stack of fields or nested groups with consistent spacing.
///
/// Acts as the container-query host for responsive fields: pass
/// `container_width` to let descendants resolve their layout. Without it,
/// the nearest enclosing group's width is used.
pub fn FieldGroup(
    #[prop(default = FieldGroupKind::Default)] kind: FieldGroupKind,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] container_width: Option<Signal<Option<u32>>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let enclosing = use_field_scope();
    let nested_in_group = enclosing.is_some_and(|scope| scope.kind == FieldScopeKind::FieldGroup);
    let markers = Signal::derive(move || {
        let parent = enclosing.map(|scope| scope.markers.get());
        FieldMarkers::for_group(disabled.get(), parent.as_ref())
    });
    let container_width = container_width.unwrap_or_else(|| inherited_width(enclosing));
    if kind.is_choice() {
        if let Some(parent) = enclosing {
            parent.register_choice_child();
        }
    }
    let scope = FieldScope::new(FieldScopeKind::FieldGroup, markers, container_width);
    let body = scope.provide_under(children);

    view! {
        <div
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
            data-ui-slot=ui_slot
            data-ui-group=kind.token()
            data-ui-gap=move || kind.gap(nested_in_group, scope.has_choice_child()).token()
            data-ui-container-width=move || container_width.get().map(|width| width.to_string())
            data-disabled=move || bool_token(markers.get().disabled)
        >
            {body}
        </div>
    }
}

#[component]
/// Column holding a control's title and description beside the control.
///
/// Top-aligns inside horizontal fields so multi-row copy does not float.
pub fn FieldContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let markers = use_field_markers();
    let align = move || match markers.get().layout {
        FieldLayout::Horizontal => LayoutAlign::Start,
        FieldLayout::Vertical => LayoutAlign::Stretch,
    };

    view! {
        <div
            class=merge_layout_class("ui-field-content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-content"
            data-ui-align=move || align().token()
            data-ui-layout=move || markers.get().layout.token()
        >
            {children()}
        </div>
    }
}
