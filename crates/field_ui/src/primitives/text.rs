use super::*;

#[component]
/// Label for a field's control.
///
/// Dims when the nearest field is disabled and reflects its invalid marker.
pub fn FieldLabel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] for_id: Option<String>,
    children: Children,
) -> impl IntoView {
    let markers = use_field_markers();

    view! {
        <label
            class=merge_layout_class("ui-field-label", layout_class)
            for=for_id
            data-ui-primitive="true"
            data-ui-kind="field-label"
            data-ui-disabled=move || bool_token(markers.get().disabled)
            data-ui-invalid=move || bool_token(markers.get().invalid)
        >
            {children()}
        </label>
    }
}

#[component]
/// Label-styled title for fields whose control already carries its own label.
pub fn FieldTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let markers = use_field_markers();

    view! {
        <div
            class=merge_layout_class("ui-field-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-title"
            data-ui-disabled=move || bool_token(markers.get().disabled)
        >
            {children()}
        </div>
    }
}

#[component]
/// Helper copy beneath a label or control.
pub fn FieldDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let markers = use_field_markers();

    view! {
        <p
            class=merge_layout_class("ui-field-description", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="field-description"
            data-ui-disabled=move || bool_token(markers.get().disabled)
            data-ui-layout=move || markers.get().layout.token()
        >
            {children()}
        </p>
    }
}

#[component]
/// Caption for a [`FieldSet`].
pub fn FieldLegend(
    #[prop(default = FieldLegendVariant::Legend)] variant: FieldLegendVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <legend
            class=merge_layout_class("ui-field-legend", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-legend"
            data-ui-variant=variant.token()
        >
            {children()}
        </legend>
    }
}

#[component]
/// Divider between field sections with an optional centered caption.
pub fn FieldSeparator(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let has_content = children.is_some();

    view! {
        <div
            class=merge_layout_class("ui-field-separator", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-separator"
            data-content=bool_token(has_content)
        >
            <div role="separator" aria-hidden="true" data-ui-slot="line"></div>
            {children.map(|children| view! { <span data-ui-slot="content">{children()}</span> })}
        </div>
    }
}
