//! Server-rendered markup checks for the field primitives.
//!
//! Run with `cargo test -p field_ui --no-default-features --features ssr`.
#![cfg(feature = "ssr")]

use field_ui::prelude::*;
use leptos::*;
use pretty_assertions::assert_eq;

fn render<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}

/// Values of `attr` on every element tagged `data-ui-kind="{kind}"`, in document order.
fn attr_values(html: &str, kind: &str, attr: &str) -> Vec<String> {
    let marker = format!("data-ui-kind=\"{kind}\"");
    let needle = format!("{attr}=\"");
    html.match_indices(&marker)
        .filter_map(|(start, _)| {
            let rest = &html[start..];
            let tag = &rest[..rest.find('>')?];
            let value = &tag[tag.find(&needle)? + needle.len()..];
            Some(value[..value.find('"')?].to_string())
        })
        .collect()
}

#[test]
fn explicit_children_win_over_error_list() {
    let html = render(|| {
        view! {
            <FieldError errors=vec![ErrorEntry::new("ignored")]>"Custom text"</FieldError>
        }
    });

    assert!(html.contains("Custom text"));
    assert!(!html.contains("ignored"));
    assert!(html.contains("role=\"alert\""));
    assert_eq!(attr_values(&html, "field-error", "data-ui-variant"), vec!["custom"]);
}

#[test]
fn empty_error_list_emits_no_alert_node() {
    let html = render(|| {
        view! {
            <FieldError errors={Vec::<ErrorEntry>::new()} />
            <FieldError errors=vec![ErrorEntry::default(), ErrorEntry::default()] />
        }
    });

    assert!(!html.contains("role=\"alert\""));
    assert!(!html.contains("field-error"));
}

#[test]
fn single_error_renders_text_without_list() {
    let html = render(|| view! { <FieldError errors=vec![ErrorEntry::new("Required")] /> });

    assert!(html.contains("Required"));
    assert!(!html.contains("<ul"));
    assert_eq!(attr_values(&html, "field-error", "data-ui-variant"), vec!["single"]);
}

#[test]
fn duplicate_errors_render_one_item_each() {
    let html = render(|| {
        view! {
            <FieldError errors=vec![
                ErrorEntry::new("Too short"),
                ErrorEntry::new("Too short"),
                ErrorEntry::new("No symbol"),
            ] />
        }
    });

    assert_eq!(attr_values(&html, "field-error", "data-ui-variant"), vec!["list"]);
    assert_eq!(html.matches("data-ui-slot=\"item\"").count(), 2);
    let too_short = html.find("Too short").expect("first message");
    let no_symbol = html.find("No symbol").expect("second message");
    assert!(too_short < no_symbol);
}

#[test]
fn sibling_fields_do_not_share_markers() {
    let html = render(|| {
        view! {
            <FieldGroup>
                <Field orientation=FieldOrientation::Horizontal>
                    <FieldLabel>"Email"</FieldLabel>
                    <FieldContent>"Work address"</FieldContent>
                </Field>
                <Field invalid=true>
                    <FieldLabel>"Password"</FieldLabel>
                    <FieldContent>"At least 8 characters"</FieldContent>
                </Field>
            </FieldGroup>
        }
    });

    assert_eq!(attr_values(&html, "field", "data-ui-layout"), vec!["horizontal", "vertical"]);
    assert_eq!(attr_values(&html, "field", "data-invalid"), vec!["false", "true"]);
    assert_eq!(
        attr_values(&html, "field-content", "data-ui-layout"),
        vec!["horizontal", "vertical"]
    );
    assert_eq!(
        attr_values(&html, "field-content", "data-ui-align"),
        vec!["start", "stretch"]
    );
    assert_eq!(
        attr_values(&html, "field-label", "data-ui-invalid"),
        vec!["false", "true"]
    );
}

#[test]
fn disabled_set_dims_nested_labels() {
    let html = render(|| {
        view! {
            <FieldSet disabled=true>
                <Field>
                    <FieldLabel>"Name"</FieldLabel>
                    <FieldDescription>"Shown on your profile"</FieldDescription>
                </Field>
            </FieldSet>
            <Field>
                <FieldLabel>"Bio"</FieldLabel>
            </Field>
        }
    });

    assert_eq!(attr_values(&html, "field-label", "data-ui-disabled"), vec!["true", "false"]);
    assert_eq!(
        attr_values(&html, "field-description", "data-ui-disabled"),
        vec!["true"]
    );
}

#[test]
fn set_tightens_around_direct_choice_group() {
    let html = render(|| {
        view! {
            <FieldSet>
                <FieldLegend variant=FieldLegendVariant::Label>"Notifications"</FieldLegend>
                <FieldGroup kind=FieldGroupKind::CheckboxGroup>
                    <Field orientation=FieldOrientation::Horizontal>
                        <FieldLabel>"Email"</FieldLabel>
                    </Field>
                    <Field orientation=FieldOrientation::Horizontal>
                        <FieldLabel>"Push"</FieldLabel>
                    </Field>
                </FieldGroup>
            </FieldSet>
            <FieldSet>
                <Field>
                    <FieldLabel>"Display name"</FieldLabel>
                </Field>
            </FieldSet>
        }
    });

    assert_eq!(attr_values(&html, "field-set", "data-ui-gap"), vec!["sm", "lg"]);
    assert_eq!(attr_values(&html, "field-group", "data-ui-gap"), vec!["sm"]);
    assert_eq!(attr_values(&html, "field-legend", "data-ui-variant"), vec!["label"]);
}

#[test]
fn only_direct_choice_groups_tighten_a_container() {
    let html = render(|| {
        view! {
            <FieldSet>
                <FieldGroup>
                    <FieldGroup kind=FieldGroupKind::RadioGroup>
                        <Field>
                            <FieldLabel>"Monthly"</FieldLabel>
                        </Field>
                    </FieldGroup>
                </FieldGroup>
            </FieldSet>
        }
    });

    assert_eq!(attr_values(&html, "field-set", "data-ui-gap"), vec!["lg"]);
    assert_eq!(attr_values(&html, "field-group", "data-ui-gap"), vec!["sm", "sm"]);
}

#[test]
fn set_nested_in_group_steps_down_gap() {
    let html = render(|| {
        view! {
            <FieldGroup>
                <FieldSet>
                    <Field>
                        <FieldLabel>"Street"</FieldLabel>
                    </Field>
                </FieldSet>
                <FieldSeparator>"Or"</FieldSeparator>
                <FieldSeparator />
            </FieldGroup>
        }
    });

    assert_eq!(attr_values(&html, "field-group", "data-ui-gap"), vec!["lg"]);
    assert_eq!(attr_values(&html, "field-set", "data-ui-gap"), vec!["md"]);
    assert_eq!(
        attr_values(&html, "field-separator", "data-content"),
        vec!["true", "false"]
    );
}

#[test]
fn responsive_field_resolves_from_group_width() {
    let html = render(|| {
        let narrow = Signal::derive(|| Some(320u32));
        let wide = Signal::derive(|| Some(640u32));
        view! {
            <FieldGroup container_width=narrow>
                <Field orientation=FieldOrientation::Responsive>
                    <FieldContent>"Narrow"</FieldContent>
                </Field>
            </FieldGroup>
            <FieldGroup container_width=wide>
                <Field orientation=FieldOrientation::Responsive>
                    <FieldContent>"Wide"</FieldContent>
                </Field>
            </FieldGroup>
        }
    });

    assert_eq!(
        attr_values(&html, "field", "data-orientation"),
        vec!["responsive", "responsive"]
    );
    assert_eq!(attr_values(&html, "field", "data-ui-layout"), vec!["vertical", "horizontal"]);
}
