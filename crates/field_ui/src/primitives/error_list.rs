//! Validation message rendering for [`FieldError`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// One caller-supplied validation result.
///
/// A missing entry from a validation library is represented by the default
/// value, whose `message` is `None`.
pub struct ErrorEntry {
    /// Human-readable message, if the validator produced one.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorEntry {
    /// Entry carrying a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    fn renderable_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}

impl From<&str> for ErrorEntry {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorEntry {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Drops every entry whose message was already seen, keeping first-occurrence order.
///
/// `None` is a key like any other, so only the first message-less entry survives.
pub fn dedupe_errors(errors: &[ErrorEntry]) -> Vec<ErrorEntry> {
    let mut unique: IndexMap<Option<&str>, &ErrorEntry> = IndexMap::with_capacity(errors.len());
    for entry in errors {
        unique.entry(entry.message.as_deref()).or_insert(entry);
    }
    unique.into_values().cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a [`FieldError`] renders for an error list.
pub enum FieldErrorContent {
    /// Nothing; no alert node is emitted.
    Empty,
    /// One message as plain text.
    Single(String),
    /// A bulleted list of messages.
    List(Vec<String>),
}

impl FieldErrorContent {
    /// Decides the rendering for `errors`.
    ///
    /// Single-versus-list is decided by the number of distinct entries, while
    /// list items skip entries without a message. Two distinct entries where
    /// one lacks a message therefore render a one-item list.
    ///
    /// A list whose distinct entries all lack a renderable message (for
    /// example `[None, Some("")]`) yields [`FieldErrorContent::Empty`] rather
    /// than an alert wrapping an empty `<ul>`.
    pub fn from_errors(errors: &[ErrorEntry]) -> Self {
        if errors.is_empty() {
            return Self::Empty;
        }

        let unique = dedupe_errors(errors);
        if let [only] = unique.as_slice() {
            return match only.renderable_message() {
                Some(message) => Self::Single(message.to_string()),
                None => Self::Empty,
            };
        }

        let items: Vec<String> = unique
            .iter()
            .filter_map(|entry| entry.renderable_message().map(str::to_string))
            .collect();
        if items.is_empty() {
            Self::Empty
        } else {
            Self::List(items)
        }
    }
}

#[component]
/// Alert region listing a field's validation messages.
///
/// Explicit children always win over `errors`. Otherwise the list is
/// deduplicated by message on every change and rendered as text, a list, or
/// nothing at all.
pub fn FieldError(
    #[prop(optional, into)] errors: MaybeSignal<Vec<ErrorEntry>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = merge_layout_class("ui-field-error", layout_class);

    if let Some(children) = children {
        return view! {
            <div
                class=class
                id=id
                role="alert"
                data-ui-primitive="true"
                data-ui-kind="field-error"
                data-ui-variant="custom"
            >
                {children()}
            </div>
        }
        .into_view();
    }

    let content =
        create_memo(move |_| errors.with(|errors| FieldErrorContent::from_errors(errors)));

    (move || {
        let (variant, body) = match content.get() {
            FieldErrorContent::Empty => return ().into_view(),
            FieldErrorContent::Single(message) => ("single", message.into_view()),
            FieldErrorContent::List(messages) => (
                "list",
                view! {
                    <ul data-ui-slot="list">
                        {messages
                            .into_iter()
                            .map(|message| view! { <li data-ui-slot="item">{message}</li> })
                            .collect_view()}
                    </ul>
                }
                .into_view(),
            ),
        };

        view! {
            <div
                class=class.clone()
                id=id.clone()
                role="alert"
                data-ui-primitive="true"
                data-ui-kind="field-error"
                data-ui-variant=variant
            >
                {body}
            </div>
        }
        .into_view()
    })
    .into_view()
}
