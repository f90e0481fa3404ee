//! Input component with label, helper text and validation states.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::html;
use leptos::prelude::*;

use super::Size;
use crate::ui::attributes::Attributes;
use crate::ui::class_names::ClassList;
use crate::ui::events;
use crate::ui::validation::{self, PropError};

const COMPONENT: &str = "KradoInput";

/// Base class of every input field.
pub const INPUT_CLASS: &str = "krado-input";

/// Base class of the helper text below a field.
pub const HELPER_TEXT_CLASS: &str = "krado-input-helper-text";

const RESERVED_ATTRIBUTES: [&str; 2] = ["class", "id"];

static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(0);

/// Generated identifier for an input that was given no `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldId(String);

impl FieldId {
    /// Allocate an id no other generated id in this process shares.
    pub fn generate() -> Self {
        let n = NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("krado-input-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Id of the helper-text element that describes `field_id`.
pub fn helper_text_id(field_id: &str) -> String {
    format!("{field_id}-helper-text")
}

/// The props that shape an input's markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProps {
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub error: bool,
    pub success: bool,
    pub size: Size,
    pub required: bool,
    /// Caller-supplied id; empty means "generate one".
    pub id: Option<String>,
    /// The `type` attribute, `text` when unset.
    pub input_type: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub disabled: bool,
    /// Extra classes appended after the derived ones.
    pub class: String,
}

impl InputProps {
    /// Class attribute of the field.
    pub fn class_name(&self) -> String {
        ClassList::new(INPUT_CLASS)
            .push_if(self.error, "krado-input--error")
            .push_if(self.success, "krado-input--success")
            .push((!self.size.is_default()).then(|| format!("{INPUT_CLASS}--{}", self.size)))
            .push(self.class.as_str())
            .build()
    }

    /// Class attribute of the helper text.
    pub fn helper_text_class_name(&self) -> String {
        ClassList::new(HELPER_TEXT_CLASS)
            .push_if(self.error, "krado-input-helper-text--error")
            .push_if(self.success, "krado-input-helper-text--success")
            .build()
    }

    /// Class attribute of the label.
    pub fn label_class_name(&self) -> String {
        ClassList::new("krado-input-label")
            .push_if(self.required, "krado-input-label--required")
            .build()
    }

    /// Label text, if there is any to show.
    pub fn label(&self) -> Option<&str> {
        non_empty(self.label.as_deref())
    }

    /// Helper text, if there is any to show.
    pub fn helper_text(&self) -> Option<&str> {
        non_empty(self.helper_text.as_deref())
    }

    /// The caller's id, if usable.
    pub fn explicit_id(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }

    /// Contract violations in these props.
    ///
    /// `error` together with `success` is reported but still rendered with
    /// both modifiers.
    pub fn violations(&self) -> Vec<PropError> {
        let mut violations = Vec::new();
        if !self.size.is_known() {
            violations.push(PropError::UnknownSize {
                component: COMPONENT,
                value: self.size.to_string(),
            });
        }
        if self.error && self.success {
            violations.push(PropError::ConflictingStates {
                component: COMPONENT,
            });
        }
        violations
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

/// A mounted input.
///
/// The fallback id is allocated once, when the instance mounts, and kept for
/// as long as the instance lives; updates never regenerate it.
#[derive(Debug, Clone)]
pub struct InputField {
    props: InputProps,
    fallback_id: FieldId,
}

impl InputField {
    /// Mount a new instance.
    pub fn mount(props: InputProps) -> Self {
        let fallback_id = FieldId::generate();
        tracing::trace!(
            name: "krado.input.mounted",
            fallback_id = %fallback_id.as_str(),
            explicit_id = ?props.explicit_id(),
            "Input mounted"
        );
        Self { props, fallback_id }
    }

    /// Replace the props of this instance.
    ///
    /// Models a prop change for callers that hold an `InputField` across
    /// renders. [`KradoInput`] mounts a fresh field once per component
    /// instance and never calls this itself.
    pub fn update(&mut self, props: InputProps) {
        self.props = props;
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    /// The field's id: the caller's, else the instance's generated one.
    pub fn id(&self) -> &str {
        self.props
            .explicit_id()
            .unwrap_or_else(|| self.fallback_id.as_str())
    }

    /// Id of the helper text, present only when there is helper text.
    pub fn helper_text_id(&self) -> Option<String> {
        self.props
            .helper_text()
            .map(|_| helper_text_id(self.id()))
    }
}

/// Text field rendered as a native `<input>` inside a wrapper, with an
/// optional `<label>` and helper text.
///
/// Without an `id` the field gets a generated one, stable for the lifetime of
/// the component. Attributes in `attributes` are forwarded to the `<input>`;
/// entries named `type`, `required`, `aria-invalid` or `aria-describedby`
/// take precedence over the computed values. `node_ref`, when given, is
/// bound to the `<input>` element.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <KradoInput
///         label="Email"
///         input_type="email"
///         placeholder="Enter your email"
///         helper_text="We'll never share your email"
///         required=true
///     />
/// }
/// ```
#[component]
pub fn KradoInput(
    /// Label text.
    #[prop(optional, into)]
    label: Option<String>,
    /// Helper text below the field.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Show the error state.
    #[prop(optional)]
    error: bool,
    /// Show the success state.
    #[prop(optional)]
    success: bool,
    /// Field size.
    #[prop(optional, into)]
    size: Size,
    /// Mark the field as required.
    #[prop(optional)]
    required: bool,
    /// Field id; generated when absent.
    #[prop(optional, into)]
    id: Option<String>,
    /// Input type (text, email, password, etc.).
    #[prop(optional, into)]
    input_type: Option<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Field value.
    #[prop(optional, into)]
    value: Option<String>,
    /// Whether the field is disabled.
    #[prop(optional)]
    disabled: bool,
    /// Additional CSS classes for the field.
    #[prop(optional, into)]
    class: String,
    /// Called with the new value on every input event.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Handle to the rendered `<input>`.
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Input>>,
    /// Pass-through attributes for the `<input>`.
    #[prop(optional, into)]
    attributes: Attributes,
) -> impl IntoView {
    let field = InputField::mount(InputProps {
        label,
        helper_text,
        error,
        success,
        size,
        required,
        id,
        input_type,
        placeholder,
        value,
        disabled,
        class,
    });
    let props = field.props();

    let mut attributes = attributes;
    let dropped = attributes.strip(&RESERVED_ATTRIBUTES);
    validation::report(|| {
        let mut violations = props.violations();
        violations.extend(dropped.into_iter().map(|name| PropError::ReservedAttribute {
            component: COMPONENT,
            name,
        }));
        violations
    });

    let field_id = field.id().to_string();
    let input_type = attributes
        .remove("type")
        .or_else(|| props.input_type.clone())
        .unwrap_or_else(|| "text".to_string());
    let is_required = props.required && !attributes.contains("required");
    let aria_invalid = (!attributes.contains("aria-invalid")).then(|| props.error.to_string());
    let described_by = field
        .helper_text_id()
        .filter(|_| !attributes.contains("aria-describedby"));

    let label_view = props.label().map(|text| {
        let text = text.to_string();
        view! {
            <label for={field_id.clone()} class={props.label_class_name()}>
                {text}
            </label>
        }
    });
    let helper_view = props.helper_text().map(|text| {
        let text = text.to_string();
        view! {
            <span id={helper_text_id(&field_id)} class={props.helper_text_class_name()}>
                {text}
            </span>
        }
    });

    let classes = props.class_name();
    let placeholder = props.placeholder.clone();
    let value = props.value.clone();
    let is_disabled = props.disabled;
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);
    let extra = attributes.into_any_attrs();

    view! {
        <div class="krado-input-wrapper">
            {label_view}
            <input
                node_ref=node_ref
                id=field_id
                class=classes
                type=input_type
                placeholder=placeholder
                value=value
                disabled=is_disabled
                required=is_required
                aria-invalid=aria_invalid
                aria-describedby=described_by
                on:input=move |ev| events::notify(on_change.as_ref(), event_target_value(&ev))
                {..extra}
            />
            {helper_view}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let props = InputProps::default();
        assert_eq!(props.class_name(), "krado-input");
        assert_eq!(props.helper_text_class_name(), "krado-input-helper-text");
        assert_eq!(props.label_class_name(), "krado-input-label");
    }

    #[test]
    fn test_field_class_order() {
        let props = InputProps {
            error: true,
            size: Size::Sm,
            class: "signup-email".to_string(),
            ..InputProps::default()
        };
        assert_eq!(
            props.class_name(),
            "krado-input krado-input--error krado-input--sm signup-email"
        );
    }

    #[test]
    fn test_error_and_success_both_apply() {
        // Not mutually exclusive: both modifiers render, validation flags it.
        let props = InputProps {
            error: true,
            success: true,
            ..InputProps::default()
        };
        assert_eq!(
            props.class_name(),
            "krado-input krado-input--error krado-input--success"
        );
        assert_eq!(
            props.helper_text_class_name(),
            "krado-input-helper-text krado-input-helper-text--error \
             krado-input-helper-text--success"
        );
        assert_eq!(
            props.violations(),
            vec![PropError::ConflictingStates {
                component: "KradoInput"
            }]
        );
    }

    #[test]
    fn test_required_label_class() {
        let props = InputProps {
            required: true,
            ..InputProps::default()
        };
        assert_eq!(
            props.label_class_name(),
            "krado-input-label krado-input-label--required"
        );
    }

    #[test]
    fn test_empty_optional_text_is_absent() {
        let props = InputProps {
            label: Some(String::new()),
            helper_text: Some(String::new()),
            id: Some(String::new()),
            ..InputProps::default()
        };
        assert_eq!(props.label(), None);
        assert_eq!(props.helper_text(), None);
        assert_eq!(props.explicit_id(), None);
    }

    #[test]
    fn test_whitespace_text_is_present() {
        let field = InputField::mount(InputProps {
            label: Some(" ".to_string()),
            helper_text: Some(" ".to_string()),
            id: Some(" ".to_string()),
            ..InputProps::default()
        });
        assert_eq!(field.props().label(), Some(" "));
        assert_eq!(field.id(), " ");
        assert_eq!(field.helper_text_id(), Some(" -helper-text".to_string()));
    }

    #[test]
    fn test_distinct_instances_get_distinct_ids() {
        let first = InputField::mount(InputProps::default());
        let second = InputField::mount(InputProps::default());
        assert_ne!(first.id(), second.id());
        assert!(first.id().starts_with("krado-input-"));
    }

    #[test]
    fn test_update_keeps_generated_id() {
        let mut field = InputField::mount(InputProps::default());
        let before = field.id().to_string();
        field.update(InputProps {
            error: true,
            helper_text: Some("Required".to_string()),
            ..InputProps::default()
        });
        assert_eq!(field.id(), before);
        assert_eq!(field.helper_text_id(), Some(format!("{before}-helper-text")));
    }

    #[test]
    fn test_explicit_id_wins_and_fallback_survives() {
        let mut field = InputField::mount(InputProps {
            id: Some("email".to_string()),
            ..InputProps::default()
        });
        assert_eq!(field.id(), "email");

        field.update(InputProps::default());
        let generated = field.id().to_string();
        assert_ne!(generated, "email");

        field.update(InputProps::default());
        assert_eq!(field.id(), generated);
    }

    #[test]
    fn test_helper_text_id_only_with_helper_text() {
        let field = InputField::mount(InputProps {
            id: Some("name".to_string()),
            ..InputProps::default()
        });
        assert_eq!(field.helper_text_id(), None);
        assert_eq!(helper_text_id("name"), "name-helper-text");
    }
}
