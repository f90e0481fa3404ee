//! Button component with variants, sizes and a loading state.

use std::fmt;

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::Size;
use crate::ui::attributes::Attributes;
use crate::ui::class_names::ClassList;
use crate::ui::events;
use crate::ui::validation::{self, PropError};

const COMPONENT: &str = "KradoButton";

/// Base class of every button.
pub const BUTTON_CLASS: &str = "krado-button";

/// Attributes the button computes itself; bag entries with these names are
/// dropped.
const RESERVED_ATTRIBUTES: [&str; 2] = ["class", "disabled"];

/// Button visual variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Bordered button with a transparent background.
    Outline,
    /// Subtle ghost button.
    Ghost,
    /// Destructive action button.
    Danger,
    /// Confirming action button.
    Success,
    /// A name outside the documented set, kept verbatim.
    Other(String),
}

impl ButtonVariant {
    /// The documented variants.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
        Self::Success,
    ];

    /// Class suffix for this variant.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the documented variants.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ButtonVariant {
    fn from(name: &str) -> Self {
        match name {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "outline" => Self::Outline,
            "ghost" => Self::Ghost,
            "danger" => Self::Danger,
            "success" => Self::Success,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ButtonVariant {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<ButtonVariant> for String {
    fn from(variant: ButtonVariant) -> Self {
        match variant {
            ButtonVariant::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The props that shape a button's class and state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    pub size: Size,
    pub full_width: bool,
    pub loading: bool,
    pub disabled: bool,
    /// Extra classes appended after the derived ones.
    pub class: String,
}

impl ButtonProps {
    /// The class attribute for these props.
    pub fn class_name(&self) -> String {
        ClassList::new(BUTTON_CLASS)
            .push(
                (self.variant != ButtonVariant::Primary)
                    .then(|| format!("{BUTTON_CLASS}--{}", self.variant)),
            )
            .push((!self.size.is_default()).then(|| format!("{BUTTON_CLASS}--{}", self.size)))
            .push_if(self.full_width, "krado-button--full-width")
            .push_if(self.loading, "krado-button--loading")
            .push(self.class.as_str())
            .build()
    }

    /// A loading button is never interactive.
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Contract violations in these props.
    pub fn violations(&self) -> Vec<PropError> {
        let mut violations = Vec::new();
        if !self.variant.is_known() {
            violations.push(PropError::UnknownVariant {
                component: COMPONENT,
                value: self.variant.to_string(),
            });
        }
        if !self.size.is_known() {
            violations.push(PropError::UnknownSize {
                component: COMPONENT,
                value: self.size.to_string(),
            });
        }
        violations
    }
}

/// Button rendered as a native `<button>`.
///
/// `loading` implies `disabled`. Attributes in `attributes` are forwarded to
/// the `<button>` as-is; a `type` entry replaces the default `button`.
/// `node_ref`, when given, is bound to the `<button>` element.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <KradoButton variant=ButtonVariant::Danger size=Size::Lg loading=true>
///         "Delete"
///     </KradoButton>
/// }
/// ```
#[component]
pub fn KradoButton(
    /// Visual variant.
    #[prop(optional, into)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(optional, into)]
    size: Size,
    /// Stretch to the container width.
    #[prop(optional)]
    full_width: bool,
    /// Show the loading state; also disables the button.
    #[prop(optional)]
    loading: bool,
    /// Whether the button is disabled.
    #[prop(optional)]
    disabled: bool,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Handle to the rendered `<button>`.
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Button>>,
    /// Pass-through attributes for the `<button>`.
    #[prop(optional, into)]
    attributes: Attributes,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let props = ButtonProps {
        variant,
        size,
        full_width,
        loading,
        disabled,
        class,
    };

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

    let button_type = attributes
        .remove("type")
        .unwrap_or_else(|| "button".to_string());
    let classes = props.class_name();
    let is_disabled = props.is_disabled();
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);
    let extra = attributes.into_any_attrs();

    view! {
        <button
            node_ref=node_ref
            type=button_type
            class=classes
            disabled=is_disabled
            on:click=move |ev| events::notify(on_click.as_ref(), ev)
            {..extra}
        >
            {children()}
        </button>
    }
}
