//! Krado components.
//!
//! Each component derives its classes from its props and renders a native
//! element, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`KradoButton`]: Clickable button with variants, sizes and a loading state
//! - [`KradoInput`]: Text field with label, helper text and validation states

mod button;
mod input;
mod size;

pub use button::{BUTTON_CLASS, ButtonProps, ButtonVariant, KradoButton, KradoButtonProps};
pub use input::{
    FieldId, HELPER_TEXT_CLASS, INPUT_CLASS, InputField, InputProps, KradoInput, KradoInputProps,
    helper_text_id,
};
pub use size::Size;
