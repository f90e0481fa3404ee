//! Development-time prop validation.
//!
//! Components never fail to render. Contract violations (an out-of-enum
//! variant, an attribute the component owns) are collected here and logged as
//! warnings in debug builds; release builds skip the checks.

use thiserror::Error;

/// A violation of a component's prop contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropError {
    /// `variant` is not one of the documented button variants.
    #[error("{component}: unknown variant `{value}`")]
    UnknownVariant {
        component: &'static str,
        value: String,
    },

    /// `size` is not one of `sm`, `md`, `lg`.
    #[error("{component}: unknown size `{value}`")]
    UnknownSize {
        component: &'static str,
        value: String,
    },

    /// The attribute bag carries an attribute the component computes itself.
    #[error("{component}: attribute `{name}` is set by the component and was ignored")]
    ReservedAttribute {
        component: &'static str,
        name: String,
    },

    /// Both `error` and `success` are set on an input.
    #[error("{component}: both `error` and `success` are set")]
    ConflictingStates { component: &'static str },
}

/// Log each violation as a `krado.props.invalid` warning.
///
/// Only active with `debug_assertions`; `violations` is not even evaluated in
/// release builds.
pub fn report(violations: impl FnOnce() -> Vec<PropError>) {
    if cfg!(debug_assertions) {
        for violation in violations() {
            tracing::warn!(
                name: "krado.props.invalid",
                error = %violation,
                "Component prop contract violated"
            );
        }
    }
}
