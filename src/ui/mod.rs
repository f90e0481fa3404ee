//! UI components and the helpers they share.
//!
//! # Structure
//!
//! - [`components`]: The Krado button and input
//! - [`class_names`]: Class-string composition
//! - [`attributes`]: Pass-through attributes forwarded to native elements
//! - [`events`]: Event forwarding to caller callbacks
//! - [`validation`]: Development-time prop checks

pub mod attributes;
pub mod class_names;
pub mod components;
pub mod events;
pub mod validation;
