//! Drag-to-rotate for browser elements.
//!
//! A [`Rotator`] tracks a continuous angle from pointer drags around the
//! center of an element and notifies listeners on every change.
//! [`hook_to_element`] wires one to an element's touch and mouse events and
//! rotates the element with a CSS transform; [`bind`] does the same for any
//! injected [`PointerSource`] and [`PresentationSink`].
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | `Rotator`, angle math and the listener registry |
//! | [`state`] | Drag gesture state |
//! | [`binding`] | Pointer source / presentation sink seams and the adapter |
//! | [`dom`] | `web-sys` implementations and element lookup |
//! | [`config`] | Binding options |
//! | [`error`] | `BindError` |
//! | [`util`] | Formatting and logging helpers |

pub mod binding;
pub mod config;
pub mod dom;
pub mod error;
pub mod model;
pub mod state;
pub mod util;

pub use binding::{Binding, PointerEvent, PointerSource, PresentationSink, SharedRotator, bind};
pub use config::RotatorConfig;
pub use dom::{ElementBinding, hook_to_element, hook_to_html_element};
pub use error::BindError;
pub use model::{RotationListener, Rotator, calc_alpha, normalize_degrees};
