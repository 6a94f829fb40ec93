// SPDX-License-Identifier: MPL-2.0
//! iced-facing surface of the banner.
//!
//! Follows the Elm-style "state down, messages up" pattern:
//!
//! - [`overlay`] - the `Shout` component (messages, update, view, subscription)
//! - [`style`] - design tokens for the banner surface

pub mod overlay;
pub mod style;

pub use overlay::{Message, Shout};
