// SPDX-License-Identifier: MPL-2.0
//! `iced_shout` is a transient, swipe-dismissible notification banner for the
//! Iced GUI framework.
//!
//! A banner slides down over the host view, auto-dismisses after a
//! configurable duration, and can be dragged: pulling it further down meets
//! increasing resistance, a short upward flick dismisses it, and a drag in
//! progress defers the auto-dismiss timer until release. The interaction
//! core in [`banner`] is a plain state machine driven by explicit `Instant`s
//! and is fully testable without a window; [`ui`] wraps it in an iced
//! component with messages, a view, and a tick subscription.
//!
//! ```
//! use iced_shout::{Announcement, Banner, Config, StatusBar};
//! use std::time::Instant;
//!
//! let mut banner = Banner::new(Config::default());
//! banner
//!     .present(Announcement::new("Download complete"), StatusBar::Visible, Instant::now())
//!     .unwrap();
//! ```

pub mod announcement;
pub mod banner;
pub mod config;
pub mod error;
pub mod ui;

pub use announcement::Announcement;
pub use banner::{Banner, BannerEvent, BannerState, DragOutcome, DragPhase, DragSample};
pub use config::{Config, StatusBar};
pub use error::{Error, Result};
pub use ui::{Message, Shout};
