// SPDX-License-Identifier: MPL-2.0
//! Banner interaction core.
//!
//! This module holds the behavioral heart of the crate: the coordination
//! between a countdown timer, a continuous drag gesture, and the animated
//! show/hide transitions of a single notification banner.
//!
//! # Components
//!
//! - [`timer`] - `AutoDismissTimer`, the one-shot countdown
//! - [`drag`] - drag samples, the height curve, and the end-of-drag outcome
//! - [`animation`] - tick-driven height transitions with explicit completion
//! - [`lifecycle`] - `Banner`, the state machine tying them together
//!
//! # Usage
//!
//! ```
//! use iced_shout::banner::{Banner, BannerState};
//! use iced_shout::{Announcement, Config, StatusBar};
//! use std::time::{Duration, Instant};
//!
//! let mut banner = Banner::new(Config::default());
//! let now = Instant::now();
//! banner
//!     .present(Announcement::new("Saved"), StatusBar::Visible, now)
//!     .unwrap();
//!
//! // Drive the machine from the host's tick loop.
//! let event = banner.tick(now + Duration::from_millis(350));
//! assert_eq!(banner.state(), BannerState::Open);
//! assert!(event.is_none());
//! ```

pub mod animation;
pub mod drag;
pub mod lifecycle;
pub mod timer;

pub use animation::HeightAnimation;
pub use drag::{DragController, DragOutcome, DragPhase, DragSample};
pub use lifecycle::{Banner, BannerEvent, BannerState};
pub use timer::AutoDismissTimer;
