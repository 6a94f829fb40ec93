// SPDX-License-Identifier: MPL-2.0
//! Drag-gesture interpretation.
//!
//! Consumes an ordered stream of [`DragSample`]s, tracks the banner height
//! while the pointer is down, and decides the end-of-drag [`DragOutcome`].
//!
//! The thresholds are asymmetric on purpose: downward drags explore "show me
//! more" and meet increasing resistance past a small dead zone, while upward
//! drags express clear dismiss intent and commit after only a few points.

use crate::config::Config;
use tracing::trace;

/// Phase of one reported point of a continuous drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl DragPhase {
    /// Whether this phase terminates the gesture.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, DragPhase::Ended | DragPhase::Cancelled)
    }
}

/// One reported point of a drag gesture.
///
/// `translation` is the cumulative vertical offset since the gesture began:
/// positive values point downward (further open), negative upward (toward
/// dismiss).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub phase: DragPhase,
    pub translation: f32,
}

impl DragSample {
    #[must_use]
    pub fn began(translation: f32) -> Self {
        Self {
            phase: DragPhase::Began,
            translation,
        }
    }

    #[must_use]
    pub fn changed(translation: f32) -> Self {
        Self {
            phase: DragPhase::Changed,
            translation,
        }
    }

    #[must_use]
    pub fn ended(translation: f32) -> Self {
        Self {
            phase: DragPhase::Ended,
            translation,
        }
    }

    #[must_use]
    pub fn cancelled(translation: f32) -> Self {
        Self {
            phase: DragPhase::Cancelled,
            translation,
        }
    }
}

/// Decided result of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Settle back to the open height.
    SnapOpen,
    /// Collapse to zero and tear the banner down.
    Dismiss,
}

/// Tracks one continuous drag and produces its outcome on release.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: bool,
    translation: f32,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The most recent cumulative translation.
    #[must_use]
    pub fn translation(&self) -> f32 {
        self.translation
    }

    /// Records a `Began`/`Changed` sample.
    pub fn track(&mut self, translation: f32) {
        self.active = true;
        self.translation = translation;
    }

    /// Height the banner should present at for the tracked translation.
    ///
    /// Past the downward dead zone the translation is attenuated so large
    /// drags yield progressively smaller growth; below zero the result is
    /// floored so the height can never go negative.
    #[must_use]
    pub fn height(&self, config: &Config, open_height: f32) -> f32 {
        height_for(config, open_height, self.translation)
    }

    /// Records a terminal sample and decides the outcome.
    ///
    /// `force_dismiss` carries the should-silent flag: a timer that expired
    /// mid-drag turns an otherwise snap-open release into a dismissal.
    pub fn release(&mut self, translation: f32, force_dismiss: bool, config: &Config) -> DragOutcome {
        self.active = false;
        self.translation = translation;

        // Strict comparison: a release exactly at the threshold snaps open.
        let outcome = if translation < config.dismiss_up_threshold || force_dismiss {
            DragOutcome::Dismiss
        } else {
            DragOutcome::SnapOpen
        };
        trace!(translation, force_dismiss, ?outcome, "drag released");
        outcome
    }
}

fn height_for(config: &Config, open_height: f32, translation: f32) -> f32 {
    if translation >= config.drag_down_threshold {
        open_height
            + config.drag_down_threshold
            + (translation - config.drag_down_threshold) / config.drag_down_divisor
    } else {
        (open_height + translation).max(0.0)
    }
}
