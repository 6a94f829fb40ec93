// SPDX-License-Identifier: MPL-2.0
//! The banner lifecycle state machine.
//!
//! A [`Banner`] ties the auto-dismiss timer, the drag controller, and the
//! height animations together: presentation arms the timer, the timer fires
//! a dismiss intent unless a drag is in progress, the drag controller
//! overrides the timer during interaction and produces an outcome on
//! release, and the machine consumes that outcome to either settle back
//! open or collapse to hidden. The dismissal side-effect (the completion
//! callback plus the [`BannerEvent::Dismissed`] notification) fires exactly
//! once per presentation, at the moment the hide animation reaches zero.

use crate::announcement::Announcement;
use crate::banner::animation::HeightAnimation;
use crate::banner::drag::{DragController, DragOutcome, DragPhase, DragSample};
use crate::banner::timer::AutoDismissTimer;
use crate::config::{Config, StatusBar};
use crate::error::{Error, Result};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Lifecycle state of a banner instance.
///
/// `Hidden` is the sole terminal state and is reachable only through
/// `Dismissing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerState {
    #[default]
    Hidden,
    Presenting,
    Open,
    Dragging,
    Dismissing,
}

/// Outbound notification to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerEvent {
    /// The hide animation completed and the banner left the screen.
    ///
    /// Delivered exactly once per presentation; the host should detach the
    /// banner's visual representation on receipt.
    Dismissed,
}

type Completion = Box<dyn FnOnce() + Send>;

/// A single transient notification banner.
pub struct Banner {
    config: Config,
    state: BannerState,
    announcement: Option<Announcement>,
    /// Presented extent, computed per presentation from the status-bar state.
    open_height: f32,
    height: f32,
    timer: AutoDismissTimer,
    drag: DragController,
    animation: Option<HeightAnimation>,
    /// Set when the timer fires mid-drag; honored when the drag ends.
    should_silent: bool,
    completion: Option<Completion>,
}

impl Banner {
    /// Creates a hidden banner with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: BannerState::Hidden,
            announcement: None,
            open_height: 0.0,
            height: 0.0,
            timer: AutoDismissTimer::new(),
            drag: DragController::new(),
            animation: None,
            should_silent: false,
            completion: None,
        }
    }

    /// Presents an announcement.
    ///
    /// Arms the auto-dismiss timer for the announcement's duration and
    /// starts the show animation from height 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyPresented`] unless the banner is hidden.
    pub fn present(
        &mut self,
        announcement: Announcement,
        status_bar: StatusBar,
        now: Instant,
    ) -> Result<()> {
        self.present_inner(announcement, status_bar, None, now)
    }

    /// Like [`present`](Self::present), additionally registering a
    /// completion callback invoked once when the banner leaves the screen.
    pub fn present_with_completion(
        &mut self,
        announcement: Announcement,
        status_bar: StatusBar,
        completion: impl FnOnce() + Send + 'static,
        now: Instant,
    ) -> Result<()> {
        self.present_inner(announcement, status_bar, Some(Box::new(completion)), now)
    }

    fn present_inner(
        &mut self,
        announcement: Announcement,
        status_bar: StatusBar,
        completion: Option<Completion>,
        now: Instant,
    ) -> Result<()> {
        if self.state != BannerState::Hidden {
            return Err(Error::AlreadyPresented);
        }

        debug!(title = announcement.title(), "presenting banner");
        self.open_height = self.config.open_height_for(status_bar);
        self.height = 0.0;
        self.should_silent = false;
        self.drag = DragController::new();
        self.completion = completion;
        // A fresh arm replaces any stale deadline from an earlier
        // announcement, so an old timer can never fire against a new one.
        self.timer.arm(now, announcement.display_duration());
        self.announcement = Some(announcement);
        self.animation = Some(HeightAnimation::new(
            0.0,
            self.open_height,
            now,
            self.config.show_animation(),
        ));
        self.state = BannerState::Presenting;
        Ok(())
    }

    /// Feeds one drag sample into the machine.
    ///
    /// Samples arriving while hidden or dismissing are ignored; the first
    /// transition into `Dismissing` wins.
    pub fn handle_drag(&mut self, sample: DragSample, now: Instant) {
        match self.state {
            BannerState::Hidden | BannerState::Dismissing => return,
            BannerState::Presenting | BannerState::Open | BannerState::Dragging => {}
        }

        match sample.phase {
            // A `Began` while already dragging continues the gesture: the
            // host restarted its sample stream mid-drag.
            DragPhase::Began | DragPhase::Changed => {
                self.state = BannerState::Dragging;
                self.animation = None;
                self.drag.track(sample.translation);
                self.height = self.drag.height(&self.config, self.open_height);
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                if self.state != BannerState::Dragging {
                    return;
                }
                let outcome =
                    self.drag
                        .release(sample.translation, self.should_silent, &self.config);
                match outcome {
                    DragOutcome::SnapOpen => {
                        debug!("drag released, snapping open");
                        self.state = BannerState::Open;
                        self.animation = Some(HeightAnimation::new(
                            self.height,
                            self.open_height,
                            now,
                            self.config.settle_animation(),
                        ));
                    }
                    DragOutcome::Dismiss => {
                        self.begin_dismiss(self.config.settle_animation(), now);
                    }
                }
            }
        }
    }

    /// Handles a tap on the banner surface.
    ///
    /// Invokes the announcement's action first, then starts the hide
    /// transition. Ignored while dragging, dismissing, or hidden.
    pub fn tap(&mut self, now: Instant) {
        match self.state {
            BannerState::Presenting | BannerState::Open => {}
            BannerState::Hidden | BannerState::Dragging | BannerState::Dismissing => return,
        }

        if let Some(announcement) = &self.announcement {
            announcement.invoke_action();
        }
        self.begin_dismiss(self.config.hide_animation(), now);
    }

    /// Advances the clock: polls the timer and the running animation.
    ///
    /// Returns [`BannerEvent::Dismissed`] on the tick where the hide
    /// animation reaches zero.
    pub fn tick(&mut self, now: Instant) -> Option<BannerEvent> {
        if self.timer.poll(now) {
            self.should_silent = true;
            match self.state {
                // The timer cannot force a hide mid-drag; the flag above is
                // honored when the drag ends.
                BannerState::Dragging => {}
                BannerState::Presenting | BannerState::Open => {
                    debug!("display timer fired");
                    self.begin_dismiss(self.config.hide_animation(), now);
                }
                BannerState::Hidden | BannerState::Dismissing => {}
            }
        }

        if let Some(animation) = self.animation {
            self.height = animation.value_at(now);
            if animation.is_finished(now) {
                self.animation = None;
                match self.state {
                    BannerState::Presenting => {
                        debug!("show animation complete");
                        self.state = BannerState::Open;
                    }
                    BannerState::Dismissing => return Some(self.finish_hide()),
                    BannerState::Hidden | BannerState::Open | BannerState::Dragging => {}
                }
            }
        }

        None
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> BannerState {
        self.state
    }

    /// Current presented extent.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Presented extent the banner settles at while open.
    #[must_use]
    pub fn open_height(&self) -> f32 {
        self.open_height
    }

    /// Whether the banner occupies the screen in any form.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state != BannerState::Hidden
    }

    /// The announcement currently presented, if any.
    #[must_use]
    pub fn announcement(&self) -> Option<&Announcement> {
        self.announcement.as_ref()
    }

    /// Whether the timer fired while a drag was in progress.
    #[must_use]
    pub fn should_silent(&self) -> bool {
        self.should_silent
    }

    /// Enters `Dismissing` and starts the collapse to zero.
    ///
    /// The first caller wins; later dismiss signals are ignored.
    fn begin_dismiss(&mut self, duration: Duration, now: Instant) {
        match self.state {
            BannerState::Hidden | BannerState::Dismissing => return,
            BannerState::Presenting | BannerState::Open | BannerState::Dragging => {}
        }
        debug!(height = self.height, "dismissing banner");
        self.state = BannerState::Dismissing;
        self.animation = Some(HeightAnimation::new(self.height, 0.0, now, duration));
    }

    /// Completes the teardown once the hide animation reaches zero.
    ///
    /// Reachable only from `Dismissing`, which itself is entered at most
    /// once per presentation, so the side-effect here fires exactly once.
    fn finish_hide(&mut self) -> BannerEvent {
        debug!("banner hidden");
        self.state = BannerState::Hidden;
        self.height = 0.0;
        self.timer.cancel();
        self.announcement = None;
        self.drag = DragController::new();
        self.should_silent = false;
        if let Some(completion) = self.completion.take() {
            completion();
        }
        BannerEvent::Dismissed
    }
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("state", &self.state)
            .field("height", &self.height)
            .field("open_height", &self.open_height)
            .field("should_silent", &self.should_silent)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}
