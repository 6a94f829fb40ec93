// SPDX-License-Identifier: MPL-2.0
//! The iced-facing banner component.
//!
//! [`Shout`] wraps a [`Banner`] with the plumbing an iced application needs:
//! a [`Message`] enum, an `update` that folds pointer events into drag
//! samples, a top-anchored `view`, and a tick subscription that runs only
//! while the banner is on screen.

use crate::announcement::Announcement;
use crate::banner::{Banner, BannerEvent, BannerState, DragSample};
use crate::config::{Config, StatusBar};
use crate::error::Result;
use crate::ui::style::{opacity, palette, shadow, sizing, spacing, typography};
use iced::widget::{column, container, image, mouse_area, row, text, Space};
use iced::{alignment, time, Background, Element, Length, Point, Subscription};
use std::time::{Duration, Instant};

/// Frame cadence for the tick subscription while the banner is active.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Messages produced by the banner surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer pressed on the drag grip.
    GripPressed,
    /// Pointer moved over the grip while pressed.
    PointerMoved(Point),
    /// Pointer released over the grip.
    GripReleased,
    /// Pointer capture lost mid-drag (left the grip while pressed).
    PointerLost,
    /// Tap on the banner body.
    Tapped,
    /// Periodic tick driving the timer and animations.
    Tick(Instant),
}

/// Converts absolute pointer positions into cumulative drag translations.
///
/// The grip reports presses without a position, so the origin is pinned on
/// the first move after a press; releases reuse the last seen translation,
/// matching the gesture's cumulative-offset convention.
#[derive(Debug, Clone, Copy, Default)]
struct GestureTracker {
    pressed: bool,
    origin_y: Option<f32>,
    last_translation: f32,
}

impl GestureTracker {
    fn press(&mut self) -> DragSample {
        self.pressed = true;
        self.origin_y = None;
        self.last_translation = 0.0;
        DragSample::began(0.0)
    }

    fn moved(&mut self, point: Point) -> Option<DragSample> {
        if !self.pressed {
            return None;
        }
        let origin = *self.origin_y.get_or_insert(point.y);
        self.last_translation = point.y - origin;
        Some(DragSample::changed(self.last_translation))
    }

    fn release(&mut self) -> Option<DragSample> {
        self.pressed.then(|| {
            self.pressed = false;
            DragSample::ended(self.last_translation)
        })
    }

    fn lost(&mut self) -> Option<DragSample> {
        self.pressed.then(|| {
            self.pressed = false;
            DragSample::cancelled(self.last_translation)
        })
    }
}

/// A swipe-dismissible notification banner for iced applications.
#[derive(Debug)]
pub struct Shout {
    banner: Banner,
    gesture: GestureTracker,
}

impl Shout {
    /// Creates a hidden banner component.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            banner: Banner::new(config),
            gesture: GestureTracker::default(),
        }
    }

    /// Presents an announcement over the host view.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AlreadyPresented`] while a banner is on screen.
    pub fn present(&mut self, announcement: Announcement, status_bar: StatusBar) -> Result<()> {
        self.banner.present(announcement, status_bar, Instant::now())
    }

    /// Like [`present`](Self::present), with a completion callback invoked
    /// once when the banner leaves the screen.
    pub fn present_with_completion(
        &mut self,
        announcement: Announcement,
        status_bar: StatusBar,
        completion: impl FnOnce() + Send + 'static,
    ) -> Result<()> {
        self.banner
            .present_with_completion(announcement, status_bar, completion, Instant::now())
    }

    /// Handles a banner message.
    ///
    /// Returns [`BannerEvent::Dismissed`] exactly once per presentation, on
    /// the tick where the hide animation completes.
    pub fn update(&mut self, message: Message) -> Option<BannerEvent> {
        let now = Instant::now();
        match message {
            Message::GripPressed => {
                let sample = self.gesture.press();
                self.banner.handle_drag(sample, now);
                None
            }
            Message::PointerMoved(point) => {
                if let Some(sample) = self.gesture.moved(point) {
                    self.banner.handle_drag(sample, now);
                }
                None
            }
            Message::GripReleased => {
                if let Some(sample) = self.gesture.release() {
                    self.banner.handle_drag(sample, now);
                }
                None
            }
            Message::PointerLost => {
                if let Some(sample) = self.gesture.lost() {
                    self.banner.handle_drag(sample, now);
                }
                None
            }
            Message::Tapped => {
                self.banner.tap(now);
                None
            }
            Message::Tick(instant) => self.banner.tick(instant),
        }
    }

    /// Ticks while the banner is active, idle otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.banner.is_active() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the banner, anchored to the top of the host view.
    ///
    /// Returns a zero-sized element while hidden so the overlay can be
    /// composed unconditionally.
    pub fn view(&self) -> Element<'_, Message> {
        let Some(announcement) = self.banner.announcement() else {
            return Space::new().width(0).height(0).into();
        };

        let mut labels = column![text(announcement.title().to_owned())
            .size(typography::TITLE)
            .color(palette::TITLE)]
        .spacing(spacing::XS / 2.0);
        if let Some(subtitle) = announcement.subtitle_text() {
            labels = labels.push(
                text(subtitle.to_owned())
                    .size(typography::SUBTITLE)
                    .color(palette::SUBTITLE),
            );
        }

        let mut content = row![].spacing(spacing::MD).align_y(alignment::Vertical::Center);
        if let Some(handle) = announcement.image_handle() {
            content = content.push(
                image(handle.clone())
                    .width(sizing::IMAGE_SIZE)
                    .height(sizing::IMAGE_SIZE),
            );
        }
        content = content.push(labels);

        let body = mouse_area(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .align_y(alignment::Vertical::Center),
        )
        .on_press(Message::Tapped);

        let indicator = container(Space::new())
            .width(sizing::INDICATOR_WIDTH)
            .height(sizing::INDICATOR_HEIGHT)
            .style(indicator_style);
        let grip = mouse_area(
            container(indicator)
                .width(Length::Fill)
                .height(sizing::GRIP_HEIGHT)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .on_press(Message::GripPressed)
        .on_move(Message::PointerMoved)
        .on_release(Message::GripReleased)
        .on_exit(Message::PointerLost);

        let surface = container(column![body, grip])
            .width(Length::Fill)
            .height(self.banner.height())
            .clip(true)
            .style(surface_style);

        container(surface)
            .width(Length::Fill)
            .align_y(alignment::Vertical::Top)
            .into()
    }

    /// Current lifecycle state of the underlying banner.
    #[must_use]
    pub fn state(&self) -> BannerState {
        self.banner.state()
    }

    /// Whether the banner occupies the screen in any form.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.banner.is_active()
    }

    /// Current presented height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.banner.height()
    }
}

fn surface_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(iced::Color {
            a: opacity::SURFACE,
            ..palette::SURFACE
        })),
        shadow: shadow::SURFACE,
        ..container::Style::default()
    }
}

fn indicator_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::DRAG_INDICATOR)),
        border: iced::Border {
            radius: (sizing::INDICATOR_HEIGHT / 2.0).into(),
            ..iced::Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_pins_origin_on_first_move() {
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.press(), DragSample::began(0.0));

        let first = tracker.moved(Point::new(0.0, 100.0)).unwrap();
        assert_eq!(first.translation, 0.0);

        let second = tracker.moved(Point::new(0.0, 120.0)).unwrap();
        assert_eq!(second.translation, 20.0);

        let end = tracker.release().unwrap();
        assert_eq!(end, DragSample::ended(20.0));
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut tracker = GestureTracker::default();
        assert!(tracker.moved(Point::new(0.0, 50.0)).is_none());
        assert!(tracker.release().is_none());
    }

    #[test]
    fn capture_loss_cancels_with_last_translation() {
        let mut tracker = GestureTracker::default();
        tracker.press();
        tracker.moved(Point::new(0.0, 10.0));
        tracker.moved(Point::new(0.0, 2.0));

        let lost = tracker.lost().unwrap();
        assert_eq!(lost, DragSample::cancelled(-8.0));
        // Capture is gone; the later release is stale.
        assert!(tracker.release().is_none());
    }

    #[test]
    fn update_feeds_drag_samples_into_the_banner() {
        let mut shout = Shout::new(Config::default());
        shout
            .present(Announcement::new("hi"), StatusBar::Visible)
            .unwrap();
        shout.update(Message::Tick(
            Instant::now() + Duration::from_millis(400),
        ));
        assert_eq!(shout.state(), BannerState::Open);

        shout.update(Message::GripPressed);
        shout.update(Message::PointerMoved(Point::new(0.0, 40.0)));
        shout.update(Message::PointerMoved(Point::new(0.0, 48.0)));
        assert_eq!(shout.state(), BannerState::Dragging);
        assert_eq!(shout.height(), 88.0);

        shout.update(Message::GripReleased);
        assert_eq!(shout.state(), BannerState::Open);
    }

    #[test]
    fn upward_grip_flick_dismisses() {
        let mut shout = Shout::new(Config::default());
        shout
            .present(Announcement::new("hi"), StatusBar::Visible)
            .unwrap();
        shout.update(Message::Tick(
            Instant::now() + Duration::from_millis(400),
        ));

        shout.update(Message::GripPressed);
        shout.update(Message::PointerMoved(Point::new(0.0, 40.0)));
        shout.update(Message::PointerMoved(Point::new(0.0, 30.0)));
        shout.update(Message::GripReleased);
        assert_eq!(shout.state(), BannerState::Dismissing);

        let event = shout.update(Message::Tick(
            Instant::now() + Duration::from_millis(300),
        ));
        assert_eq!(event, Some(BannerEvent::Dismissed));
        assert!(!shout.is_active());
    }
}
