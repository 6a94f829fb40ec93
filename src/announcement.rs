// SPDX-License-Identifier: MPL-2.0
//! The announcement data model.
//!
//! An [`Announcement`] describes the content a banner shows: a title, an
//! optional subtitle and image, how long it should stay on screen, and an
//! optional action invoked when the banner is tapped. It is immutable for
//! the lifetime of one banner presentation.

use iced::widget::image::Handle;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default on-screen duration when none is requested.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// Content and behavior of a single banner presentation.
#[derive(Clone)]
pub struct Announcement {
    title: String,
    subtitle: Option<String>,
    image: Option<Handle>,
    duration: Duration,
    action: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Announcement {
    /// Creates an announcement with the given title and the default duration.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            image: None,
            duration: DEFAULT_DURATION,
            action: None,
        }
    }

    /// Sets the subtitle shown below the title.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the image shown on the leading edge of the banner.
    #[must_use]
    pub fn image(mut self, handle: Handle) -> Self {
        self.image = Some(handle);
        self
    }

    /// Sets how long the banner stays on screen before auto-dismissing.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Registers an action to invoke when the banner is tapped.
    ///
    /// The action runs before the dismiss transition begins.
    #[must_use]
    pub fn on_tap(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the subtitle text, if any.
    #[must_use]
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns the image handle, if any.
    #[must_use]
    pub fn image_handle(&self) -> Option<&Handle> {
        self.image.as_ref()
    }

    /// Returns the requested on-screen duration.
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.duration
    }

    /// Invokes the tap action, if one was registered.
    pub(crate) fn invoke_action(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }
}

impl fmt::Debug for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcement")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("has_image", &self.image.is_some())
            .field("duration", &self.duration)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn new_announcement_uses_default_duration() {
        let announcement = Announcement::new("Update available");
        assert_eq!(announcement.display_duration(), DEFAULT_DURATION);
        assert!(announcement.subtitle_text().is_none());
        assert!(announcement.image_handle().is_none());
    }

    #[test]
    fn builder_sets_all_fields() {
        let announcement = Announcement::new("Message")
            .subtitle("from someone")
            .duration(Duration::from_secs(5));

        assert_eq!(announcement.title(), "Message");
        assert_eq!(announcement.subtitle_text(), Some("from someone"));
        assert_eq!(announcement.display_duration(), Duration::from_secs(5));
    }

    #[test]
    fn invoke_action_runs_registered_closure() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let announcement =
            Announcement::new("tap me").on_tap(|| {
                CALLS.fetch_add(1, Ordering::SeqCst);
            });

        announcement.invoke_action();
        announcement.invoke_action();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn invoke_action_without_action_is_a_noop() {
        Announcement::new("no action").invoke_action();
    }

    #[test]
    fn debug_does_not_require_closure_debug() {
        let announcement = Announcement::new("t").on_tap(|| {});
        let rendered = format!("{announcement:?}");
        assert!(rendered.contains("has_action: true"));
    }
}
