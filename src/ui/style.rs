// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the banner surface.
//!
//! A small, fixed palette and sizing scale; the banner deliberately does not
//! theme itself against the host palette beyond text contrast.

use iced::{Color, Shadow, Vector};

pub mod palette {
    use super::Color;

    pub const SURFACE: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const TITLE: Color = Color::from_rgb(0.96, 0.96, 0.96);
    pub const SUBTITLE: Color = Color::from_rgb(0.72, 0.72, 0.75);
    pub const DRAG_INDICATOR: Color = Color::from_rgb(0.45, 0.45, 0.48);
}

pub mod opacity {
    /// Background alpha of the banner surface.
    pub const SURFACE: f32 = 0.98;
}

pub mod sizing {
    /// Height of the drag grip strip along the banner's bottom edge.
    pub const GRIP_HEIGHT: f32 = 20.0;
    pub const INDICATOR_WIDTH: f32 = 50.0;
    pub const INDICATOR_HEIGHT: f32 = 6.0;
    pub const IMAGE_SIZE: f32 = 48.0;
}

pub mod spacing {
    pub const XS: f32 = 5.0;
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 18.0;
}

pub mod typography {
    pub const TITLE: f32 = 15.0;
    pub const SUBTITLE: f32 = 13.0;
}

pub mod shadow {
    use super::{Color, Shadow, Vector};

    pub const SURFACE: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 0.5),
        blur_radius: 0.5,
    };
}
