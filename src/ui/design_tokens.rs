// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every component.
//!
//! - **Palette**: base and semantic colors
//! - **Opacity**: standardized alpha levels
//! - **Spacing**: 4px-based spacing scale
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border** / **Radius** / **Shadow**: frame decoration
//!
//! ```
//! use iced_parts::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let backdrop = Color { a: opacity::BACKDROP, ..palette::BLACK };
//! assert!(backdrop.a < 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.50);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);

    // Focus ring / primary accent
    pub const PRIMARY_100: Color = Color::from_rgb(0.86, 0.92, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const ERROR_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
    pub const WARNING_500: Color = Color::from_rgb(0.92, 0.70, 0.03);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const DISABLED: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;

    /// Side panel backdrop when fully shown.
    pub const BACKDROP: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    pub const INPUT_HEIGHT: f32 = 40.0;

    pub const TOAST_WIDTH: f32 = 384.0;
    pub const PANEL_WIDTH: f32 = 320.0;

    /// Extra left padding per nesting level in the side panel.
    pub const PANEL_INDENT: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Panel heading.
    pub const TITLE_MD: f32 = 18.0;

    /// Glyphs in front of toast messages.
    pub const TITLE_SM: f32 = 16.0;

    /// Field input text.
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Tooltips, error hints.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Toast accent stripe.
    pub const WIDTH_LG: f32 = 4.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    pub const XL: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        offset: Vector { x: -4.0, y: 0.0 },
        blur_radius: 24.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::BACKDROP > opacity::TRANSPARENT && opacity::BACKDROP < opacity::OPAQUE);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(sizing::TOAST_WIDTH > sizing::PANEL_INDENT);
};
