// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Animated surfaces take an `alpha` in `0.0..=1.0` so the component can fade
//! them in and out without knowing about colors.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Toast card: themed surface with a colored accent border.
pub fn toast(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(fade(
            palette.background.base.color,
            alpha,
        ))),
        border: Border {
            color: fade(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: fade(shadow::LG.color, alpha),
            ..shadow::LG
        },
        text_color: Some(fade(palette.background.base.text, alpha)),
        ..Default::default()
    }
}

/// Dimmed layer behind the side panel.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Side panel surface.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Bottom separator under the panel header and top-level entries.
pub fn separator(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        ..Default::default()
    }
}

/// Frame around a field's input and trailing buttons.
pub fn field_frame(has_error: bool, disabled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let border_color = if has_error {
            palette::ERROR_500
        } else {
            palette.background.strong.color
        };
        let background = if disabled {
            palette.background.weak.color
        } else {
            palette.background.base.color
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}
