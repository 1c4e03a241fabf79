// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_parts::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_parts::ui::notifications::Kind;
    use iced_parts::ui::styles::{button, container};

    #[test]
    fn all_button_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::ghost(&theme, status);
                let _ = button::menu_entry(&theme, status);
            }
        }
    }

    #[test]
    fn toast_border_uses_kind_color() {
        let theme = Theme::Dark;
        for kind in [Kind::Success, Kind::Error, Kind::Warning, Kind::Info] {
            let style = container::toast(&theme, kind.color(), 1.0);
            assert_eq!(style.border.color, kind.color());
        }
    }

    #[test]
    fn hidden_toast_is_fully_transparent() {
        let style = container::toast(&Theme::Light, palette::SUCCESS_500, 0.0);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.0),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn backdrop_reaches_token_opacity_when_shown() {
        let style = container::backdrop(1.0)(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::BACKDROP),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn field_frame_error_differs_from_normal() {
        let theme = Theme::Light;
        let normal = container::field_frame(false, false)(&theme);
        let error = container::field_frame(true, false)(&theme);
        assert_ne!(normal.border.color, error.border.color);
    }

    #[test]
    fn panel_fits_indent_levels() {
        // Four nesting levels still leave room for labels
        assert!(sizing::PANEL_WIDTH > 4.0 * sizing::PANEL_INDENT + spacing::LG * 4.0);
    }
}
