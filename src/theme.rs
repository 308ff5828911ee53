use crossterm::style::{Attribute, Color, Stylize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// No escape codes at all
    #[default]
    Plain,
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    /// Removed (expected) lines and annotation
    pub a: Option<Color>,
    /// Added (received) lines and annotation
    pub b: Option<Color>,
    pub common_dim: bool,
    /// Hunk header
    pub patch: Option<Color>,
    // Background for whitespace at the end of a line
    pub trailing_space: Option<Color>,
}

impl Theme {
    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Plain => ColorScheme {
                a: None,
                b: None,
                common_dim: false,
                patch: None,
                trailing_space: None,
            },
            Theme::Dark => ColorScheme {
                a: Some(Color::Green),
                b: Some(Color::Red),
                common_dim: true,
                patch: Some(Color::Yellow),
                trailing_space: Some(Color::Rgb {
                    r: 100,
                    g: 100,
                    b: 50,
                }),
            },
            Theme::Light => ColorScheme {
                a: Some(Color::DarkGreen),
                b: Some(Color::DarkRed),
                common_dim: true,
                patch: Some(Color::DarkYellow),
                trailing_space: Some(Color::Rgb {
                    r: 240,
                    g: 230,
                    b: 140,
                }),
            },
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Theme::Plain)
    }
}

/// Paint `text` in a foreground color, optionally dimmed.
/// Returns the text untouched when there is nothing to apply.
pub fn paint(text: String, color: Option<Color>, dim: bool) -> String {
    if color.is_none() && !dim {
        return text;
    }
    let mut styled = text.stylize();
    if let Some(color) = color {
        styled = styled.with(color);
    }
    if dim {
        styled = styled.attribute(Attribute::Dim);
    }
    styled.to_string()
}

/// Paint `text` on a background color.
pub fn paint_background(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) if !text.is_empty() => text.on(color).to_string(),
        _ => text.to_string(),
    }
}
