use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::flows::NoticeKind;

/// Colours used by the renderer, overridable via `[theme]` in `config.toml`.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub title: Color,
    pub text_primary: Color,
    pub text_secondary: Color,

    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub prompt_label: Color,

    pub status_pending: Color,
    pub status_completed: Color,

    pub notice_success: Color,
    pub notice_error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            title: Color::Cyan,
            text_primary: Color::White,
            text_secondary: Color::DarkGray,

            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
            prompt_label: Color::Yellow,

            status_pending: Color::Yellow,
            status_completed: Color::Green,

            notice_success: Color::Green,
            notice_error: Color::Red,
        }
    }
}

impl Theme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_key_style(&self) -> Style {
        Style::default().fg(self.title)
    }

    pub fn hint_desc_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn status_style(&self, completed: bool) -> Style {
        let color = if completed {
            self.status_completed
        } else {
            self.status_pending
        };
        Style::default().fg(color)
    }

    pub fn notice_style(&self, kind: NoticeKind) -> Style {
        let color = match kind {
            NoticeKind::Success => self.notice_success,
            NoticeKind::Error => self.notice_error,
        };
        Style::default().fg(color)
    }
}

// ── Config deserialization ────────────────────────────────────────────

/// All-optional mirror of [`Theme`]; only the fields that are set override
/// the defaults.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub border: Option<String>,
    pub title: Option<String>,
    pub text_primary: Option<String>,
    pub text_secondary: Option<String>,
    pub highlight_fg: Option<String>,
    pub highlight_bg: Option<String>,
    pub prompt_label: Option<String>,
    pub status_pending: Option<String>,
    pub status_completed: Option<String>,
    pub notice_success: Option<String>,
    pub notice_error: Option<String>,
}

/// Parse `"cyan"`, `"dark_gray"`, `"#ff8800"` or `"rgb(255,136,0)"`.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        return Some(Color::Rgb(r, g, b));
    }
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    match s.to_lowercase().replace('-', "_").as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "light_red" | "lightred" => Some(Color::LightRed),
        "light_green" | "lightgreen" => Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => Some(Color::LightYellow),
        "light_blue" | "lightblue" => Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

fn apply(target: &mut Color, source: Option<&String>) {
    if let Some(s) = source {
        match parse_color(s) {
            Some(color) => *target = color,
            None => tracing::warn!("ignoring unknown theme colour {s:?}"),
        }
    }
}

impl ThemeConfig {
    pub fn build(&self) -> Theme {
        let mut t = Theme::default();

        apply(&mut t.border, self.border.as_ref());
        apply(&mut t.title, self.title.as_ref());
        apply(&mut t.text_primary, self.text_primary.as_ref());
        apply(&mut t.text_secondary, self.text_secondary.as_ref());
        apply(&mut t.highlight_fg, self.highlight_fg.as_ref());
        apply(&mut t.highlight_bg, self.highlight_bg.as_ref());
        apply(&mut t.prompt_label, self.prompt_label.as_ref());
        apply(&mut t.status_pending, self.status_pending.as_ref());
        apply(&mut t.status_completed, self.status_completed.as_ref());
        apply(&mut t.notice_success, self.notice_success.as_ref());
        apply(&mut t.notice_error, self.notice_error.as_ref());

        t
    }
}
