//! Maps renderable transcript lines onto ANSI-styled terminal text.

use console_shell_contract::{OutputKind, OutputLine, Renderable, TextLine, TextStyle};
use nu_ansi_term::Color;
use site_content::themes::Theme;

fn hex_color(hex: &str) -> Color {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.len() != 6 {
        return Color::Default;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&raw[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Default,
    }
}

/// Color for a style class under the active theme.
pub fn style_color(theme: &Theme, style: TextStyle) -> Color {
    let hex = match style {
        TextStyle::Default => &theme.colors.text,
        TextStyle::Prompt => &theme.colors.prompt,
        TextStyle::Accent => &theme.colors.accent,
        TextStyle::Success => &theme.colors.success,
        TextStyle::Error => &theme.colors.error,
        TextStyle::Link => &theme.colors.link,
        TextStyle::Muted => &theme.colors.muted,
    };
    hex_color(hex)
}

/// The colored interactive prompt.
pub fn prompt_text(theme: &Theme, prompt: &str) -> String {
    style_color(theme, TextStyle::Prompt).paint(prompt).to_string()
}

fn paint_spans(theme: &Theme, line: &TextLine) -> String {
    line.spans
        .iter()
        .map(|span| style_color(theme, span.style).paint(&span.text).to_string())
        .collect()
}

fn paint_renderable(theme: &Theme, content: &Renderable, base: TextStyle) -> String {
    match content {
        Renderable::Text { text } => text
            .lines()
            .map(|line| style_color(theme, base).paint(line).to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        Renderable::Rich { lines } => lines
            .iter()
            .map(|line| paint_spans(theme, line))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Renders one transcript line for the terminal.
pub fn render_line(theme: &Theme, line: &OutputLine) -> String {
    match line.kind {
        OutputKind::Command => {
            let prompt = line.prompt.as_deref().unwrap_or("$");
            format!(
                "{} {}",
                prompt_text(theme, prompt),
                paint_renderable(theme, &line.content, TextStyle::Default)
            )
        }
        OutputKind::Error => paint_renderable(theme, &line.content, TextStyle::Error),
        OutputKind::Output | OutputKind::System => {
            paint_renderable(theme, &line.content, TextStyle::Default)
        }
    }
}

#[cfg(test)]
mod tests {
    use site_content::themes::{find_theme, DEFAULT_THEME};

    use super::*;

    #[test]
    fn hex_colors_parse_to_rgb() {
        assert_eq!(hex_color("#00ff41"), Color::Rgb(0, 255, 65));
        assert_eq!(hex_color("not-a-color"), Color::Default);
    }

    #[test]
    fn error_lines_use_the_error_palette_slot() {
        let theme = find_theme(DEFAULT_THEME).expect("default theme");
        let line = OutputLine {
            id: 1,
            kind: OutputKind::Error,
            content: Renderable::text("boom"),
            prompt: None,
        };
        let rendered = render_line(theme, &line);
        assert!(rendered.contains("boom"));
    }
}
