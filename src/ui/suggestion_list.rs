use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::SuggestConfig;
use crate::core::tag::Tag;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};

/// Draws the suggestion dropdown: a header, then one `<prefix><name>` row per
/// tag. Nothing is drawn when there are no suggestions.
pub fn render_suggestions(tags: &[Tag], config: &SuggestConfig) -> Vec<SpanLine> {
    if tags.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(tags.len() + 1);
    lines.push(vec![Span::styled(
        fit_width(&config.header, config.max_width),
        Style::new().color(Color::DarkGrey),
    )]);

    for tag in tags {
        let row = fit_width(&format!("{}{}", config.prefix, tag.name), config.max_width);
        // Keep the prefix dim and the name bright when both survive truncation.
        match row.strip_prefix(config.prefix.as_str()) {
            Some(name) => lines.push(vec![
                Span::styled(config.prefix.clone(), Style::new().color(Color::DarkGrey)),
                Span::styled(name, Style::new().color(Color::Cyan).bold()),
            ]),
            None => lines.push(vec![Span::styled(row, Style::new().color(Color::Cyan))]),
        }
    }

    lines
}

/// Cuts `text` to at most `max_width` terminal columns, ending in `…` when
/// anything was dropped.
fn fit_width(text: &str, max_width: Option<usize>) -> String {
    let Some(max_width) = max_width else {
        return text.to_string();
    };
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{fit_width, render_suggestions};
    use crate::config::SuggestConfig;
    use crate::core::tag::Tag;
    use crate::ui::span::line_text;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn no_suggestions_draw_nothing() {
        assert!(render_suggestions(&[], &SuggestConfig::default()).is_empty());
    }

    #[test]
    fn header_then_prefixed_rows() {
        let tags = [Tag::new("t1", "work"), Tag::new("t2", "workout")];
        let lines = render_suggestions(&tags, &SuggestConfig::default());
        let text = lines.iter().map(|line| line_text(line)).collect::<Vec<_>>();
        assert_eq!(text, vec!["Search by Tag", "tag:work", "tag:workout"]);
        assert_eq!(lines[1][1].text, "work");
        assert!(lines[1][1].style.bold);
    }

    #[test]
    fn rows_are_truncated_to_width() {
        let config = SuggestConfig {
            max_width: Some(8),
            ..SuggestConfig::default()
        };
        let tags = [Tag::new("t1", "groceries")];
        let lines = render_suggestions(&tags, &config);
        assert_eq!(line_text(&lines[1]), "tag:gro…");
        assert_eq!(line_text(&lines[0]), "Search …");
    }

    #[test]
    fn truncation_counts_wide_characters() {
        let out = fit_width("日本語タグ", Some(6));
        assert_eq!(out, "日本…");
        assert!(out.width() <= 6);
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(fit_width("work", Some(4)), "work");
        assert_eq!(fit_width("work", None), "work");
    }

    #[test]
    fn prefix_cut_by_truncation_stays_one_span() {
        let config = SuggestConfig {
            max_width: Some(3),
            ..SuggestConfig::default()
        };
        let lines = render_suggestions(&[Tag::new("t1", "work")], &config);
        assert_eq!(lines[1].len(), 1);
        assert_eq!(line_text(&lines[1]), "ta…");
    }
}
