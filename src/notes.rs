/// Text transforms for notes and clipboard exports
///
/// Practice notes arrive as free text; `split_to_points` turns them into
/// bullet-sized fragments. The markdown builder assembles the clipboard
/// export for the practice board, and the event blurb backs the share
/// action's clipboard fallback.

use crate::state::data::{EventInfo, Speaker};

/// Sentence-ish delimiters: period, full-width period, both semicolon
/// widths, and newline. Content-specific and kept as-is; decimal numbers
/// will mis-split and that matches the source material.
const POINT_DELIMITERS: [char; 5] = ['.', '。', ';', '；', '\n'];

/// Split free text into trimmed, non-empty bullet points
///
/// Pure and total: always returns a list, possibly empty when the input
/// is empty or whitespace-only. Original fragment order is preserved.
pub fn split_to_points(text: &str) -> Vec<String> {
    text.split(POINT_DELIMITERS)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the markdown practice summary for the clipboard
///
/// One `#` heading per speaker in input order, then one bulleted list per
/// non-empty note category (practice first, then development), with blank
/// lines between blocks.
pub fn practice_markdown(speakers: &[&Speaker]) -> String {
    let mut blocks = Vec::new();

    for speaker in speakers {
        blocks.push(format!("# {}", speaker.name));

        for category in [&speaker.practice, &speaker.development] {
            if !category.is_empty() {
                let bullets: Vec<String> =
                    category.iter().map(|note| format!("- {}", note)).collect();
                blocks.push(bullets.join("\n"));
            }
        }
    }

    blocks.join("\n\n")
}

/// Build the plain-text event blurb used by the share action
pub fn event_blurb(event: &EventInfo) -> String {
    let mut lines = vec![event.title.clone()];

    let when_where: Vec<&str> = [event.date.as_str(), event.time.as_str(), event.place.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !when_where.is_empty() {
        lines.push(when_where.join(" · "));
    }

    if !event.agenda.is_empty() {
        lines.push(String::new());
        for item in &event.agenda {
            lines.push(format!("- {}", item));
        }
    }

    lines.join("\n")
}
