/// Event banner and speaker chips
///
/// The chip row mirrors the timeline: clicking a chip toggles the
/// selection, clicking the selected chip again shows everyone.

use chrono::NaiveDate;
use iced::widget::{button, column, text};
use iced::Element;
use iced_aw::Wrap;

use crate::state::data::{EventInfo, Speaker};
use crate::state::selection::Selection;
use crate::Message;

/// The event date spelled out, or the raw string when it is not ISO-formatted
fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn view<'a>(
    event: &'a EventInfo,
    speakers: &'a [Speaker],
    selection: &Selection,
) -> Element<'a, Message> {
    let date = display_date(&event.date);
    let meta_line = [date.as_str(), event.time.as_str(), event.place.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    let agenda_line = event.agenda.join("  →  ");

    let mut chips: Vec<Element<'a, Message>> = Vec::new();
    for speaker in speakers {
        let style = if selection.is_selected(&speaker.id) {
            button::primary
        } else {
            button::secondary
        };
        chips.push(
            button(text(&speaker.name).size(14))
                .style(style)
                .on_press(Message::SpeakerSelected(speaker.id.clone()))
                .into(),
        );
    }
    chips.push(
        button(text("🔗 Share").size(14))
            .style(button::secondary)
            .on_press(Message::ShareEvent)
            .into(),
    );

    let mut header = column![text(&event.title).size(28)].spacing(6);
    if !meta_line.is_empty() {
        header = header.push(text(meta_line).size(14));
    }
    if !agenda_line.is_empty() {
        header = header.push(text(agenda_line).size(13));
    }

    header
        .push(Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0))
        .into()
}
