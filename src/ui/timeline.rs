/// Sidebar timeline over the speaker list
///
/// Every speaker gets a derived slot time: the first talk starts at
/// 14:00 and each speaker takes one hour. The entries are clickable
/// and toggle the selection like the header chips do.

use chrono::{Duration, NaiveTime};
use iced::widget::{button, column, text, Column};
use iced::{Element, Length};

use crate::state::data::Speaker;
use crate::state::selection::Selection;
use crate::Message;

/// Hour of the first talk slot
const FIRST_SLOT_HOUR: i64 = 14;

/// The HH:MM slot time for the speaker at `index`
pub fn slot_time(index: usize) -> String {
    let time = NaiveTime::MIN + Duration::hours(FIRST_SLOT_HOUR + index as i64);
    time.format("%H:%M").to_string()
}

pub fn view<'a>(speakers: &'a [Speaker], selection: &Selection) -> Element<'a, Message> {
    if speakers.is_empty() {
        return text("No speakers yet.").size(14).into();
    }

    let mut entries = Column::new().spacing(10);
    for (index, speaker) in speakers.iter().enumerate() {
        let marker = if selection.is_selected(&speaker.id) {
            "●"
        } else {
            "○"
        };

        let mut entry = column![
            text(format!("{}  {}", slot_time(index), marker)).size(13),
            text(&speaker.name).size(16),
            text(&speaker.role).size(13),
        ]
        .spacing(2);
        if !speaker.tags.is_empty() {
            entry = entry.push(text(speaker.tags.join(" · ")).size(12));
        }

        entries = entries.push(
            button(entry)
                .style(button::text)
                .width(Length::Fill)
                .on_press(Message::SpeakerSelected(speaker.id.clone())),
        );
    }

    entries.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_times_start_at_two_pm() {
        assert_eq!(slot_time(0), "14:00");
        assert_eq!(slot_time(1), "15:00");
        assert_eq!(slot_time(3), "17:00");
    }

    #[test]
    fn test_slot_times_wrap_past_midnight() {
        // A 12th speaker would present at 02:00; absurd but well-defined
        assert_eq!(slot_time(12), "02:00");
    }
}
