/// Practice board: per-speaker notes with a clipboard export
///
/// Free-text notes are broken into bullet points before rendering.
/// The copy button swaps to a checkmark while the transient copied
/// flag is raised (it reverts on its own after two seconds).

use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::notes::split_to_points;
use crate::state::data::Speaker;
use crate::Message;

pub fn view<'a>(visible: &[&'a Speaker], copied: bool) -> Element<'a, Message> {
    let copy_button = if copied {
        button(text("✅ Copied").size(14)).style(button::success)
    } else {
        button(text("📋 Copy as Markdown").size(14)).style(button::secondary)
    }
    .on_press(Message::CopyPractice);

    let header = row![
        text("Practice & reflections").size(20),
        horizontal_space(),
        copy_button
    ]
    .align_y(Alignment::Center);

    let mut content = column![header].spacing(12);

    if visible.is_empty() {
        return content
            .push(text("No practice notes to show.").size(14))
            .into();
    }

    for &speaker in visible {
        content = content.push(board(speaker));
    }

    content.into()
}

/// One speaker's notes, split into bullet points
fn board<'a>(speaker: &'a Speaker) -> Element<'a, Message> {
    let mut body = column![text(format!("What {} took away", speaker.name)).size(16)].spacing(5);

    body = push_points(body, &speaker.practice);

    if !speaker.development.is_empty() {
        body = body.push(text("Development").size(14));
        body = push_points(body, &speaker.development);
    }

    if !speaker.tags.is_empty() {
        body = body.push(text(speaker.tags.join(" · ")).size(12));
    }

    container(body)
        .style(container::bordered_box)
        .padding(16)
        .width(Length::Fill)
        .into()
}

fn push_points<'a>(mut body: Column<'a, Message>, notes: &[String]) -> Column<'a, Message> {
    for note in notes {
        for point in split_to_points(note) {
            body = body.push(text(format!("• {}", point)).size(14));
        }
    }
    body
}
