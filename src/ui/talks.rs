/// Paged talk cards
///
/// Shows the visible speakers two per page: name, role, tags, the
/// one-liner as a quote, then the highlight and tip lists with item
/// counts. The pagination bar only appears when there is more than
/// one page; its buttons disable at the bounds.

use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::data::Speaker;
use crate::state::pager::Pager;
use crate::Message;

pub fn view<'a>(visible: &[&'a Speaker], pager: &Pager) -> Element<'a, Message> {
    if visible.is_empty() {
        return container(text("No talks to show.").size(14))
            .padding(16)
            .into();
    }

    let mut cards = Column::new().spacing(16);
    for &speaker in pager.page_slice(visible) {
        cards = cards.push(card(speaker));
    }

    let mut content = column![text("Talks").size(20), cards].spacing(16);

    let total_pages = pager.total_pages(visible.len());
    if total_pages > 1 {
        let prev = button(text("← Prev").size(14))
            .style(button::secondary)
            .on_press_maybe((pager.page() > 0).then_some(Message::PrevPage));
        let next = button(text("Next →").size(14))
            .style(button::secondary)
            .on_press_maybe((pager.page() + 1 < total_pages).then_some(Message::NextPage));
        let position = text(format!("Page {} of {}", pager.page() + 1, total_pages)).size(14);

        content = content.push(
            row![prev, horizontal_space(), position, horizontal_space(), next]
                .align_y(Alignment::Center),
        );
    }

    content.into()
}

/// One speaker's talk card
fn card<'a>(speaker: &'a Speaker) -> Element<'a, Message> {
    let mut body = column![text(&speaker.name).size(20), text(&speaker.role).size(14)].spacing(4);

    if !speaker.tags.is_empty() {
        body = body.push(text(speaker.tags.join(" · ")).size(12));
    }
    if !speaker.summary.is_empty() {
        body = body.push(text(&speaker.summary).size(14));
    }
    if !speaker.talk.one_liner.is_empty() {
        body = body.push(text(format!("“{}”", speaker.talk.one_liner)).size(15));
    }

    if let Some(section) = bullet_section("Key points", &speaker.talk.highlights) {
        body = body.push(section);
    }
    if let Some(section) = bullet_section("Practical tips", &speaker.talk.tips) {
        body = body.push(section);
    }

    container(body.spacing(8))
        .style(container::bordered_box)
        .padding(16)
        .width(Length::Fill)
        .into()
}

/// A titled bullet list with an item count, or None when empty
fn bullet_section<'a>(title: &str, items: &'a [String]) -> Option<Element<'a, Message>> {
    if items.is_empty() {
        return None;
    }

    let mut section = column![text(format!("{} ({})", title, items.len())).size(15)].spacing(3);
    for item in items {
        section = section.push(text(format!("• {}", item)).size(14));
    }

    Some(section.into())
}
