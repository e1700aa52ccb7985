// src/ports/text.rs
use crate::application::CardListView;
use crate::constants::EMPTY_LIST_TEXT;
use crate::domain::Card;
use std::fmt::Write;

/// Plain terminal listing, one block per card.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_card(&self, card: &Card) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}  [{}]", card.name, card.id);
        for (label, value) in [
            ("Company", card.company.as_str()),
            ("Title", card.title.as_str()),
            ("Email", card.email.as_str()),
            ("Phone", card.phone.as_str()),
        ] {
            let _ = writeln!(out, "  {label}: {value}");
        }
        let _ = writeln!(out, "  Tags: {}", card.tags_line());
        let _ = writeln!(out, "  Image: {}", card.image_url);
        out
    }

    pub fn render(&self, view: &CardListView<'_>) -> String {
        if view.total == 0 {
            return format!("{EMPTY_LIST_TEXT}\n");
        }
        if view.visible.is_empty() {
            return format!("No cards match '{}'.\n", view.search);
        }
        view.visible
            .iter()
            .map(|card| self.render_card(card))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
