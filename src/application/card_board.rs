// src/application/card_board.rs
use crate::application::{filter_cards, CardRepository};
use crate::domain::{Card, CardDraft, CardField, DomainError};
use std::fmt;
use tracing::{debug, error, info, warn};

/// Outcome shown to the user after an upload, delete or load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    MissingImage,
    MissingName,
    Uploaded,
    UploadFailed,
    Deleted,
    DeleteFailed,
    LoadFailed,
}

impl StatusMessage {
    pub fn is_failure(self) -> bool {
        !matches!(self, StatusMessage::Uploaded | StatusMessage::Deleted)
    }

    /// Validation message for a draft that cannot be submitted
    pub fn for_invalid(draft: &CardDraft) -> Option<StatusMessage> {
        match draft.validate() {
            Ok(_) => None,
            Err(DomainError::MissingName) => Some(StatusMessage::MissingName),
            Err(_) => Some(StatusMessage::MissingImage),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusMessage::MissingImage => "Please select an image!",
            StatusMessage::MissingName => "Please enter a name!",
            StatusMessage::Uploaded => "Card uploaded successfully!",
            StatusMessage::UploadFailed => "Failed to upload card.",
            StatusMessage::Deleted => "Card deleted",
            StatusMessage::DeleteFailed => "Failed to delete card",
            StatusMessage::LoadFailed => "Failed to load cards.",
        };
        f.write_str(text)
    }
}

/// What a presenter needs to draw the list.
#[derive(Debug, Clone)]
pub struct CardListView<'a> {
    pub visible: Vec<&'a Card>,
    /// Number of cards before filtering
    pub total: usize,
    pub search: &'a str,
    pub message: Option<StatusMessage>,
}

/// The card list view: fetched cards, the current search term and the
/// last status message.
pub struct CardBoard<R: CardRepository> {
    repository: R,
    cards: Vec<Card>,
    search: String,
    message: Option<StatusMessage>,
}

impl<R: CardRepository> CardBoard<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            cards: Vec::new(),
            search: String::new(),
            message: None,
        }
    }

    /// Start from an already known list, e.g. one fetched earlier
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Replace the displayed list with the remote one.
    ///
    /// On failure the list is left as it was; the error is logged and
    /// surfaced as [`StatusMessage::LoadFailed`].
    pub fn load(&mut self) -> Result<(), DomainError> {
        match self.repository.list_cards() {
            Ok(cards) => {
                debug!(count = cards.len(), "Loaded cards");
                self.cards = cards;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error fetching cards");
                self.message = Some(StatusMessage::LoadFailed);
                Err(e)
            }
        }
    }

    /// Submit the upload form.
    ///
    /// Nothing is sent unless the draft validates. A successful upload puts the
    /// new card at the top of the list and clears the draft.
    pub fn submit(&mut self, draft: &mut CardDraft) -> StatusMessage {
        let status = match draft.validate() {
            Err(e) => {
                warn!(error = %e, "Upload blocked");
                StatusMessage::for_invalid(draft).unwrap_or(StatusMessage::MissingImage)
            }
            Ok(image) => {
                debug!(name = %draft.get(CardField::Name), tags = ?draft.tag_list(), "Uploading card");
                match self.repository.create_card(draft, image) {
                    Ok(card) => {
                        info!(id = %card.id, name = %card.name, "Card uploaded");
                        self.cards.insert(0, card);
                        StatusMessage::Uploaded
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to upload card");
                        StatusMessage::UploadFailed
                    }
                }
            }
        };

        if status == StatusMessage::Uploaded {
            draft.reset();
        }
        self.message = Some(status);
        status
    }

    /// Delete a card remotely and drop it from the list.
    pub fn delete(&mut self, id: &str) -> StatusMessage {
        let status = match self.repository.delete_card(id) {
            Ok(()) => {
                if let Some(pos) = self.cards.iter().position(|card| card.id == id) {
                    self.cards.remove(pos);
                }
                info!(id, "Card deleted");
                StatusMessage::Deleted
            }
            Err(e) => {
                error!(id, error = %e, "Error deleting card");
                StatusMessage::DeleteFailed
            }
        };
        self.message = Some(status);
        status
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Cards matching the current search term
    pub fn visible(&self) -> Vec<&Card> {
        filter_cards(&self.cards, &self.search)
    }

    /// Snapshot handed to presenters
    pub fn view(&self) -> CardListView<'_> {
        CardListView {
            visible: self.visible(),
            total: self.cards.len(),
            search: &self.search,
            message: self.message,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn message(&self) -> Option<StatusMessage> {
        self.message
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
