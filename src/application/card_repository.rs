// src/application/card_repository.rs
use crate::domain::{Card, CardDraft, DomainError};
use std::path::Path;

/// Remote store of business cards.
pub trait CardRepository {
    /// Upload a validated draft together with its image and return the stored card
    fn create_card(&mut self, draft: &CardDraft, image: &Path) -> Result<Card, DomainError>;

    fn list_cards(&mut self) -> Result<Vec<Card>, DomainError>;

    /// Remove a card by identifier
    fn delete_card(&mut self, id: &str) -> Result<(), DomainError>;
}
