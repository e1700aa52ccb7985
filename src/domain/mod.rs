// src/domain/mod.rs
pub mod card;
pub mod error;

pub use card::{parse_tags, Card, CardDraft, CardField};
pub use error::DomainError;
