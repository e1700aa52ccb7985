// src/application/mod.rs
pub mod card_board;
pub mod card_repository;
pub mod search;

pub use card_board::{CardBoard, CardListView, StatusMessage};
pub use card_repository::CardRepository;
pub use search::filter_cards;
