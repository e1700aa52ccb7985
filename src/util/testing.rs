// src/util/testing.rs

use anyhow::Result;
use std::collections::HashSet;
use std::env;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::CardRepository;
use crate::domain::{Card, CardDraft, DomainError};

enum CreateBehavior {
    Success(Card),
    Failure,
}

/// Shared mock repository for testing use cases that depend on CardRepository
///
/// Records how often each operation was invoked so tests can assert that no
/// request went out.
///
/// # Examples
///
/// ```
/// use cardbox::util::testing::{sample_card, MockCardRepository};
///
/// let mock = MockCardRepository::builder()
///     .with_card(sample_card("1", "Ann"))
///     .with_create_result(sample_card("2", "Bob"))
///     .with_delete_success("1")
///     .build();
/// assert_eq!(mock.create_calls(), 0);
/// ```
pub struct MockCardRepository {
    cards: Vec<Card>,
    create_behavior: Option<CreateBehavior>,
    deletable: HashSet<String>,
    list_fails: bool,
    create_calls: usize,
    list_calls: usize,
    deleted: Vec<String>,
}

impl MockCardRepository {
    pub fn builder() -> MockCardRepositoryBuilder {
        MockCardRepositoryBuilder::new()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls
    }

    /// Identifiers passed to delete_card, in call order
    pub fn deleted(&self) -> &[String] {
        &self.deleted
    }
}

impl CardRepository for MockCardRepository {
    fn create_card(&mut self, draft: &CardDraft, image: &Path) -> Result<Card, DomainError> {
        self.create_calls += 1;
        debug!(?image, name = draft.get(crate::domain::CardField::Name), "Mock create");
        match &self.create_behavior {
            Some(CreateBehavior::Success(card)) => Ok(card.clone()),
            Some(CreateBehavior::Failure) => {
                Err(DomainError::UploadFailed("mock upload failure".to_string()))
            }
            None => Err(DomainError::UploadFailed(
                "no create result configured".to_string(),
            )),
        }
    }

    fn list_cards(&mut self) -> Result<Vec<Card>, DomainError> {
        self.list_calls += 1;
        if self.list_fails {
            return Err(DomainError::ListFailed("mock list failure".to_string()));
        }
        Ok(self.cards.clone())
    }

    fn delete_card(&mut self, id: &str) -> Result<(), DomainError> {
        self.deleted.push(id.to_string());
        if self.deletable.contains(id) {
            Ok(())
        } else {
            Err(DomainError::CardNotFound(id.to_string()))
        }
    }
}

/// Builder for MockCardRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockCardRepositoryBuilder {
    cards: Vec<Card>,
    create_behavior: Option<CreateBehavior>,
    deletable: HashSet<String>,
    list_fails: bool,
}

impl MockCardRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            create_behavior: None,
            deletable: HashSet::new(),
            list_fails: false,
        }
    }

    /// Add a card returned by list_cards
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Configure create_card to succeed with this card
    pub fn with_create_result(mut self, card: Card) -> Self {
        self.create_behavior = Some(CreateBehavior::Success(card));
        self
    }

    pub fn with_create_failure(mut self) -> Self {
        self.create_behavior = Some(CreateBehavior::Failure);
        self
    }

    /// Configure delete_card to succeed for a specific ID; all others fail
    pub fn with_delete_success(mut self, id: &str) -> Self {
        self.deletable.insert(id.to_string());
        self
    }

    pub fn with_list_failure(mut self) -> Self {
        self.list_fails = true;
        self
    }

    pub fn build(self) -> MockCardRepository {
        MockCardRepository {
            cards: self.cards,
            create_behavior: self.create_behavior,
            deletable: self.deletable,
            list_fails: self.list_fails,
            create_calls: 0,
            list_calls: 0,
            deleted: Vec::new(),
        }
    }
}

impl Default for MockCardRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully populated card for tests
pub fn sample_card(id: &str, name: &str) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        company: format!("{name} Corp"),
        title: "Engineer".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".to_string(),
        tags: vec!["contact".to_string()],
        image_url: format!("http://localhost:5000/uploads/{id}.png"),
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "axum"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
