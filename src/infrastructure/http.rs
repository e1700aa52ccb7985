// src/infrastructure/http.rs
use crate::application::CardRepository;
use crate::constants::CARDS_PATH;
use crate::domain::{Card, CardDraft, DomainError};
use anyhow::{Context, Result};
use reqwest::blocking::{multipart::Form, Client};
use reqwest::{StatusCode, Url};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Cards API client.
///
/// Requests carry no timeout and are never retried.
#[derive(Debug, Clone)]
pub struct HttpCardRepository {
    client: Client,
    base_url: String,
    cards_url: Url,
}

impl HttpCardRepository {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;

        let mut cards_url = Url::parse(base_url)
            .with_context(|| format!("Invalid base URL: {}", base_url))?;
        cards_url
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Base URL cannot hold a path: {}", base_url))?
            .pop_if_empty()
            .extend(CARDS_PATH);

        let base_url = base_url.trim_end_matches('/').to_string();
        debug!(%base_url, %cards_url, "Created HttpCardRepository");
        Ok(Self {
            client,
            base_url,
            cards_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn cards_url(&self) -> Url {
        self.cards_url.clone()
    }

    /// The id becomes a single percent-encoded path segment
    fn card_url(&self, id: &str) -> Url {
        let mut url = self.cards_url();
        // Checked in new(): the base URL accepts path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        url
    }

    fn build_form(draft: &CardDraft, image: &Path) -> Result<Form> {
        let mut form = Form::new()
            .file("image", image)
            .with_context(|| format!("Failed to read image {}", image.display()))?;
        for (key, value) in draft.fields() {
            form = form.text(key, value.to_string());
        }
        Ok(form)
    }
}

impl CardRepository for HttpCardRepository {
    #[instrument(level = "debug", skip(self, draft))]
    fn create_card(&mut self, draft: &CardDraft, image: &Path) -> Result<Card, DomainError> {
        let form = Self::build_form(draft, image)
            .map_err(|e| DomainError::UploadFailed(format!("{:#}", e)))?;

        let response = self
            .client
            .post(self.cards_url())
            .multipart(form)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| DomainError::UploadFailed(e.to_string()))?;

        let card: Card = response
            .json()
            .map_err(|e| DomainError::UploadFailed(format!("Invalid card response: {}", e)))?;

        info!(id = %card.id, "Created card");
        Ok(card)
    }

    #[instrument(level = "debug", skip(self))]
    fn list_cards(&mut self) -> Result<Vec<Card>, DomainError> {
        let response = self
            .client
            .get(self.cards_url())
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| DomainError::ListFailed(e.to_string()))?;

        let cards: Vec<Card> = response
            .json()
            .map_err(|e| DomainError::ListFailed(format!("Invalid card list: {}", e)))?;

        debug!(count = cards.len(), "Fetched cards");
        Ok(cards)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_card(&mut self, id: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.card_url(id))
            .send()
            .map_err(|e| DomainError::DeleteFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::CardNotFound(id.to_string()));
        }
        response
            .error_for_status()
            .map_err(|e| DomainError::DeleteFailed(e.to_string()))?;

        info!(id, "Deleted card");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_trailing_slash_when_creating_then_urls_are_normalized() {
        let repo = HttpCardRepository::new("http://localhost:5000/").unwrap();

        assert_eq!(repo.base_url(), "http://localhost:5000");
        assert_eq!(repo.cards_url().as_str(), "http://localhost:5000/api/cards");
        assert_eq!(
            repo.card_url("abc123").as_str(),
            "http://localhost:5000/api/cards/abc123"
        );
    }

    #[test]
    fn given_base_url_with_prefix_when_creating_then_endpoint_is_appended() {
        let repo = HttpCardRepository::new("http://cards.example.com/v1/").unwrap();

        assert_eq!(repo.cards_url().as_str(), "http://cards.example.com/v1/api/cards");
    }

    #[test]
    fn given_id_with_reserved_characters_when_building_card_url_then_encodes_one_segment() {
        let repo = HttpCardRepository::new("http://localhost:5000").unwrap();

        let url = repo.card_url("a/b?c=1#d");

        assert_eq!(url.as_str(), "http://localhost:5000/api/cards/a%2Fb%3Fc=1%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn given_malformed_base_url_when_creating_then_fails() {
        assert!(HttpCardRepository::new("localhost:5000").is_err());
        assert!(HttpCardRepository::new("not a url").is_err());
    }

    #[test]
    fn given_missing_image_file_when_building_form_then_fails() {
        let draft = CardDraft::new();

        let result = HttpCardRepository::build_form(&draft, Path::new("/nonexistent/card.png"));

        assert!(result.is_err());
    }
}
