// src/domain/card.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A stored business card as returned by the cards API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

impl Card {
    /// Tags as displayed and searched: joined with ", "
    pub fn tags_line(&self) -> String {
        self.tags.join(", ")
    }

    /// Case-insensitive substring match against name, company, title and tags.
    ///
    /// An empty term matches every card.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [
            self.name.as_str(),
            self.company.as_str(),
            self.title.as_str(),
            self.tags_line().as_str(),
        ]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }
}

/// Text fields of the upload form, in multipart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Name,
    Company,
    Title,
    Email,
    Phone,
    Tags,
}

impl CardField {
    pub const ALL: [CardField; 6] = [
        CardField::Name,
        CardField::Company,
        CardField::Title,
        CardField::Email,
        CardField::Phone,
        CardField::Tags,
    ];

    /// Multipart field name expected by the API
    pub fn key(self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::Company => "company",
            CardField::Title => "title",
            CardField::Email => "email",
            CardField::Phone => "phone",
            CardField::Tags => "tags",
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Client-side upload form state: six text fields and the selected image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    name: String,
    company: String,
    title: String,
    email: String,
    phone: String,
    tags: String,
    image: Option<PathBuf>,
}

impl CardDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: CardField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    pub fn set(&mut self, field: CardField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::Name => &self.name,
            CardField::Company => &self.company,
            CardField::Title => &self.title,
            CardField::Email => &self.email,
            CardField::Phone => &self.phone,
            CardField::Tags => &self.tags,
        }
    }

    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    /// All text fields as (multipart key, value), in form order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        CardField::ALL
            .into_iter()
            .map(move |field| (field.key(), self.get(field)))
    }

    /// Tags as the server will store them
    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    /// Check the draft can be submitted, returning the image to upload.
    ///
    /// The image is checked first: a draft without one is never sent.
    pub fn validate(&self) -> Result<&Path, DomainError> {
        let image = self.image().ok_or(DomainError::MissingImage)?;
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingName);
        }
        Ok(image)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, field: CardField) -> &mut String {
        match field {
            CardField::Name => &mut self.name,
            CardField::Company => &mut self.company,
            CardField::Title => &mut self.title,
            CardField::Email => &mut self.email,
            CardField::Phone => &mut self.phone,
            CardField::Tags => &mut self.tags,
        }
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
