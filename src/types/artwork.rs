//! Art gallery records
//!
//! Artworks are submitted by visitors from the gallery page.

use super::{
    current_year, has_first_image, images_from_legacy, lenient_images, lenient_optional,
    lenient_text, non_blank, optional, Record, RecordId,
};
use serde::{Deserialize, Serialize};

/// A submitted artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: RecordId,
    pub title: String,
    pub artist: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// An artwork as found in storage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredArtwork {
    Current(CurrentArtwork),
    Legacy(LegacyArtwork),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentArtwork {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub artist: String,
    #[serde(deserialize_with = "lenient_images")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub medium: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub dimensions: Option<String>,
}

/// Shape written by the first gallery version: one `image` string and
/// empty strings instead of missing fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyArtwork {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub artist: String,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub medium: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub dimensions: Option<String>,
}

impl From<Artwork> for StoredArtwork {
    fn from(artwork: Artwork) -> Self {
        StoredArtwork::Current(CurrentArtwork {
            id: artwork.id,
            title: artwork.title,
            artist: artwork.artist,
            images: artwork.images,
            description: artwork.description,
            year: artwork.year,
            medium: artwork.medium,
            dimensions: artwork.dimensions,
        })
    }
}

/// A single-field change to an artwork
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkEdit {
    Title(String),
    Artist(String),
    Images(Vec<String>),
    Description(String),
    Year(String),
    Medium(String),
    Dimensions(String),
}

impl Artwork {
    /// Empty artwork for the submission form
    pub fn draft() -> Self {
        Self {
            id: 0,
            title: String::new(),
            artist: String::new(),
            images: Vec::new(),
            description: String::new(),
            year: Some(current_year()),
            medium: None,
            dimensions: None,
        }
    }
}

impl Record for Artwork {
    type Stored = StoredArtwork;
    type Edit = ArtworkEdit;

    const STORAGE_KEY: &'static str = "art_gallery";
    const KIND: &'static str = "artwork";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn migrate(stored: StoredArtwork) -> Self {
        match stored {
            StoredArtwork::Current(a) => Artwork {
                id: a.id,
                title: a.title,
                artist: a.artist,
                images: a.images,
                description: a.description,
                year: a.year,
                medium: a.medium,
                dimensions: a.dimensions,
            },
            StoredArtwork::Legacy(a) => Artwork {
                id: a.id,
                title: a.title,
                artist: a.artist,
                images: images_from_legacy(a.image),
                description: a.description,
                year: a.year.and_then(optional),
                medium: a.medium.and_then(optional),
                dimensions: a.dimensions.and_then(optional),
            },
        }
    }

    fn is_complete(&self) -> bool {
        non_blank(&self.title) && non_blank(&self.artist) && has_first_image(&self.images)
    }

    fn apply(&mut self, edit: ArtworkEdit) {
        match edit {
            ArtworkEdit::Title(title) => self.title = title,
            ArtworkEdit::Artist(artist) => self.artist = artist,
            ArtworkEdit::Images(images) => self.images = images,
            ArtworkEdit::Description(description) => self.description = description,
            ArtworkEdit::Year(year) => self.year = optional(year),
            ArtworkEdit::Medium(medium) => self.medium = optional(medium),
            ArtworkEdit::Dimensions(dimensions) => self.dimensions = optional(dimensions),
        }
    }

    /// The gallery starts empty
    fn defaults() -> Vec<Self> {
        Vec::new()
    }
}
