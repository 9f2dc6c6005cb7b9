//! Favorite verses with optional tags.
//!
//! Favorites are stored newest first as one JSON array under
//! [`FAVORITES_KEY`]. A verse is identified by book name, chapter and verse
//! number, and can be saved only once; tags are free text and matched without
//! regard to ASCII case.

use crate::libs::formatter::verse_reference;
use crate::libs::kv::{JsonCollection, SharedStore};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const FAVORITES_KEY: &str = "@biblia_app_favorites";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteVerse {
    pub id: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub date_added: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl FavoriteVerse {
    /// A fresh favorite with a random id, stamped with the current UTC time.
    pub fn new(book_name: &str, chapter: u32, verse: u32, text: &str) -> Self {
        FavoriteVerse {
            id: Uuid::new_v4().to_string(),
            book_name: book_name.to_string(),
            chapter,
            verse,
            text: text.to_string(),
            date_added: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            tags: None,
        }
    }

    /// `Juan 3:16`
    pub fn reference(&self) -> String {
        verse_reference(&self.book_name, self.chapter, self.verse)
    }

    fn same_verse(&self, book_name: &str, chapter: u32, verse: u32) -> bool {
        self.book_name == book_name && self.chapter == chapter && self.verse == verse
    }
}

/// Saved verses, newest first. A verse is saved at most once.
pub struct Favorites {
    items: JsonCollection<FavoriteVerse>,
}

impl Favorites {
    pub fn new(store: SharedStore) -> Result<Self> {
        Ok(Favorites {
            items: JsonCollection::load(store, FAVORITES_KEY)?,
        })
    }

    pub fn all(&self) -> &[FavoriteVerse] {
        self.items.items()
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteVerse> {
        self.items.items().iter().find(|f| f.id == id)
    }

    pub fn is_favorite(&self, book_name: &str, chapter: u32, verse: u32) -> bool {
        self.items.items().iter().any(|f| f.same_verse(book_name, chapter, verse))
    }

    /// Saves `favorite` at the front. Returns `false` without touching the
    /// store when the same book, chapter and verse is already saved.
    pub fn add(&mut self, favorite: FavoriteVerse) -> Result<bool> {
        if self.is_favorite(&favorite.book_name, favorite.chapter, favorite.verse) {
            return Ok(false);
        }
        self.items.commit(|items| items.insert(0, favorite))?;
        Ok(true)
    }

    /// Deletes the favorite with `id`. Returns `false` when there is none.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        self.items.commit(|items| items.retain(|f| f.id != id))?;
        Ok(true)
    }

    /// Replaces the tags of one favorite.
    pub fn update_tags(&mut self, id: &str, tags: Vec<String>) -> Result<bool> {
        let Some(index) = self.items.items().iter().position(|f| f.id == id) else {
            return Ok(false);
        };
        self.items.commit(|items| items[index].tags = Some(tags))?;
        Ok(true)
    }

    /// Favorites carrying `tag`, newest first.
    pub fn by_tag(&self, tag: &str) -> Vec<&FavoriteVerse> {
        self.items
            .items()
            .iter()
            .filter(|f| f.tags.as_ref().is_some_and(|tags| tags.iter().any(|t| t.eq_ignore_ascii_case(tag))))
            .collect()
    }

    /// Forgets every favorite.
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear()?;
        Ok(())
    }
}
