//! Free-form notes, optionally anchored to a verse.
//!
//! A note may carry a quoted verse in `verse`, a structured reference in
//! `book_name`/`chapter`/`verse_number`, both, or neither.

use crate::libs::kv::{JsonCollection, SharedStore};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const NOTES_KEY: &str = "@biblia_app_notes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Free-form quoted verse or reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_number: Option<u32>,
}

impl Note {
    /// A note with a random id, dated now, not attached to any verse.
    pub fn new(title: &str, content: &str) -> Self {
        Note {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            verse: None,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            book_name: None,
            chapter: None,
            verse_number: None,
        }
    }

    /// Anchors the note to `book_name chapter:verse_number`.
    pub fn at_verse(mut self, book_name: &str, chapter: u32, verse_number: u32) -> Self {
        self.book_name = Some(book_name.to_string());
        self.chapter = Some(chapter);
        self.verse_number = Some(verse_number);
        self
    }
}

/// Fields to overwrite on an existing note; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub verse: Option<String>,
    pub book_name: Option<String>,
    pub chapter: Option<u32>,
    pub verse_number: Option<u32>,
}

impl NotePatch {
    fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if self.verse.is_some() {
            note.verse = self.verse;
        }
        if self.book_name.is_some() {
            note.book_name = self.book_name;
        }
        if self.chapter.is_some() {
            note.chapter = self.chapter;
        }
        if self.verse_number.is_some() {
            note.verse_number = self.verse_number;
        }
    }
}

/// Notes, newest first.
pub struct Notes {
    items: JsonCollection<Note>,
}

impl Notes {
    pub fn new(store: SharedStore) -> Result<Self> {
        Ok(Notes {
            items: JsonCollection::load(store, NOTES_KEY)?,
        })
    }

    pub fn all(&self) -> &[Note] {
        self.items.items()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.items.items().iter().find(|n| n.id == id)
    }

    pub fn add(&mut self, note: Note) -> Result<()> {
        self.items.commit(|items| items.insert(0, note))?;
        Ok(())
    }

    /// Merges `patch` into the note with `id`. Returns `false` if absent.
    pub fn update(&mut self, id: &str, patch: NotePatch) -> Result<bool> {
        let Some(index) = self.items.items().iter().position(|n| n.id == id) else {
            return Ok(false);
        };
        self.items.commit(|items| patch.apply(&mut items[index]))?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        self.items.commit(|items| items.retain(|n| n.id != id))?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear()?;
        Ok(())
    }
}
