use std::cell::RefCell;
use std::collections::HashMap;

use flagpost_dom::Document;
use serde::{Deserialize, Serialize};

use crate::FlagpostResult;

/// Article metadata produced by the external content extractor. Built once
/// per page load and consumed during placement only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub body_text: String,
}

/// External content-extraction service. Implementations receive a
/// disconnected snapshot of the page, never the live tree, so the locator
/// can safely run against the original afterwards.
pub trait ArticleExtractor {
    fn extract(&self, snapshot: &Document) -> FlagpostResult<Option<ExtractedArticle>>;
}

/// How many badges each placement strategy produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub title_badges: usize,
    pub comment_badges: usize,
    pub footer_badges: usize,
}

impl PlacementReport {
    pub fn total(&self) -> usize {
        self.title_badges + self.comment_badges + self.footer_badges
    }
}

/// Durable per-origin key/value storage of the host environment.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory storage, used in tests and as the default when the host offers
/// nothing durable.
#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
