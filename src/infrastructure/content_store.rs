// Content Store - insertion-ordered owner of every post and story

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::infrastructure::id_generator::ContentIdGenerator;
use crate::models::{Content, ContentId, ContentKind};

/// Exclusive owner of all published content.
///
/// Iteration order is insertion order, which downstream ranking relies on
/// for deterministic tie-breaks. Expired content stays in the store; it is
/// filtered out at query time, never deleted.
#[derive(Debug, Default)]
pub struct ContentStore {
    id_generator: ContentIdGenerator,
    contents: Vec<Content>,
    index: HashMap<ContentId, usize>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            id_generator: ContentIdGenerator::new(),
            contents: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create and store a new piece of content, returning its id.
    pub fn publish(
        &mut self,
        creator: &str,
        published_at: NaiveDateTime,
        description: &str,
        kind: ContentKind,
    ) -> ContentId {
        let id = self.id_generator.next_id(creator);
        let content = Content::new(
            id.clone(),
            creator.to_string(),
            description.to_string(),
            published_at,
            kind,
        );
        self.index.insert(id.clone(), self.contents.len());
        self.contents.push(content);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Content> {
        self.index.get(id).map(|&position| &self.contents[position])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Content> {
        let position = *self.index.get(id)?;
        Some(&mut self.contents[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All content in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Content> {
        self.contents.iter()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn id_generator(&self) -> &ContentIdGenerator {
        &self.id_generator
    }
}
