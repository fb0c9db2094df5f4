//! The medicine extractor seam.
//!
//! Production extraction is performed by an external NLP service that turns free-text
//! prescriptions into a medicine list. [`VocabularyExtractor`] stands in for it by spotting the
//! knowledge base's own medicine names in the text.

use crate::EngineResult;
use knowledge::KnowledgeBase;
use medguard_types::{MedicineList, MedicineName};
use regex::Regex;
use std::collections::HashMap;

/// Turns prescription text into a deduplicated, ordered medicine list.
pub trait MedicineExtractor: Send + Sync {
    fn extract(&self, text: &str) -> MedicineList;
}

/// Whole-word, case-insensitive matcher over a fixed vocabulary.
///
/// Matches are reported in order of first occurrence in the text, spelled the way the
/// vocabulary spells them.
#[derive(Debug, Clone)]
pub struct VocabularyExtractor {
    pattern: Option<Regex>,
    canonical: HashMap<String, MedicineName>,
}

impl VocabularyExtractor {
    /// Build an extractor over every medicine name the knowledge base knows.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ExtractorBuild` if the combined pattern cannot be compiled, which
    /// only happens for pathologically large vocabularies.
    pub fn new(kb: &KnowledgeBase) -> EngineResult<Self> {
        Self::from_vocabulary(kb.vocabulary().iter().cloned())
    }

    /// Build an extractor over an explicit vocabulary.
    ///
    /// # Errors
    ///
    /// See [`VocabularyExtractor::new`].
    pub fn from_vocabulary(names: impl IntoIterator<Item = MedicineName>) -> EngineResult<Self> {
        let mut canonical = HashMap::new();
        for name in names {
            canonical.entry(name.key().to_string()).or_insert(name);
        }

        if canonical.is_empty() {
            return Ok(Self {
                pattern: None,
                canonical,
            });
        }

        // Longest first so "Vitamin K2" wins over "Vitamin K" at the same position.
        let mut alternatives: Vec<&MedicineName> = canonical.values().collect();
        alternatives.sort_by(|a, b| {
            b.as_str()
                .len()
                .cmp(&a.as_str().len())
                .then_with(|| a.key().cmp(b.key()))
        });
        let body = alternatives
            .iter()
            .map(|name| regex::escape(name.as_str()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{body})\b"))?;

        Ok(Self {
            pattern: Some(pattern),
            canonical,
        })
    }
}

impl MedicineExtractor for VocabularyExtractor {
    fn extract(&self, text: &str) -> MedicineList {
        let mut found = MedicineList::new();
        let Some(pattern) = &self.pattern else {
            return found;
        };

        for hit in pattern.find_iter(text) {
            let Ok(spotted) = MedicineName::new(hit.as_str()) else {
                continue;
            };
            if let Some(name) = self.canonical.get(spotted.key()) {
                found.push(name.clone());
            }
        }

        tracing::debug!(medicines = found.len(), "medicine extraction complete");
        found
    }
}
