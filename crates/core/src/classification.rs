//! Display framing for free-text dosage recommendations.
//!
//! The knowledge base stores recommendations as opaque text. Front ends frame them by keyword
//! containment; adjustment keywords are checked before contraindication keywords.

use crate::constants::{ADJUSTMENT_KEYWORDS, CONTRAINDICATION_KEYWORDS};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecommendationKind {
    DosageAdjustment,
    Contraindication,
    ClinicalNote,
}

impl RecommendationKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationKind::DosageAdjustment => "Dosage adjustment needed",
            RecommendationKind::Contraindication => "Contraindication",
            RecommendationKind::ClinicalNote => "Clinical note",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify recommendation text by case-insensitive keyword containment.
pub fn classify_recommendation(text: &str) -> RecommendationKind {
    let lowered = text.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

    if mentions(ADJUSTMENT_KEYWORDS) {
        RecommendationKind::DosageAdjustment
    } else if mentions(CONTRAINDICATION_KEYWORDS) {
        RecommendationKind::Contraindication
    } else {
        RecommendationKind::ClinicalNote
    }
}
