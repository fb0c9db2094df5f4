//! Pairwise interaction detection.
//!
//! Candidate pairs are generated as `(list[i], list[j])` for every `i < j`, so a list of `n`
//! distinct medicines yields exactly `n * (n - 1) / 2` candidates in a fixed order. Detected
//! records keep that order; nothing here sorts by severity.

use knowledge::{InteractionRecord, KnowledgeBase};
use medguard_types::{DrugPairKey, MedicineName};

/// Every unordered pair of distinct medicines, outer medicine first.
///
/// Entries that repeat an earlier medicine (under case-insensitive identity) cannot form a pair
/// with it and are skipped.
pub fn candidate_pairs(medicines: &[MedicineName]) -> Vec<DrugPairKey> {
    let mut pairs = Vec::with_capacity(medicines.len() * medicines.len().saturating_sub(1) / 2);
    for (i, outer) in medicines.iter().enumerate() {
        for inner in &medicines[i + 1..] {
            if let Ok(pair) = DrugPairKey::new(outer.clone(), inner.clone()) {
                pairs.push(pair);
            }
        }
    }
    pairs
}

/// Resolve every candidate pair against the knowledge base.
///
/// Each returned record is oriented like its candidate pair, so `pair.first()` is the medicine
/// that appears earlier in `medicines`, spelled as it was supplied.
pub fn detect_interactions(
    kb: &KnowledgeBase,
    medicines: &[MedicineName],
) -> Vec<InteractionRecord> {
    let candidates = candidate_pairs(medicines);
    let detected: Vec<InteractionRecord> = candidates
        .iter()
        .filter_map(|pair| kb.lookup_interaction(pair).map(|record| record.oriented(pair)))
        .collect();

    tracing::debug!(
        medicines = medicines.len(),
        candidates = candidates.len(),
        detected = detected.len(),
        "interaction detection complete"
    );
    detected
}
