//! The immutable knowledge base value and its lookups.

use crate::records::{AgeBand, AlternativeMapping, DosageRule, InteractionRecord};
use crate::{wire, KnowledgeError, KnowledgeResult, DEFAULT_KNOWLEDGE_BASE_YAML};
use medguard_types::{DrugPairKey, MedicineList, MedicineName};
use std::collections::HashMap;
use std::path::Path;

/// Static clinical reference data: interactions, dosage rules and alternatives.
///
/// Lookups are exact matches on canonical medicine names (trimmed, case-folded). A name the
/// knowledge base does not know yields no record; that is never an error.
///
/// The value has no interior mutability, so a single instance can be shared across threads
/// (behind an `Arc`) and read concurrently without locking.
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    interactions: HashMap<DrugPairKey, InteractionRecord>,
    dosage_rules: HashMap<(MedicineName, AgeBand), DosageRule>,
    alternatives: HashMap<MedicineName, Vec<AlternativeMapping>>,
    alternative_count: usize,
    vocabulary: MedicineList,
}

/// Table sizes of a knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeSummary {
    pub interactions: usize,
    pub dosage_rules: usize,
    pub alternatives: usize,
    pub medicines: usize,
}

impl KnowledgeBase {
    /// Starts an empty builder.
    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::default()
    }

    /// Builds the knowledge base from the embedded default dataset.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError`] if the embedded dataset fails validation, which indicates a
    /// packaging defect rather than a runtime condition.
    pub fn builtin() -> KnowledgeResult<Self> {
        Self::from_yaml(DEFAULT_KNOWLEDGE_BASE_YAML)
    }

    /// Builds a knowledge base from YAML text.
    ///
    /// Entries are registered in file order. When two interaction entries name the same pair,
    /// or two dosage rules name the same medicine and age band, the first one wins and the
    /// later one is discarded with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Translation`] for schema mismatches and
    /// [`KnowledgeError::InvalidEntry`] for invalid entries.
    pub fn from_yaml(yaml_text: &str) -> KnowledgeResult<Self> {
        let parsed = wire::parse(yaml_text)?;

        let mut builder = Self::builder();
        for record in parsed.interactions {
            builder.add_interaction(record);
        }
        for rule in parsed.dosage_rules {
            builder.add_dosage_rule(rule);
        }
        for mapping in parsed.alternatives {
            builder.add_alternative(mapping);
        }
        Ok(builder.build())
    }

    /// Reads and builds a knowledge base from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Io`] if the file cannot be read, [`KnowledgeError::TooLarge`]
    /// if it exceeds [`crate::MAX_KNOWLEDGE_BASE_BYTES`], or any error of [`Self::from_yaml`].
    pub fn load(path: &Path) -> KnowledgeResult<Self> {
        let size = std::fs::metadata(path)?.len();
        if size > crate::MAX_KNOWLEDGE_BASE_BYTES {
            return Err(KnowledgeError::TooLarge {
                path: path.to_path_buf(),
                size,
                max: crate::MAX_KNOWLEDGE_BASE_BYTES,
            });
        }

        let text = std::fs::read_to_string(path)?;
        let kb = Self::from_yaml(&text)?;
        tracing::info!(
            path = %path.display(),
            interactions = kb.interactions.len(),
            dosage_rules = kb.dosage_rules.len(),
            alternatives = kb.alternative_count,
            "loaded knowledge base"
        );
        Ok(kb)
    }

    /// Looks up the interaction registered for `pair`, in either order.
    pub fn lookup_interaction(&self, pair: &DrugPairKey) -> Option<&InteractionRecord> {
        self.interactions.get(pair)
    }

    /// Looks up the dosage rule for `medicine` in `age_band`.
    pub fn lookup_dosage(&self, medicine: &MedicineName, age_band: AgeBand) -> Option<&DosageRule> {
        self.dosage_rules.get(&(medicine.clone(), age_band))
    }

    /// Returns every alternative registered for `medicine`, in registration order.
    pub fn lookup_alternatives(&self, medicine: &MedicineName) -> &[AlternativeMapping] {
        self.alternatives
            .get(medicine)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every medicine name mentioned anywhere in the knowledge base, in first-registration
    /// order and with the first registered spelling.
    pub fn vocabulary(&self) -> &MedicineList {
        &self.vocabulary
    }

    pub fn summary(&self) -> KnowledgeSummary {
        KnowledgeSummary {
            interactions: self.interactions.len(),
            dosage_rules: self.dosage_rules.len(),
            alternatives: self.alternative_count,
            medicines: self.vocabulary.len(),
        }
    }
}

/// Registers records into a [`KnowledgeBase`] with first-wins duplicate handling.
#[derive(Debug, Default)]
pub struct KnowledgeBaseBuilder {
    kb: KnowledgeBase,
}

impl KnowledgeBaseBuilder {
    /// Registers an interaction.
    ///
    /// Returns `false` (and keeps the existing record) if the pair is already registered.
    pub fn add_interaction(&mut self, record: InteractionRecord) -> bool {
        if self.kb.interactions.contains_key(&record.pair) {
            tracing::warn!(pair = %record.pair, "duplicate interaction ignored");
            return false;
        }
        self.kb.vocabulary.push(record.pair.first().clone());
        self.kb.vocabulary.push(record.pair.second().clone());
        self.kb.interactions.insert(record.pair.clone(), record);
        true
    }

    /// Registers a dosage rule.
    ///
    /// Returns `false` (and keeps the existing rule) if the medicine already has a rule for
    /// the same age band.
    pub fn add_dosage_rule(&mut self, rule: DosageRule) -> bool {
        let key = (rule.medicine.clone(), rule.age_band);
        if self.kb.dosage_rules.contains_key(&key) {
            tracing::warn!(
                medicine = %rule.medicine,
                age_band = %rule.age_band,
                "duplicate dosage rule ignored"
            );
            return false;
        }
        self.kb.vocabulary.push(rule.medicine.clone());
        self.kb.dosage_rules.insert(key, rule);
        true
    }

    /// Registers an alternative. A medicine may have any number of alternatives.
    pub fn add_alternative(&mut self, mapping: AlternativeMapping) {
        self.kb.vocabulary.push(mapping.original_drug.clone());
        self.kb.vocabulary.push(mapping.alternative_drug.clone());
        self.kb
            .alternatives
            .entry(mapping.original_drug.clone())
            .or_default()
            .push(mapping);
        self.kb.alternative_count += 1;
    }

    pub fn build(self) -> KnowledgeBase {
        self.kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Severity;
    use std::io::Write;

    fn name(s: &str) -> MedicineName {
        MedicineName::new(s).unwrap()
    }

    fn pair(a: &str, b: &str) -> DrugPairKey {
        DrugPairKey::new(name(a), name(b)).unwrap()
    }

    fn interaction(a: &str, b: &str, severity: Severity, mechanism: &str) -> InteractionRecord {
        InteractionRecord {
            pair: pair(a, b),
            severity,
            mechanism: mechanism.into(),
            description: String::new(),
            reference: String::new(),
        }
    }

    #[test]
    fn builtin_dataset_loads() {
        let kb = KnowledgeBase::builtin().expect("embedded dataset is valid");
        let summary = kb.summary();
        assert!(summary.interactions > 0);
        assert!(summary.dosage_rules > 0);
        assert!(summary.alternatives > 0);

        let record = kb
            .lookup_interaction(&pair("Atorvastatin", "Clarithromycin"))
            .expect("sample critical interaction");
        assert_eq!(record.severity, Severity::Critical);

        let rule = kb
            .lookup_dosage(&name("Aspirin"), AgeBand::Pediatric)
            .expect("pediatric aspirin rule");
        assert!(rule.recommendation.contains("Reye"));
    }

    #[test]
    fn interaction_lookup_is_symmetric_for_every_registered_pair() {
        let kb = KnowledgeBase::builtin().unwrap();
        for record in kb.interactions.values() {
            let forward = pair(record.pair.first().as_str(), record.pair.second().as_str());
            let backward = pair(record.pair.second().as_str(), record.pair.first().as_str());
            assert_eq!(kb.lookup_interaction(&forward), kb.lookup_interaction(&backward));
            assert!(kb.lookup_interaction(&backward).is_some());
        }
    }

    #[test]
    fn lookups_are_case_insensitive_and_trimmed() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert!(kb
            .lookup_interaction(&pair(" CLARITHROMYCIN", "atorvastatin "))
            .is_some());
        assert!(kb.lookup_dosage(&name("  aspirin"), AgeBand::Pediatric).is_some());
        assert!(!kb.lookup_alternatives(&name("ASPIRIN")).is_empty());
    }

    #[test]
    fn unknown_names_are_silent_misses() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert!(kb.lookup_interaction(&pair("Unobtainium", "Aspirin")).is_none());
        assert!(kb.lookup_dosage(&name("Unobtainium"), AgeBand::Adult).is_none());
        assert!(kb.lookup_alternatives(&name("Unobtainium")).is_empty());
    }

    #[test]
    fn first_registered_interaction_wins() {
        let mut builder = KnowledgeBase::builder();
        assert!(builder.add_interaction(interaction("A", "B", Severity::Warning, "first")));
        assert!(!builder.add_interaction(interaction("b", "a", Severity::Critical, "second")));
        let kb = builder.build();

        let record = kb.lookup_interaction(&pair("A", "B")).unwrap();
        assert_eq!(record.mechanism, "first");
        assert_eq!(record.severity, Severity::Warning);
        assert_eq!(kb.summary().interactions, 1);
    }

    #[test]
    fn first_registered_dosage_rule_wins() {
        let yaml = r#"dosage_rules:
  - medicine: Ibuprofen
    age_band: geriatric
    recommendation: first
  - medicine: ibuprofen
    age_band: geriatric
    recommendation: second
  - medicine: Ibuprofen
    age_band: pediatric
    recommendation: other band
"#;
        let kb = KnowledgeBase::from_yaml(yaml).unwrap();
        let rule = kb.lookup_dosage(&name("Ibuprofen"), AgeBand::Geriatric).unwrap();
        assert_eq!(rule.recommendation, "first");
        assert_eq!(kb.summary().dosage_rules, 2);
    }

    #[test]
    fn alternatives_keep_registration_order() {
        let yaml = r#"alternatives:
  - original_drug: Aspirin
    alternative_drug: Acetaminophen
    reason: r1
    dosage_form: f1
  - original_drug: Warfarin
    alternative_drug: Apixaban
    reason: r2
    dosage_form: f2
  - original_drug: aspirin
    alternative_drug: Clopidogrel
    reason: r3
    dosage_form: f3
"#;
        let kb = KnowledgeBase::from_yaml(yaml).unwrap();
        let found: Vec<&str> = kb
            .lookup_alternatives(&name("Aspirin"))
            .iter()
            .map(|m| m.alternative_drug.as_str())
            .collect();
        assert_eq!(found, vec!["Acetaminophen", "Clopidogrel"]);
        assert_eq!(kb.summary().alternatives, 3);
    }

    #[test]
    fn vocabulary_uses_first_registration_order() {
        let yaml = r#"interactions:
  - drugs: [Warfarin, Aspirin]
    severity: WARNING
    mechanism: m
    description: d
    reference: r
dosage_rules:
  - medicine: aspirin
    age_band: adult
    recommendation: r
  - medicine: Metformin
    age_band: adult
    recommendation: r
"#;
        let kb = KnowledgeBase::from_yaml(yaml).unwrap();
        let names: Vec<&str> = kb.vocabulary().iter().map(MedicineName::as_str).collect();
        assert_eq!(names, vec!["Warfarin", "Aspirin", "Metformin"]);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "interactions:\n  - drugs: [X, Y]\n    severity: INFO\n    mechanism: m\n    \
             description: d\n    reference: r\n"
        )
        .unwrap();

        let kb = KnowledgeBase::load(file.path()).expect("load");
        assert_eq!(kb.summary().interactions, 1);
    }

    #[test]
    fn load_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KnowledgeBase::load(&dir.path().join("missing.yaml")).expect_err("missing");
        assert!(matches!(err, KnowledgeError::Io(_)));
    }

    #[test]
    fn load_rejects_oversized_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        file.as_file()
            .set_len(crate::MAX_KNOWLEDGE_BASE_BYTES + 1)
            .unwrap();

        let err = KnowledgeBase::load(file.path()).expect_err("too large");
        assert!(matches!(err, KnowledgeError::TooLarge { .. }));
    }
}
