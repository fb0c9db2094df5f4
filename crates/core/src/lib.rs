//! # MedGuard Core
//!
//! The interaction and dosage decision engine.
//!
//! This crate turns a medicine list (and an optional patient age) into two reports:
//! - an interaction report: pairwise interactions from the knowledge base plus any alerts the
//!   annotator produced for them
//! - a dosage report: age-banded dosage guidance and safer alternatives
//!
//! The engine holds no mutable state. The knowledge base is built once at startup and shared
//! read-only, so concurrent calls with identical input give identical reports.
//!
//! **No API concerns**: request parsing, HTTP and CLI surfaces belong in `api-shared`,
//! `api-rest` and `cli`.

pub mod annotator;
pub mod classification;
pub mod config;
pub mod constants;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod merger;
pub mod report;
pub mod resolver;

pub use annotator::{annotate_detected, AlertAnnotator, SeverityAnnotator};
pub use classification::{classify_recommendation, RecommendationKind};
pub use config::CoreConfig;
pub use error::{EngineError, EngineResult};
pub use extractor::{MedicineExtractor, VocabularyExtractor};
pub use merger::{Alert, AlertText, Annotations};
pub use report::{DosageReport, InteractionReport};
pub use resolver::DosageRecommendation;

use knowledge::{InteractionRecord, KnowledgeBase};
use medguard_types::{MedicineList, PatientAge};
use std::sync::Arc;

/// Engine facade over a shared knowledge base.
///
/// Cloning is cheap; every clone reads the same knowledge base.
#[derive(Clone, Debug)]
pub struct InteractionEngine {
    kb: Arc<KnowledgeBase>,
}

impl InteractionEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Detected interactions for `medicines`, in candidate-pair order.
    pub fn detect_interactions(&self, medicines: &MedicineList) -> Vec<InteractionRecord> {
        detector::detect_interactions(&self.kb, medicines.as_slice())
    }

    /// Build the interaction report.
    ///
    /// # Arguments
    ///
    /// * `medicines` - Deduplicated medicine list.
    /// * `annotations` - Annotator output keyed by pair. Entries for pairs without a detected
    ///   interaction are ignored.
    pub fn check_interactions(
        &self,
        medicines: MedicineList,
        annotations: &Annotations,
    ) -> InteractionReport {
        let _span =
            tracing::debug_span!("check_interactions", medicines = medicines.len()).entered();

        let interactions = self.detect_interactions(&medicines);
        let alerts = merger::merge_alerts(&interactions, annotations);
        tracing::debug!(
            interactions = interactions.len(),
            alerts = alerts.len(),
            "interaction report assembled"
        );
        report::assemble_interaction_report(medicines, interactions, alerts)
    }

    /// Detect, annotate and assemble in one step using `annotator`.
    pub fn check_interactions_with(
        &self,
        medicines: MedicineList,
        annotator: &dyn AlertAnnotator,
    ) -> InteractionReport {
        let detected = self.detect_interactions(&medicines);
        let annotations = annotate_detected(annotator, &detected);
        self.check_interactions(medicines, &annotations)
    }

    /// Build the dosage report.
    ///
    /// # Arguments
    ///
    /// * `medicines` - Deduplicated medicine list.
    /// * `age` - Patient age; `None` selects the adult band.
    pub fn check_dosage(&self, medicines: MedicineList, age: Option<PatientAge>) -> DosageReport {
        let _span = tracing::debug_span!("check_dosage", medicines = medicines.len()).entered();

        let recommendations = resolver::resolve_dosage(&self.kb, medicines.as_slice(), age);
        let alternatives = resolver::resolve_alternatives(&self.kb, medicines.as_slice());
        tracing::debug!(
            recommendations = recommendations.len(),
            alternatives = alternatives.len(),
            "dosage report assembled"
        );
        report::assemble_dosage_report(medicines, recommendations, alternatives)
    }
}
