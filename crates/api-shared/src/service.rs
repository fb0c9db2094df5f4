//! Request handling shared by every front end.
//!
//! [`CheckService`] validates a request, runs the extractor and annotator the deployment is
//! configured with, and hands already-resolved inputs to the engine. A request that fails
//! validation is rejected whole with `EngineError::InvalidInput`.

use crate::wire::{
    CheckDosageReq, CheckInteractionsReq, DosageReportRes, InteractionReportRes,
    KnowledgeSummaryRes,
};
use medguard_core::{
    AlertAnnotator, EngineError, EngineResult, InteractionEngine, MedicineExtractor,
    SeverityAnnotator, VocabularyExtractor,
};
use medguard_types::{MedicineList, PatientAge};
use std::sync::Arc;

/// Resolve the medicine list for a request.
///
/// An explicit `medicines` list wins over `prescription_text`.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if neither input is present, if the text is blank, or if
/// any listed medicine is empty.
pub fn resolve_medicines(
    extractor: &dyn MedicineExtractor,
    prescription_text: Option<&str>,
    medicines: Option<&[String]>,
) -> EngineResult<MedicineList> {
    match (medicines, prescription_text) {
        (Some(list), _) => Ok(MedicineList::from_names(list)?),
        (None, Some(text)) if text.trim().is_empty() => Err(EngineError::InvalidInput(
            "prescription_text must not be blank".into(),
        )),
        (None, Some(text)) => Ok(extractor.extract(text)),
        (None, None) => Err(EngineError::InvalidInput(
            "one of prescription_text or medicines is required".into(),
        )),
    }
}

/// Validate an optional age in years.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if the age is outside `0..=130`.
pub fn resolve_age(patient_age: Option<i64>) -> EngineResult<Option<PatientAge>> {
    patient_age
        .map(PatientAge::new)
        .transpose()
        .map_err(EngineError::from)
}

// Logs the reason only; request content stays out of the logs.
fn rejected(operation: &'static str, err: EngineError) -> EngineError {
    tracing::debug!(operation, error = %err, "request rejected");
    err
}

/// The engine together with the extractor and annotator it is deployed with.
#[derive(Clone)]
pub struct CheckService {
    engine: InteractionEngine,
    extractor: Arc<dyn MedicineExtractor>,
    annotator: Arc<dyn AlertAnnotator>,
}

impl CheckService {
    pub fn new(
        engine: InteractionEngine,
        extractor: Arc<dyn MedicineExtractor>,
        annotator: Arc<dyn AlertAnnotator>,
    ) -> Self {
        Self {
            engine,
            extractor,
            annotator,
        }
    }

    /// Build a service using the vocabulary extractor and severity annotator.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ExtractorBuild` if the extractor cannot be compiled.
    pub fn with_defaults(engine: InteractionEngine) -> EngineResult<Self> {
        let extractor = VocabularyExtractor::new(engine.knowledge_base())?;
        Ok(Self::new(
            engine,
            Arc::new(extractor),
            Arc::new(SeverityAnnotator),
        ))
    }

    pub fn engine(&self) -> &InteractionEngine {
        &self.engine
    }

    /// Run an interaction check.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if the request is invalid.
    pub fn check_interactions(
        &self,
        req: &CheckInteractionsReq,
    ) -> EngineResult<InteractionReportRes> {
        let medicines = resolve_medicines(
            self.extractor.as_ref(),
            req.prescription_text.as_deref(),
            req.medicines.as_deref(),
        )
        .map_err(|err| rejected("check_interactions", err))?;
        let report = self
            .engine
            .check_interactions_with(medicines, self.annotator.as_ref());
        Ok(InteractionReportRes::from(&report))
    }

    /// Run a dosage check.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if the request is invalid. The age is validated
    /// before any extraction happens.
    pub fn check_dosage(&self, req: &CheckDosageReq) -> EngineResult<DosageReportRes> {
        let age = resolve_age(req.patient_age).map_err(|err| rejected("check_dosage", err))?;
        let medicines = resolve_medicines(
            self.extractor.as_ref(),
            req.prescription_text.as_deref(),
            req.medicines.as_deref(),
        )
        .map_err(|err| rejected("check_dosage", err))?;
        let report = self.engine.check_dosage(medicines, age);
        Ok(DosageReportRes::from(&report))
    }

    pub fn knowledge_summary(&self) -> KnowledgeSummaryRes {
        self.engine.knowledge_base().summary().into()
    }
}
