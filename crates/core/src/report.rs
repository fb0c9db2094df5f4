//! Report assembly.

use crate::merger::Alert;
use crate::resolver::DosageRecommendation;
use knowledge::{AlternativeMapping, InteractionRecord};
use medguard_types::MedicineList;

/// Result of an interaction check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionReport {
    pub extracted_medicines: MedicineList,
    pub interactions: Vec<InteractionRecord>,
    pub alerts: Vec<Alert>,
}

impl InteractionReport {
    /// Number of detected interactions. Always equal to `interactions.len()`.
    pub fn total_interactions(&self) -> usize {
        self.interactions.len()
    }
}

/// Result of a dosage check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DosageReport {
    pub extracted_medicines: MedicineList,
    pub dosage_recommendations: Vec<DosageRecommendation>,
    pub alternatives: Vec<AlternativeMapping>,
}

pub fn assemble_interaction_report(
    extracted_medicines: MedicineList,
    interactions: Vec<InteractionRecord>,
    alerts: Vec<Alert>,
) -> InteractionReport {
    InteractionReport {
        extracted_medicines,
        interactions,
        alerts,
    }
}

pub fn assemble_dosage_report(
    extracted_medicines: MedicineList,
    dosage_recommendations: Vec<DosageRecommendation>,
    alternatives: Vec<AlternativeMapping>,
) -> DosageReport {
    DosageReport {
        extracted_medicines,
        dosage_recommendations,
        alternatives,
    }
}
