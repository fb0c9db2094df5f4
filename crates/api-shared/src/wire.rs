//! JSON request and response shapes.
//!
//! Response field names are part of the public contract and must not change. Domain values are
//! converted into these shapes at the boundary; the engine never sees them.

use knowledge::{AlternativeMapping, InteractionRecord, KnowledgeSummary};
use medguard_core::{Alert, DosageRecommendation, DosageReport, InteractionReport};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Interaction check request.
///
/// At least one of `prescription_text` and `medicines` is required. When both are given the
/// explicit `medicines` list is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CheckInteractionsReq {
    #[serde(default)]
    pub prescription_text: Option<String>,
    #[serde(default)]
    pub medicines: Option<Vec<String>>,
}

/// Dosage check request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CheckDosageReq {
    #[serde(default)]
    pub prescription_text: Option<String>,
    #[serde(default)]
    pub medicines: Option<Vec<String>>,
    /// Age in whole years, `0..=130`. Omit to use adult dosing.
    #[serde(default)]
    pub patient_age: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InteractionRes {
    pub drug_a: String,
    pub drug_b: String,
    /// `CRITICAL`, `WARNING` or `INFO`.
    pub severity: String,
    pub mechanism: String,
    pub description: String,
    pub reference: String,
}

impl From<&InteractionRecord> for InteractionRes {
    fn from(record: &InteractionRecord) -> Self {
        Self {
            drug_a: record.pair.first().to_string(),
            drug_b: record.pair.second().to_string(),
            severity: record.severity.as_str().to_string(),
            mechanism: record.mechanism.clone(),
            description: record.description.clone(),
            reference: record.reference.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlertRes {
    /// `"<drug_a> ↔ <drug_b>"`, oriented like the matching interaction.
    pub interaction_pair: String,
    pub alert_message: String,
    pub recommendation: String,
}

impl From<&Alert> for AlertRes {
    fn from(alert: &Alert) -> Self {
        Self {
            interaction_pair: alert.pair.to_string(),
            alert_message: alert.alert_message.clone(),
            recommendation: alert.recommendation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InteractionReportRes {
    pub extracted_medicines: Vec<String>,
    pub interactions: Vec<InteractionRes>,
    pub alerts: Vec<AlertRes>,
    pub total_interactions: usize,
}

impl From<&InteractionReport> for InteractionReportRes {
    fn from(report: &InteractionReport) -> Self {
        Self {
            extracted_medicines: report
                .extracted_medicines
                .iter()
                .map(ToString::to_string)
                .collect(),
            interactions: report.interactions.iter().map(InteractionRes::from).collect(),
            alerts: report.alerts.iter().map(AlertRes::from).collect(),
            total_interactions: report.total_interactions(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DosageRecommendationRes {
    pub medicine: String,
    /// `pediatric`, `adult` or `geriatric`.
    pub age_group: String,
    pub recommendation: String,
}

impl From<&DosageRecommendation> for DosageRecommendationRes {
    fn from(rec: &DosageRecommendation) -> Self {
        Self {
            medicine: rec.medicine.to_string(),
            age_group: rec.age_group.as_str().to_string(),
            recommendation: rec.recommendation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlternativeRes {
    pub original_drug: String,
    pub alternative_drug: String,
    pub reason: String,
    pub dosage_form: String,
}

impl From<&AlternativeMapping> for AlternativeRes {
    fn from(mapping: &AlternativeMapping) -> Self {
        Self {
            original_drug: mapping.original_drug.to_string(),
            alternative_drug: mapping.alternative_drug.to_string(),
            reason: mapping.reason.clone(),
            dosage_form: mapping.dosage_form.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DosageReportRes {
    pub extracted_medicines: Vec<String>,
    pub dosage_recommendations: Vec<DosageRecommendationRes>,
    pub alternatives: Vec<AlternativeRes>,
}

impl From<&DosageReport> for DosageReportRes {
    fn from(report: &DosageReport) -> Self {
        Self {
            extracted_medicines: report
                .extracted_medicines
                .iter()
                .map(ToString::to_string)
                .collect(),
            dosage_recommendations: report
                .dosage_recommendations
                .iter()
                .map(DosageRecommendationRes::from)
                .collect(),
            alternatives: report.alternatives.iter().map(AlternativeRes::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KnowledgeSummaryRes {
    pub interactions: usize,
    pub dosage_rules: usize,
    pub alternatives: usize,
    pub medicines: usize,
}

impl From<KnowledgeSummary> for KnowledgeSummaryRes {
    fn from(summary: KnowledgeSummary) -> Self {
        Self {
            interactions: summary.interactions,
            dosage_rules: summary.dosage_rules,
            alternatives: summary.alternatives,
            medicines: summary.medicines,
        }
    }
}
