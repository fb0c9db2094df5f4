//! Domain-level knowledge base records.

use medguard_types::{DrugPairKey, MedicineName, PatientAge};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interaction risk, ordered `Info < Warning < Critical`.
///
/// The derived `Ord` is used when callers sort or highlight by severity. `UNKNOWN` in a
/// knowledge base file is read as `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[serde(alias = "UNKNOWN")]
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age band used to select dosage rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBand {
    Pediatric,
    Adult,
    Geriatric,
}

impl AgeBand {
    /// First age (in years) that is no longer pediatric.
    pub const ADULT_FROM: u8 = 12;

    /// First age (in years) that is geriatric.
    pub const GERIATRIC_FROM: u8 = 65;

    /// Classifies an age. Boundaries are half-open: 12 is adult, 65 is geriatric.
    pub fn from_age(age: PatientAge) -> Self {
        match age.years() {
            y if y < Self::ADULT_FROM => AgeBand::Pediatric,
            y if y < Self::GERIATRIC_FROM => AgeBand::Adult,
            _ => AgeBand::Geriatric,
        }
    }

    /// Classifies an optional age, falling back to `Adult` when no age is known.
    pub fn for_patient(age: Option<PatientAge>) -> Self {
        age.map_or(AgeBand::Adult, AgeBand::from_age)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Pediatric => "pediatric",
            AgeBand::Adult => "adult",
            AgeBand::Geriatric => "geriatric",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known interaction between two medicines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    pub pair: DrugPairKey,
    pub severity: Severity,
    pub mechanism: String,
    pub description: String,
    pub reference: String,
}

impl InteractionRecord {
    /// Returns a copy of this record whose pair is displayed in the order of `pair`.
    ///
    /// `pair` must be equal (as an unordered pair) to the record's own pair.
    pub fn oriented(&self, pair: &DrugPairKey) -> InteractionRecord {
        debug_assert_eq!(&self.pair, pair);
        InteractionRecord {
            pair: pair.clone(),
            ..self.clone()
        }
    }
}

/// Dosage guidance for one medicine in one age band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DosageRule {
    pub medicine: MedicineName,
    pub age_band: AgeBand,
    pub recommendation: String,
}

/// A safer alternative for a medicine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeMapping {
    pub original_drug: MedicineName,
    pub alternative_drug: MedicineName,
    pub reason: String,
    pub dosage_form: String,
}
