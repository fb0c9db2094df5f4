//! Validated primitive types shared by every MedGuard crate.
//!
//! Values of these types can only be constructed through their validating constructors, so
//! code further down the pipeline never re-checks emptiness, pair distinctness or age range.

mod age;
mod medicine;
mod pair;

pub use age::PatientAge;
pub use medicine::{MedicineList, MedicineName};
pub use pair::{DrugPairKey, PAIR_SEPARATOR};

/// Errors that can occur when creating validated values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The medicine name was empty or contained only whitespace
    #[error("medicine name cannot be empty")]
    EmptyName,

    /// Both sides of a drug pair named the same medicine
    #[error("a drug pair needs two distinct medicines, got '{0}' twice")]
    SameMedicine(String),

    /// The patient age was negative or implausibly large
    #[error("patient age {0} is outside the supported range 0..={max}", max = PatientAge::MAX)]
    AgeOutOfRange(i64),
}
