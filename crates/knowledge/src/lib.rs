//! Knowledge base support for MedGuard.
//!
//! This crate owns the static clinical reference data the decision engine consults:
//! - pairwise drug-drug interaction records
//! - age-band dosage rules
//! - safer alternative mappings
//!
//! Responsibilities:
//! - Define the domain-level record types ([`InteractionRecord`], [`DosageRule`],
//!   [`AlternativeMapping`]) and the closed [`Severity`] and [`AgeBand`] enumerations
//! - Define a strict YAML wire model and translate it into domain records
//! - Build the immutable [`KnowledgeBase`] value and answer exact-match lookups
//!
//! A `KnowledgeBase` is constructed once, then shared read-only (typically behind an `Arc`).
//! Nothing in this crate mutates a knowledge base after it is built.

pub mod base;
pub mod records;
mod wire;

pub use base::{KnowledgeBase, KnowledgeBaseBuilder, KnowledgeSummary};
pub use records::{AgeBand, AlternativeMapping, DosageRule, InteractionRecord, Severity};

/// Embedded default dataset, compiled into the binary.
pub const DEFAULT_KNOWLEDGE_BASE_YAML: &str = include_str!("../data/default.yaml");

/// Largest knowledge base file accepted from disk.
pub const MAX_KNOWLEDGE_BASE_BYTES: u64 = 5 * 1024 * 1024;

/// Errors returned by the `knowledge` crate.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("translation error: {0}")]
    Translation(String),

    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "knowledge base file {path} is {size} bytes, exceeding the maximum of {max} bytes",
        path = path.display()
    )]
    TooLarge {
        path: std::path::PathBuf,
        size: u64,
        max: u64,
    },
}

/// Type alias for Results that can fail with a [`KnowledgeError`].
pub type KnowledgeResult<T> = Result<T, KnowledgeError>;
