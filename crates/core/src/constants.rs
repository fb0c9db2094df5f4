//! Constants used throughout the MedGuard core crate.
//!
//! Environment variable names and defaults live here so the binaries and the configuration
//! helpers agree on them.

/// Environment variable naming a knowledge base YAML file to load instead of the embedded one.
pub const KNOWLEDGE_BASE_ENV: &str = "MEDGUARD_KNOWLEDGE_BASE";

/// Environment variable holding the REST bind address.
pub const REST_ADDR_ENV: &str = "MEDGUARD_REST_ADDR";

/// Default REST bind address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Keywords that mark a dosage recommendation as a dose adjustment.
pub const ADJUSTMENT_KEYWORDS: &[&str] = &["reduce", "lower"];

/// Keywords that mark a dosage recommendation as a contraindication.
pub const CONTRAINDICATION_KEYWORDS: &[&str] = &["avoid", "contraindicated"];
