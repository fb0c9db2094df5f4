//! The contextual alert annotator seam.
//!
//! In a deployment the annotator is an external natural-language service. The calling layer
//! invokes it for each detected interaction and hands the collected [`Annotations`] to the
//! engine; the engine itself never calls out.

use crate::merger::{AlertText, Annotations};
use knowledge::{InteractionRecord, Severity};

/// Produces an optional alert for a detected interaction.
///
/// Returning `None` is always allowed and simply means no alert is shown for that pair.
pub trait AlertAnnotator: Send + Sync {
    fn annotate(&self, record: &InteractionRecord) -> Option<AlertText>;
}

/// Run `annotator` over every detected record and key the results by pair.
pub fn annotate_detected(
    annotator: &dyn AlertAnnotator,
    detected: &[InteractionRecord],
) -> Annotations {
    detected
        .iter()
        .filter_map(|record| {
            annotator
                .annotate(record)
                .map(|text| (record.pair.clone(), text))
        })
        .collect()
}

/// Template annotator driven by interaction severity.
///
/// `Critical` and `Warning` records get an alert built from the record's mechanism;
/// `Info` records get none.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeverityAnnotator;

impl AlertAnnotator for SeverityAnnotator {
    fn annotate(&self, record: &InteractionRecord) -> Option<AlertText> {
        let (first, second) = (record.pair.first(), record.pair.second());
        match record.severity {
            Severity::Critical => Some(AlertText {
                alert_message: format!(
                    "High-risk interaction between {first} and {second}: {}",
                    record.mechanism
                ),
                recommendation: format!(
                    "Avoid co-prescribing {first} and {second}; choose an alternative or \
                     consult the prescriber before dispensing."
                ),
            }),
            Severity::Warning => Some(AlertText {
                alert_message: format!(
                    "Potential interaction between {first} and {second}: {}",
                    record.mechanism
                ),
                recommendation: "Use with caution and monitor the patient closely.".into(),
            }),
            Severity::Info => None,
        }
    }
}
