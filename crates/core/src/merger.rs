//! Joins detected interactions with annotator output.
//!
//! The join is keyed by [`DrugPairKey`] and driven by the detected records: an annotation is
//! only ever attached to a pair that has a detected interaction. Annotations for any other
//! pair are ignored.

use knowledge::InteractionRecord;
use medguard_types::DrugPairKey;
use std::collections::HashMap;

/// Natural-language text produced for one interacting pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertText {
    pub alert_message: String,
    pub recommendation: String,
}

/// Annotator output for a request, keyed by unordered pair.
pub type Annotations = HashMap<DrugPairKey, AlertText>;

/// An alert attached to a detected interaction.
///
/// `pair` is taken from the detected record, so it is oriented the same way as the
/// interaction entry it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub pair: DrugPairKey,
    pub alert_message: String,
    pub recommendation: String,
}

/// Attach at most one alert to each detected interaction, in detection order.
pub fn merge_alerts(detected: &[InteractionRecord], annotations: &Annotations) -> Vec<Alert> {
    detected
        .iter()
        .filter_map(|record| {
            annotations.get(&record.pair).map(|text| Alert {
                pair: record.pair.clone(),
                alert_message: text.alert_message.clone(),
                recommendation: text.recommendation.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use knowledge::Severity;
    use medguard_types::MedicineName;

    fn pair(a: &str, b: &str) -> DrugPairKey {
        DrugPairKey::new(MedicineName::new(a).unwrap(), MedicineName::new(b).unwrap()).unwrap()
    }

    fn record(a: &str, b: &str) -> InteractionRecord {
        InteractionRecord {
            pair: pair(a, b),
            severity: Severity::Warning,
            mechanism: String::new(),
            description: String::new(),
            reference: String::new(),
        }
    }

    fn text(msg: &str) -> AlertText {
        AlertText {
            alert_message: msg.into(),
            recommendation: format!("{msg} rec"),
        }
    }

    #[test]
    fn attaches_annotation_keyed_in_reverse_order() {
        let detected = vec![record("Warfarin", "Aspirin")];
        let mut annotations = Annotations::new();
        annotations.insert(pair("aspirin", "warfarin"), text("bleeding"));

        let alerts = merge_alerts(&detected, &annotations);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].alert_message, "bleeding");
        assert_eq!(alerts[0].pair.to_string(), "Warfarin \u{2194} Aspirin");
    }

    #[test]
    fn missing_annotation_is_omitted() {
        let detected = vec![record("Warfarin", "Aspirin"), record("Aspirin", "Ibuprofen")];
        let mut annotations = Annotations::new();
        annotations.insert(pair("Aspirin", "Ibuprofen"), text("cox"));

        let alerts = merge_alerts(&detected, &annotations);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].pair, pair("Aspirin", "Ibuprofen"));
    }

    #[test]
    fn annotation_without_detected_interaction_never_appears() {
        let detected = vec![record("Warfarin", "Aspirin")];
        let mut annotations = Annotations::new();
        annotations.insert(pair("Metformin", "Lisinopril"), text("ungated"));

        let alerts = merge_alerts(&detected, &annotations);
        assert!(alerts.is_empty());
    }

    #[test]
    fn no_annotations_is_not_an_error() {
        let detected = vec![record("Warfarin", "Aspirin")];
        assert!(merge_alerts(&detected, &Annotations::new()).is_empty());
    }
}
