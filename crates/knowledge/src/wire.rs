//! YAML wire model for knowledge base files.
//!
//! The wire structs mirror the on-disk layout exactly and reject unknown keys. Translation into
//! domain records validates medicine names and interaction pairs, reporting the offending
//! entry by its path (for example `interactions[3].drugs`).

use crate::records::{AgeBand, AlternativeMapping, DosageRule, InteractionRecord, Severity};
use crate::{KnowledgeError, KnowledgeResult};
use medguard_types::{DrugPairKey, MedicineName};
use serde::Deserialize;

/// Domain records in file order, before duplicate resolution.
#[derive(Debug, Default)]
pub(crate) struct ParsedKnowledge {
    pub interactions: Vec<InteractionRecord>,
    pub dosage_rules: Vec<DosageRule>,
    pub alternatives: Vec<AlternativeMapping>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KnowledgeBaseWire {
    #[serde(default)]
    interactions: Vec<InteractionWire>,
    #[serde(default)]
    dosage_rules: Vec<DosageRuleWire>,
    #[serde(default)]
    alternatives: Vec<AlternativeWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InteractionWire {
    drugs: Vec<String>,
    severity: Severity,
    mechanism: String,
    description: String,
    reference: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DosageRuleWire {
    medicine: String,
    age_band: AgeBand,
    recommendation: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlternativeWire {
    original_drug: String,
    alternative_drug: String,
    reason: String,
    dosage_form: String,
}

/// Parse knowledge base YAML into domain records.
///
/// This uses `serde_path_to_error` to surface the path of the failing field when the YAML does
/// not match the wire schema.
///
/// # Errors
///
/// Returns [`KnowledgeError::Translation`] if the YAML does not match the wire schema (unknown
/// keys, wrong types, unknown severity or age band), and [`KnowledgeError::InvalidEntry`] if
/// an entry is structurally valid but clinically meaningless (empty names, an interaction that
/// does not name exactly two distinct drugs).
pub(crate) fn parse(yaml_text: &str) -> KnowledgeResult<ParsedKnowledge> {
    if yaml_text.trim().is_empty() {
        return Ok(ParsedKnowledge::default());
    }

    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    let wire = match serde_path_to_error::deserialize::<_, KnowledgeBaseWire>(deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            return Err(KnowledgeError::Translation(format!(
                "knowledge base schema mismatch at {path}: {source}"
            )));
        }
    };

    wire_to_domain(wire)
}

fn wire_to_domain(wire: KnowledgeBaseWire) -> KnowledgeResult<ParsedKnowledge> {
    let mut parsed = ParsedKnowledge::default();

    for (index, entry) in wire.interactions.into_iter().enumerate() {
        let path = format!("interactions[{index}]");
        let [first, second] = <[String; 2]>::try_from(entry.drugs).map_err(|drugs| {
            KnowledgeError::InvalidEntry(format!(
                "{path}.drugs: expected exactly two medicines, got {}",
                drugs.len()
            ))
        })?;
        let first = medicine(&path, "drugs[0]", &first)?;
        let second = medicine(&path, "drugs[1]", &second)?;
        let pair = DrugPairKey::new(first, second)
            .map_err(|e| KnowledgeError::InvalidEntry(format!("{path}.drugs: {e}")))?;

        parsed.interactions.push(InteractionRecord {
            pair,
            severity: entry.severity,
            mechanism: entry.mechanism,
            description: entry.description,
            reference: entry.reference,
        });
    }

    for (index, entry) in wire.dosage_rules.into_iter().enumerate() {
        let path = format!("dosage_rules[{index}]");
        parsed.dosage_rules.push(DosageRule {
            medicine: medicine(&path, "medicine", &entry.medicine)?,
            age_band: entry.age_band,
            recommendation: entry.recommendation,
        });
    }

    for (index, entry) in wire.alternatives.into_iter().enumerate() {
        let path = format!("alternatives[{index}]");
        parsed.alternatives.push(AlternativeMapping {
            original_drug: medicine(&path, "original_drug", &entry.original_drug)?,
            alternative_drug: medicine(&path, "alternative_drug", &entry.alternative_drug)?,
            reason: entry.reason,
            dosage_form: entry.dosage_form,
        });
    }

    Ok(parsed)
}

fn medicine(path: &str, field: &str, raw: &str) -> KnowledgeResult<MedicineName> {
    MedicineName::new(raw).map_err(|e| KnowledgeError::InvalidEntry(format!("{path}.{field}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"interactions:
  - drugs: [Atorvastatin, Clarithromycin]
    severity: CRITICAL
    mechanism: CYP3A4 inhibition
    description: Raised statin exposure
    reference: Product labeling
dosage_rules:
  - medicine: Aspirin
    age_band: pediatric
    recommendation: Avoid in children
alternatives:
  - original_drug: Aspirin
    alternative_drug: Acetaminophen
    reason: No Reye's syndrome risk
    dosage_form: Oral suspension
"#;

    #[test]
    fn parses_sample_yaml() {
        let parsed = parse(SAMPLE).expect("parse yaml");
        assert_eq!(parsed.interactions.len(), 1);
        assert_eq!(parsed.dosage_rules.len(), 1);
        assert_eq!(parsed.alternatives.len(), 1);

        let interaction = &parsed.interactions[0];
        assert_eq!(interaction.pair.first().as_str(), "Atorvastatin");
        assert_eq!(interaction.severity, Severity::Critical);
        assert_eq!(parsed.dosage_rules[0].age_band, AgeBand::Pediatric);
    }

    #[test]
    fn empty_document_is_an_empty_knowledge_base() {
        let parsed = parse("  \n").expect("empty is fine");
        assert!(parsed.interactions.is_empty());
        assert!(parsed.dosage_rules.is_empty());
        assert!(parsed.alternatives.is_empty());
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = SAMPLE.replace(
            "    reference: Product labeling\n",
            "    reference: x\n    source: y\n",
        );
        let err = parse(&input).expect_err("should reject unknown key");
        match err {
            KnowledgeError::Translation(msg) => {
                assert!(msg.contains("source"), "{msg}");
                assert!(msg.contains("interactions[0]"), "{msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_severity_with_path() {
        let input = SAMPLE.replace("severity: CRITICAL", "severity: SEVERE");
        let err = parse(&input).expect_err("should reject severity");
        match err {
            KnowledgeError::Translation(msg) => {
                assert!(msg.contains("interactions[0].severity"), "{msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_age_band() {
        let input = SAMPLE.replace("age_band: pediatric", "age_band: infant");
        let err = parse(&input).expect_err("should reject age band");
        assert!(matches!(err, KnowledgeError::Translation(msg) if msg.contains("age_band")));
    }

    #[test]
    fn rejects_interaction_without_two_drugs() {
        let input = SAMPLE.replace("[Atorvastatin, Clarithromycin]", "[Atorvastatin]");
        let err = parse(&input).expect_err("should reject single drug");
        assert!(matches!(
            err,
            KnowledgeError::InvalidEntry(msg)
                if msg.contains("interactions[0].drugs") && msg.contains("got 1")
        ));
    }

    #[test]
    fn rejects_interaction_of_drug_with_itself() {
        let input =
            SAMPLE.replace("[Atorvastatin, Clarithromycin]", "[Atorvastatin, atorvastatin]");
        let err = parse(&input).expect_err("should reject self pair");
        assert!(matches!(err, KnowledgeError::InvalidEntry(msg) if msg.contains("distinct")));
    }

    #[test]
    fn rejects_blank_medicine_names() {
        let input = SAMPLE.replace("original_drug: Aspirin", "original_drug: \"  \"");
        let err = parse(&input).expect_err("should reject blank name");
        assert!(matches!(
            err,
            KnowledgeError::InvalidEntry(msg) if msg.contains("alternatives[0].original_drug")
        ));
    }
}
