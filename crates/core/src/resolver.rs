//! Age-conditioned dosage and alternative resolution.

use knowledge::{AgeBand, AlternativeMapping, KnowledgeBase};
use medguard_types::{MedicineName, PatientAge};

/// A dosage rule resolved for one requested medicine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DosageRecommendation {
    /// The medicine as the caller supplied it.
    pub medicine: MedicineName,
    pub age_group: AgeBand,
    pub recommendation: String,
}

/// Resolve dosage guidance for each medicine in the patient's age band.
///
/// A missing age resolves to [`AgeBand::Adult`]. Medicines without a rule for the band are
/// skipped.
pub fn resolve_dosage(
    kb: &KnowledgeBase,
    medicines: &[MedicineName],
    age: Option<PatientAge>,
) -> Vec<DosageRecommendation> {
    let band = AgeBand::for_patient(age);
    medicines
        .iter()
        .filter_map(|medicine| {
            kb.lookup_dosage(medicine, band)
                .map(|rule| DosageRecommendation {
                    medicine: medicine.clone(),
                    age_group: band,
                    recommendation: rule.recommendation.clone(),
                })
        })
        .collect()
}

/// Every registered alternative for every medicine, grouped by medicine in input order.
///
/// This does not depend on dosage resolution.
pub fn resolve_alternatives(
    kb: &KnowledgeBase,
    medicines: &[MedicineName],
) -> Vec<AlternativeMapping> {
    medicines
        .iter()
        .flat_map(|medicine| kb.lookup_alternatives(medicine).iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use knowledge::DosageRule;

    fn name(s: &str) -> MedicineName {
        MedicineName::new(s).unwrap()
    }

    fn fixture_kb() -> KnowledgeBase {
        let mut builder = KnowledgeBase::builder();
        for (band, text) in [
            (AgeBand::Pediatric, "Avoid: Reye's syndrome"),
            (AgeBand::Adult, "300-650 mg every 4-6 hours"),
            (AgeBand::Geriatric, "Use the lower dose"),
        ] {
            builder.add_dosage_rule(DosageRule {
                medicine: name("Aspirin"),
                age_band: band,
                recommendation: text.into(),
            });
        }
        builder.add_alternative(AlternativeMapping {
            original_drug: name("Aspirin"),
            alternative_drug: name("Acetaminophen"),
            reason: "no Reye's risk".into(),
            dosage_form: "tablet".into(),
        });
        builder.add_alternative(AlternativeMapping {
            original_drug: name("Clarithromycin"),
            alternative_drug: name("Azithromycin"),
            reason: "weak CYP3A4 inhibitor".into(),
            dosage_form: "tablet".into(),
        });
        builder.build()
    }

    #[test]
    fn pediatric_age_selects_pediatric_rule() {
        let kb = fixture_kb();
        let recs = resolve_dosage(&kb, &[name("aspirin")], Some(PatientAge::new(8).unwrap()));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].age_group, AgeBand::Pediatric);
        assert!(recs[0].recommendation.contains("Reye"));
        assert_eq!(recs[0].medicine.as_str(), "aspirin");
    }

    #[test]
    fn band_boundaries_pick_the_higher_band() {
        let kb = fixture_kb();
        let band_for = |years| {
            resolve_dosage(&kb, &[name("Aspirin")], Some(PatientAge::new(years).unwrap()))[0]
                .age_group
        };
        assert_eq!(band_for(11), AgeBand::Pediatric);
        assert_eq!(band_for(12), AgeBand::Adult);
        assert_eq!(band_for(64), AgeBand::Adult);
        assert_eq!(band_for(65), AgeBand::Geriatric);
    }

    #[test]
    fn missing_age_defaults_to_adult() {
        let kb = fixture_kb();
        let recs = resolve_dosage(&kb, &[name("Aspirin")], None);
        assert_eq!(recs[0].age_group, AgeBand::Adult);
    }

    #[test]
    fn alternatives_are_independent_of_dosage_rules() {
        let kb = fixture_kb();
        let medicines = [name("Clarithromycin"), name("Aspirin")];

        let recs = resolve_dosage(&kb, &medicines, Some(PatientAge::new(40).unwrap()));
        assert_eq!(recs.len(), 1, "only Aspirin has an adult rule");

        let alts = resolve_alternatives(&kb, &medicines);
        let pairs: Vec<(&str, &str)> = alts
            .iter()
            .map(|a| (a.original_drug.as_str(), a.alternative_drug.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("Clarithromycin", "Azithromycin"), ("Aspirin", "Acetaminophen")]
        );
    }

    #[test]
    fn unknown_medicines_are_silent_misses() {
        let kb = fixture_kb();
        let medicines = [name("Unobtainium")];
        assert!(resolve_dosage(&kb, &medicines, None).is_empty());
        assert!(resolve_alternatives(&kb, &medicines).is_empty());
    }
}
