//! Positional batch transform: report texts in, display records out.
//!
//! The `n`th text is attributed to the `n`th district in
//! [`District::ALL`]. Output order and length always match the input.
//! Texts past the end of the district list get an empty identity.

use gbg_map_district::format::{DistrictInput, format_record_with};
use gbg_map_district_models::{DisplayRecord, District, DistrictIdentity, ScoringConfig};
use serde::Serialize;

use crate::{Extraction, RuleSet, extract_with_report};

/// One processed text: the formatted record plus the extraction report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    pub record: DisplayRecord,
    pub extraction: Extraction,
}

/// Processes texts with the built-in rules and default config.
#[must_use]
pub fn process_texts<S: AsRef<str>>(texts: &[S]) -> Vec<DisplayRecord> {
    process_texts_with(texts, RuleSet::builtin(), &ScoringConfig::default())
        .into_iter()
        .map(|item| item.record)
        .collect()
}

/// Processes texts with explicit rules and config.
#[must_use]
pub fn process_texts_with<S: AsRef<str>>(
    texts: &[S],
    rules: &RuleSet,
    config: &ScoringConfig,
) -> Vec<BatchItem> {
    let items: Vec<BatchItem> = texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let identity = identity_for(index);
            let extraction = extract_with_report(text.as_ref(), rules);

            if !extraction.is_complete() {
                log::debug!(
                    "Text {index} ('{}'): {} of {} fields unmatched: {:?}",
                    identity.id,
                    extraction.unmatched_count(),
                    rules.rules().len(),
                    extraction.unmatched
                );
            }

            let input = DistrictInput::new(identity, extraction.statistics.clone());
            BatchItem {
                record: format_record_with(&input, config),
                extraction,
            }
        })
        .collect();

    let unmatched: usize = items.iter().map(|i| i.extraction.unmatched_count()).sum();
    log::info!(
        "Processed {} texts ({unmatched} unmatched fields in total)",
        items.len()
    );

    items
}

fn identity_for(index: usize) -> DistrictIdentity {
    District::nth(index).map_or_else(
        || {
            log::warn!(
                "Text {index} has no district: only {} districts are known",
                District::ALL.len()
            );
            DistrictIdentity::default()
        },
        District::identity,
    )
}

#[cfg(test)]
mod tests {
    use gbg_map_district_models::Coordinate;

    use super::*;

    #[test]
    fn identities_follow_declared_order() {
        let texts = vec!["population: 1"; 10];
        let records = process_texts(&texts);
        assert_eq!(records.len(), 10);
        for (record, district) in records.iter().zip(District::ALL) {
            assert_eq!(record.id, district.key());
            assert_eq!(record.name, district.name());
        }
    }

    #[test]
    fn extra_texts_get_empty_identity() {
        let texts: Vec<String> = (0..12).map(|i| format!("population: {i}")).collect();
        let records = process_texts(&texts);
        assert_eq!(records.len(), 12);
        assert_eq!(records[9].id, "mölndal");
        assert_eq!(records[10].id, "");
        assert_eq!(records[11].name, "");
        assert_eq!(records[11].population, 11);
    }

    #[test]
    fn empty_batch() {
        let texts: [&str; 0] = [];
        assert!(process_texts(&texts).is_empty());
    }

    #[test]
    fn extracted_values_flow_into_records() {
        let records = process_texts(&[
            "population: 45000, crime: 450, median income: 420000, tertiary education: 78%",
            "nothing useful",
        ]);
        let centrum = &records[0];
        assert_eq!(centrum.id, "centrum");
        assert_eq!(centrum.crime_level, 45);
        assert_eq!(centrum.population, 45_000);
        assert_eq!(centrum.median_income, 420_000);
        assert!((centrum.tertiary_education - 78.0).abs() < f64::EPSILON);
        assert!((centrum.area - 1.0).abs() < f64::EPSILON);
        assert_eq!(centrum.center, Coordinate::new(57.7089, 11.9746));

        let haga = &records[1];
        assert_eq!(haga.id, "haga");
        assert_eq!(haga.crime_level, 0);
        assert_eq!(haga.population, 0);
    }

    #[test]
    fn batch_items_carry_reports() {
        let items = process_texts_with(
            &["crime: 1200"],
            RuleSet::builtin(),
            &ScoringConfig::default(),
        );
        assert_eq!(items[0].record.crime_level, 100);
        assert_eq!(items[0].extraction.matched, [crate::StatField::CrimeIncidents]);
        assert_eq!(items[0].extraction.unmatched_count(), 3);
    }
}
