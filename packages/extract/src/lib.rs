#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Heuristic extraction of district statistics from report text.
//!
//! Text is assumed to have been pulled out of the city's PDF reports by an
//! external tool. A small [`RuleSet`] of case-insensitive patterns fills
//! population, crime incidents, median income, and tertiary education;
//! everything else stays at zero. Extraction is best-effort and never
//! fails. Unmatched fields are reported through [`Extraction`] rather than
//! as errors.
//!
//! [`batch`] turns a sequence of texts into display records, assigning
//! district identities by position.

pub mod batch;
pub mod rules;

use gbg_map_district_models::RawDistrictStatistics;
use serde::Serialize;
use thiserror::Error;

pub use rules::{FieldRule, RuleSet, StatField};

/// Errors from building custom extraction rules.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The configured regex pattern failed to compile.
    #[error("Invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    /// The pattern has no capture group for the number.
    #[error("Pattern for {field} has no capture group")]
    MissingCaptureGroup {
        /// The field the pattern was meant to fill.
        field: StatField,
    },
}

/// Result of running a rule set over one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    /// Statistics with every matched field filled in.
    pub statistics: RawDistrictStatistics,
    /// Fields whose rule matched, in rule order.
    pub matched: Vec<StatField>,
    /// Fields whose rule did not match, in rule order.
    pub unmatched: Vec<StatField>,
}

impl Extraction {
    /// Number of rules that found nothing.
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Returns `true` if every rule matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Extracts statistics from `text` with the built-in rules.
#[must_use]
pub fn extract_statistics(text: &str) -> RawDistrictStatistics {
    extract_with_report(text, RuleSet::builtin()).statistics
}

/// Extracts statistics from `text` and reports which rules matched.
#[must_use]
pub fn extract_with_report(text: &str, rules: &RuleSet) -> Extraction {
    let mut extraction = Extraction::default();

    for rule in rules.rules() {
        let field = rule.field();
        if let Some(value) = rule.capture(text) {
            log::debug!("Extracted {field} = {value}");
            field.apply(&mut extraction.statistics, value);
            extraction.matched.push(field);
        } else {
            extraction.unmatched.push(field);
        }
    }

    extraction
}
