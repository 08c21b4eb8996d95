//! Declarative field rules for the statistics extractor.
//!
//! Each [`FieldRule`] pairs one target field with a case-insensitive regex
//! whose first capture group holds the number. Rules are evaluated
//! independently; a rule that does not match leaves its field at zero.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use gbg_map_district_models::RawDistrictStatistics;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::ExtractError;

/// A statistic the extractor knows how to fill.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatField {
    /// `population.total`
    Population,
    /// `crime.total_incidents`
    CrimeIncidents,
    /// `income.median_income`
    MedianIncome,
    /// `education.tertiary_education`
    TertiaryEducation,
}

impl StatField {
    /// Returns all fields in evaluation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Population,
            Self::CrimeIncidents,
            Self::MedianIncome,
            Self::TertiaryEducation,
        ]
    }

    /// Built-in pattern for this field.
    ///
    /// These are deliberately loose: `crime` will happily match any number
    /// that follows the word, and `median.*income` spans anything on the
    /// same line. Digits are ASCII only; `\d` would also accept other
    /// scripts' digits, which `u64` parsing rejects.
    #[must_use]
    pub const fn default_pattern(self) -> &'static str {
        match self {
            Self::Population => r"population[:\s]*([0-9]+)",
            Self::CrimeIncidents => r"crime[:\s]*([0-9]+)",
            Self::MedianIncome => r"median.*income[:\s]*([0-9]+)",
            Self::TertiaryEducation => r"tertiary.*education[:\s]*([0-9]+)%",
        }
    }

    /// Writes `value` into the matching field of `stats`.
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(self, stats: &mut RawDistrictStatistics, value: u64) {
        match self {
            Self::Population => stats.population.total = value,
            Self::CrimeIncidents => stats.crime.total_incidents = value,
            Self::MedianIncome => stats.income.median_income = value,
            Self::TertiaryEducation => stats.education.tertiary_education = value as f64,
        }
    }
}

/// One field and the pattern used to find it.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: StatField,
    pattern: Regex,
}

impl FieldRule {
    /// Compiles a case-insensitive rule for `field`.
    ///
    /// # Errors
    ///
    /// * [`ExtractError::Regex`] if the pattern fails to compile
    /// * [`ExtractError::MissingCaptureGroup`] if the pattern has no
    ///   capture group to read the number from
    pub fn new(field: StatField, pattern: &str) -> Result<Self, ExtractError> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;

        // captures_len counts the implicit whole-match group.
        if pattern.captures_len() < 2 {
            return Err(ExtractError::MissingCaptureGroup { field });
        }

        Ok(Self { field, pattern })
    }

    /// The field this rule fills.
    #[must_use]
    pub const fn field(&self) -> StatField {
        self.field
    }

    /// The source text of the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the number captured by the first match in `text` whose
    /// capture parses as a `u64`.
    ///
    /// Matches whose group did not participate, or whose digits do not
    /// parse (overflow, non-ASCII digits from a custom `\d` pattern), are
    /// skipped. `None` when no match yields a number.
    #[must_use]
    pub fn capture(&self, text: &str) -> Option<u64> {
        self.pattern.captures_iter(text).find_map(|caps| {
            let digits = caps.get(1)?.as_str();
            match digits.parse::<u64>() {
                Ok(value) => Some(value),
                Err(e) => {
                    log::debug!(
                        "Rule {} matched '{digits}' but it is not a usable number: {e}",
                        self.field
                    );
                    None
                }
            }
        })
    }
}

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(|| RuleSet {
    rules: StatField::all()
        .iter()
        .map(|&field| {
            FieldRule::new(field, field.default_pattern())
                .unwrap_or_else(|e| panic!("Invalid built-in pattern for {field}: {e}"))
        })
        .collect(),
});

/// An ordered set of field rules, at most one per field.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// The built-in rules for all four fields.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern fails to compile, which the tests
    /// below rule out.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &DEFAULT_RULES
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Replaces the rule for `field` with a custom pattern, or appends one
    /// if the set has no rule for it.
    ///
    /// # Errors
    ///
    /// Propagates [`FieldRule::new`] errors.
    pub fn with_override(mut self, field: StatField, pattern: &str) -> Result<Self, ExtractError> {
        let rule = FieldRule::new(field, pattern)?;
        match self.rules.iter_mut().find(|r| r.field == field) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        Ok(self)
    }

    /// Builds the built-in set with the given per-field overrides applied.
    ///
    /// # Errors
    ///
    /// Propagates [`FieldRule::new`] errors for the first bad pattern.
    pub fn with_overrides(overrides: &BTreeMap<StatField, String>) -> Result<Self, ExtractError> {
        overrides
            .iter()
            .try_fold(Self::builtin().clone(), |set, (field, pattern)| {
                set.with_override(*field, pattern)
            })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
