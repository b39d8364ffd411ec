//! Eligibility rule sets and the criterion shapes they are built from.
//!
//! Each slot of a rule set is optional. Whether a present slot counts toward a
//! program's possible points depends on its shape. A location list always
//! counts. A categorical slot counts unless it holds a single blank value
//! (`""`, `0` or `false`), which catalogs use to mean "no requirement". A range
//! counts only when at least one bound is set.

use serde::{Deserialize, Serialize};

use super::domain::CriterionKind;
use super::matching::normalize_text;

/// Sentinel location accepted by every jurisdiction.
pub const PAN_INDIA: &str = "pan-india";

/// Scalar value carried by a categorical criterion or a received attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

/// Either a single value or a set of acceptable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Categorical {
    AnyOf(Vec<AttributeValue>),
    One(AttributeValue),
}

impl Categorical {
    pub fn one(value: impl Into<AttributeValue>) -> Self {
        Categorical::One(value.into())
    }

    pub fn any_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        Categorical::AnyOf(values.into_iter().map(Into::into).collect())
    }

    /// False for a lone empty string, zero, NaN or `false`. Sets always count,
    /// even when empty.
    pub fn is_set(&self) -> bool {
        match self {
            Categorical::AnyOf(_) => true,
            Categorical::One(AttributeValue::Text(text)) => !text.is_empty(),
            Categorical::One(AttributeValue::Number(number)) => *number != 0.0 && !number.is_nan(),
            Categorical::One(AttributeValue::Flag(flag)) => *flag,
        }
    }
}

/// Inclusive numeric bounds; a missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeCriterion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl RangeCriterion {
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }

        let min = self.min.unwrap_or(f64::NEG_INFINITY);
        let max = self.max.unwrap_or(f64::INFINITY);
        min <= value && value <= max
    }
}

/// Allowed jurisdictions for a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationCriterion(pub Vec<String>);

impl LocationCriterion {
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locations.into_iter().map(Into::into).collect())
    }

    pub fn is_nationwide(&self) -> bool {
        self.0
            .iter()
            .any(|location| normalize_text(location) == PAN_INDIA)
    }

    pub fn allows(&self, state: &str) -> bool {
        let state = normalize_text(state);
        self.0.iter().any(|location| {
            let location = normalize_text(location);
            location == PAN_INDIA || location == state
        })
    }
}

/// A single criterion slot, tagged by shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion<'a> {
    Categorical(&'a Categorical),
    Location(&'a LocationCriterion),
    Range(&'a RangeCriterion),
}

impl Criterion<'_> {
    /// Whether the slot counts toward possible points.
    pub fn is_defined(&self) -> bool {
        match self {
            Criterion::Categorical(categorical) => categorical.is_set(),
            Criterion::Location(_) => true,
            Criterion::Range(range) => range.is_defined(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRuleSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Categorical>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<RangeCriterion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<LocationCriterion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sectors: Option<Categorical>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_types: Option<Categorical>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_in_business: Option<RangeCriterion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<RangeCriterion>,
}

impl EligibilityRuleSet {
    pub fn criterion(&self, kind: CriterionKind) -> Option<Criterion<'_>> {
        match kind {
            CriterionKind::Gender => self.gender.as_ref().map(Criterion::Categorical),
            CriterionKind::Age => self.age.as_ref().map(Criterion::Range),
            CriterionKind::Location => self.locations.as_ref().map(Criterion::Location),
            CriterionKind::Sector => self.sectors.as_ref().map(Criterion::Categorical),
            CriterionKind::BusinessType => self.business_types.as_ref().map(Criterion::Categorical),
            CriterionKind::YearsInBusiness => self.years_in_business.as_ref().map(Criterion::Range),
            CriterionKind::LoanAmount => self.loan_amount.as_ref().map(Criterion::Range),
        }
    }

    /// Defined criteria in evaluation order.
    pub fn defined_criteria(&self) -> impl Iterator<Item = (CriterionKind, Criterion<'_>)> + '_ {
        CriterionKind::EVALUATION_ORDER
            .into_iter()
            .filter_map(move |kind| self.criterion(kind).map(|criterion| (kind, criterion)))
            .filter(|(_, criterion)| criterion.is_defined())
    }

    pub fn possible_points(&self) -> usize {
        self.defined_criteria().count()
    }
}
