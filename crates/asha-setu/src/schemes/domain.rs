use serde::{Deserialize, Deserializer, Serialize};

use super::criteria::EligibilityRuleSet;

/// Applicant attributes after intake validation. Every field is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub gender: String,
    pub age: u32,
    pub state: String,
    pub sector: String,
    pub business_type: String,
    pub years_in_business: u32,
    pub loan_amount: f64,
}

/// Borrowed view of the profile attribute a criterion slot is tested against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileAttribute<'a> {
    Text(&'a str),
    Number(f64),
}

impl Profile {
    pub fn attribute(&self, kind: CriterionKind) -> ProfileAttribute<'_> {
        match kind {
            CriterionKind::Gender => ProfileAttribute::Text(&self.gender),
            CriterionKind::Age => ProfileAttribute::Number(f64::from(self.age)),
            CriterionKind::Location => ProfileAttribute::Text(&self.state),
            CriterionKind::Sector => ProfileAttribute::Text(&self.sector),
            CriterionKind::BusinessType => ProfileAttribute::Text(&self.business_type),
            CriterionKind::YearsInBusiness => {
                ProfileAttribute::Number(f64::from(self.years_in_business))
            }
            CriterionKind::LoanAmount => ProfileAttribute::Number(self.loan_amount),
        }
    }
}

/// One funding scheme in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
    /// Display-only bullet points; never consulted when scoring.
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_eligibility: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub eligibility: EligibilityRuleSet,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// The seven criterion slots a rule set may define, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionKind {
    #[serde(rename = "Gender")]
    Gender,
    #[serde(rename = "Age")]
    Age,
    #[serde(rename = "Location")]
    Location,
    #[serde(rename = "Sector")]
    Sector,
    #[serde(rename = "Business Type")]
    BusinessType,
    #[serde(rename = "Years in Business")]
    YearsInBusiness,
    #[serde(rename = "Loan Amount")]
    LoanAmount,
}

impl CriterionKind {
    pub const EVALUATION_ORDER: [CriterionKind; 7] = [
        CriterionKind::Gender,
        CriterionKind::Age,
        CriterionKind::Location,
        CriterionKind::Sector,
        CriterionKind::BusinessType,
        CriterionKind::YearsInBusiness,
        CriterionKind::LoanAmount,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CriterionKind::Gender => "Gender",
            CriterionKind::Age => "Age",
            CriterionKind::Location => "Location",
            CriterionKind::Sector => "Sector",
            CriterionKind::BusinessType => "Business Type",
            CriterionKind::YearsInBusiness => "Years in Business",
            CriterionKind::LoanAmount => "Loan Amount",
        }
    }
}

/// Scored view of one program for one profile. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
    pub eligibility_percentage: u8,
    pub matched_criteria: Vec<CriterionKind>,
    pub key_eligibility: Vec<String>,
}
