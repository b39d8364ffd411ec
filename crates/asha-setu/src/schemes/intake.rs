use serde::{Deserialize, Serialize};

use super::domain::Profile;
use super::matching::normalize_text;

/// States and union territories an applicant may report.
pub const JURISDICTIONS: [&str; 36] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Numeric answers arrive either as JSON numbers or as form strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// Raw questionnaire answers as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<NumericInput>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub years_in_business: Option<NumericInput>,
    #[serde(default)]
    pub loan_amount: Option<NumericInput>,
}

/// Validation errors raised before a profile reaches the matching engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("Missing required fields.")]
    MissingFields(Vec<&'static str>),
    #[error("{field} {reason} (found {value:?})")]
    InvalidNumber {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("unknown state or union territory: {0:?}")]
    UnknownJurisdiction(String),
}

/// Guard responsible for producing fully populated `Profile` values.
#[derive(Debug, Clone)]
pub struct ProfileGuard {
    jurisdictions: Vec<String>,
}

impl Default for ProfileGuard {
    fn default() -> Self {
        Self::with_jurisdictions(JURISDICTIONS)
    }
}

impl ProfileGuard {
    pub fn with_jurisdictions<I, S>(jurisdictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            jurisdictions: jurisdictions
                .into_iter()
                .map(|name| normalize_text(name.as_ref()))
                .collect(),
        }
    }

    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<Profile, IntakeError> {
        let ProfileSubmission {
            gender,
            age,
            state,
            sector,
            business_type,
            years_in_business,
            loan_amount,
        } = submission;

        let gender = gender.filter(|value| !value.trim().is_empty());
        let state = state.filter(|value| !value.trim().is_empty());
        let sector = sector.filter(|value| !value.trim().is_empty());
        let business_type = business_type.filter(|value| !value.trim().is_empty());

        let mut missing = Vec::new();
        if gender.is_none() {
            missing.push("gender");
        }
        if age.is_none() {
            missing.push("age");
        }
        if state.is_none() {
            missing.push("state");
        }
        if sector.is_none() {
            missing.push("sector");
        }
        if business_type.is_none() {
            missing.push("businessType");
        }
        if years_in_business.is_none() {
            missing.push("yearsInBusiness");
        }
        if loan_amount.is_none() {
            missing.push("loanAmount");
        }

        let (
            Some(gender),
            Some(age),
            Some(state),
            Some(sector),
            Some(business_type),
            Some(years_in_business),
            Some(loan_amount),
        ) = (
            gender,
            age,
            state,
            sector,
            business_type,
            years_in_business,
            loan_amount,
        )
        else {
            return Err(IntakeError::MissingFields(missing));
        };

        let age = whole_number("age", &age)?;
        let years_in_business = whole_number("yearsInBusiness", &years_in_business)?;
        let loan_amount = non_negative("loanAmount", &loan_amount)?;

        if !self.jurisdictions.contains(&normalize_text(&state)) {
            return Err(IntakeError::UnknownJurisdiction(state));
        }

        Ok(Profile {
            gender,
            age,
            state,
            sector,
            business_type,
            years_in_business,
            loan_amount,
        })
    }
}

fn non_negative(field: &'static str, input: &NumericInput) -> Result<f64, IntakeError> {
    let invalid = |reason| IntakeError::InvalidNumber {
        field,
        value: describe(input),
        reason,
    };

    let value = match input {
        NumericInput::Number(value) => *value,
        NumericInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("must be a number"))?,
    };

    if !value.is_finite() {
        return Err(invalid("must be a number"));
    }
    if value < 0.0 {
        return Err(invalid("must not be negative"));
    }

    Ok(value)
}

fn whole_number(field: &'static str, input: &NumericInput) -> Result<u32, IntakeError> {
    let value = non_negative(field, input)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(IntakeError::InvalidNumber {
            field,
            value: describe(input),
            reason: "must be a whole number",
        });
    }

    Ok(value as u32)
}

fn describe(input: &NumericInput) -> String {
    match input {
        NumericInput::Number(value) => value.to_string(),
        NumericInput::Text(text) => text.clone(),
    }
}
