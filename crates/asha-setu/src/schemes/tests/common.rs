use axum::response::Response;
use serde_json::Value;

use crate::schemes::catalog::Catalog;
use crate::schemes::criteria::{
    Categorical, EligibilityRuleSet, LocationCriterion, RangeCriterion,
};
use crate::schemes::domain::{Profile, Program};
use crate::schemes::intake::{NumericInput, ProfileSubmission};
use crate::schemes::service::SchemeMatchingService;

pub(super) fn profile() -> Profile {
    Profile {
        gender: "Female".to_string(),
        age: 30,
        state: "Delhi".to_string(),
        sector: "Retail".to_string(),
        business_type: "Sole Proprietorship".to_string(),
        years_in_business: 2,
        loan_amount: 50_000.0,
    }
}

pub(super) fn submission() -> ProfileSubmission {
    ProfileSubmission {
        gender: Some("Female".to_string()),
        age: Some(NumericInput::Number(30.0)),
        state: Some("Delhi".to_string()),
        sector: Some("Retail".to_string()),
        business_type: Some("Sole Proprietorship".to_string()),
        years_in_business: Some(NumericInput::Number(2.0)),
        loan_amount: Some(NumericInput::Number(50_000.0)),
    }
}

pub(super) fn program(name: &str, eligibility: EligibilityRuleSet) -> Program {
    Program {
        name: name.to_string(),
        description: format!("{name} support for small enterprises"),
        apply_link: Some(format!(
            "https://schemes.example.gov.in/{}",
            name.to_lowercase().replace(' ', "-")
        )),
        key_eligibility: vec![format!("{name} eligibility summary")],
        eligibility,
    }
}

/// Gender, pan-India location and a loan window: scores 100 for `profile()`.
pub(super) fn women_enterprise_program() -> Program {
    program(
        "Women Enterprise Fund",
        EligibilityRuleSet {
            gender: Some(Categorical::one("Female")),
            locations: Some(LocationCriterion::new(["pan-india"])),
            loan_amount: Some(RangeCriterion::between(10_000.0, 1_000_000.0)),
            ..EligibilityRuleSet::default()
        },
    )
}

/// Technology startups only: scores 0 for `profile()`.
pub(super) fn tech_startup_program() -> Program {
    program(
        "Tech Startup Seed",
        EligibilityRuleSet {
            sectors: Some(Categorical::any_of(["Technology"])),
            business_types: Some(Categorical::any_of(["Startup"])),
            ..EligibilityRuleSet::default()
        },
    )
}

/// Age window plus gender set: scores 50 for a 40 year old woman.
pub(super) fn young_founder_program() -> Program {
    program(
        "Young Founder Grant",
        EligibilityRuleSet {
            age: Some(RangeCriterion::between(18.0, 35.0)),
            gender: Some(Categorical::any_of(["Female", "Other/Prefer not to say"])),
            ..EligibilityRuleSet::default()
        },
    )
}

pub(super) fn unconditional_program() -> Program {
    program("Open Call", EligibilityRuleSet::default())
}

pub(super) fn catalog_of(programs: Vec<Program>) -> Catalog {
    Catalog::from_programs(programs).expect("test catalog has unique names")
}

pub(super) fn test_catalog() -> Catalog {
    catalog_of(vec![
        women_enterprise_program(),
        tech_startup_program(),
        young_founder_program(),
        unconditional_program(),
    ])
}

pub(super) fn service() -> SchemeMatchingService {
    SchemeMatchingService::new(test_catalog())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
