use super::common::*;
use crate::schemes::domain::CriterionKind;
use crate::schemes::intake::{IntakeError, ProfileSubmission};
use crate::schemes::service::SchemeServiceError;

#[test]
fn match_submission_reports_count_and_ranked_schemes() {
    let report = service()
        .match_submission(submission())
        .expect("submission matches");

    assert_eq!(report.count, report.schemes.len());
    assert_eq!(report.count, 2);
    assert_eq!(report.schemes[0].name, "Women Enterprise Fund");
    assert_eq!(
        report.schemes[0].matched_criteria,
        vec![
            CriterionKind::Gender,
            CriterionKind::Location,
            CriterionKind::LoanAmount
        ]
    );
}

#[test]
fn rejected_submission_never_reaches_engine() {
    let error = service()
        .match_submission(ProfileSubmission::default())
        .expect_err("empty submission rejected");

    match error {
        SchemeServiceError::Intake(IntakeError::MissingFields(fields)) => {
            assert_eq!(fields.len(), 7);
        }
        other => panic!("expected missing fields, got {other:?}"),
    }
}

#[test]
fn zero_matches_is_a_successful_empty_report() {
    let service = crate::schemes::service::SchemeMatchingService::new(catalog_of(vec![
        tech_startup_program(),
    ]));

    let report = service
        .match_submission(submission())
        .expect("empty result is not an error");

    assert_eq!(report.count, 0);
    assert!(report.schemes.is_empty());
}

#[test]
fn match_profile_skips_intake() {
    let service = service();
    let mut applicant = profile();
    applicant.state = "Nowhere".to_string();
    applicant.age = 40;

    let report = service.match_profile(&applicant);

    assert_eq!(report.count, 2);
    assert_eq!(report.schemes[0].name, "Women Enterprise Fund");
    assert!(report.schemes[0]
        .matched_criteria
        .contains(&CriterionKind::Location));
    assert_eq!(service.catalog().len(), 4);
}
