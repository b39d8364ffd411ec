use crate::infra::load_catalog;
use asha_setu::error::AppError;
use asha_setu::schemes::{
    CriterionKind, MatchReport, NumericInput, ProfileSubmission, RankedResult,
    SchemeMatchingService,
};
use clap::Args;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Gender of the primary founder
    #[arg(long)]
    pub(crate) gender: String,
    /// Age of the primary founder
    #[arg(long)]
    pub(crate) age: String,
    /// State or union territory of the business
    #[arg(long)]
    pub(crate) state: String,
    /// Business sector or industry
    #[arg(long)]
    pub(crate) sector: String,
    /// Business type (e.g. "Sole Proprietorship", "MSME")
    #[arg(long)]
    pub(crate) business_type: String,
    /// Whole years the business has operated
    #[arg(long)]
    pub(crate) years_in_business: String,
    /// Loan amount required, in rupees
    #[arg(long)]
    pub(crate) loan_amount: String,
    /// Scheme catalog JSON (defaults to the bundled catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the response payload as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one applicant per row and camelCase profile headers
    pub(crate) profiles: PathBuf,
    /// Scheme catalog JSON (defaults to the bundled catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Number of schemes to print per applicant
    #[arg(long, default_value_t = 3)]
    pub(crate) top: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Scheme catalog JSON (defaults to the bundled catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let json = args.json;
    let service = SchemeMatchingService::new(catalog);

    let submission = ProfileSubmission {
        gender: Some(args.gender),
        age: Some(NumericInput::Text(args.age)),
        state: Some(args.state),
        sector: Some(args.sector),
        business_type: Some(args.business_type),
        years_in_business: Some(NumericInput::Text(args.years_in_business)),
        loan_amount: Some(NumericInput::Text(args.loan_amount)),
    };
    let report = service.match_submission(submission)?;

    if json {
        println!("{}", render_json(&report)?);
        return Ok(());
    }

    render_report(&report, report.count);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let service = SchemeMatchingService::new(catalog);
    let file = std::fs::File::open(&args.profiles)?;

    for (index, row) in parse_rows(file)?.into_iter().enumerate() {
        let label = row
            .applicant
            .clone()
            .unwrap_or_else(|| format!("row {}", index + 1));

        match service.match_submission(row.into_submission()) {
            Ok(report) => {
                println!("\n{label}");
                render_report(&report, args.top);
            }
            Err(err) => println!("\n{label}\n  Rejected: {err}"),
        }
    }

    Ok(())
}

pub(crate) fn list_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    println!("{} schemes in catalog", catalog.len());
    for program in catalog.programs() {
        let criteria: Vec<&str> = program
            .eligibility
            .defined_criteria()
            .map(|(kind, _)| kind.label())
            .collect();
        println!("- {} [{}]", program.name, criteria.join(", "));
        if let Some(link) = &program.apply_link {
            println!("  apply: {link}");
        }
    }

    Ok(())
}

fn render_report(report: &MatchReport, limit: usize) {
    if report.schemes.is_empty() {
        println!("  No matching schemes");
        return;
    }

    println!("  {} matching schemes", report.count);
    for scheme in report.schemes.iter().take(limit) {
        println!("  {}", summary_line(scheme));
    }
}

fn render_json(report: &MatchReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn summary_line(scheme: &RankedResult) -> String {
    let matched: Vec<&str> = scheme
        .matched_criteria
        .iter()
        .copied()
        .map(CriterionKind::label)
        .collect();
    format!(
        "- {:>3}% {} (matched: {})",
        scheme.eligibility_percentage,
        scheme.name,
        matched.join(", ")
    )
}

/// One applicant row from a batch CSV. Blank cells count as missing answers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    applicant: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    state: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sector: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    business_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    years_in_business: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    loan_amount: Option<String>,
}

impl BatchRow {
    fn into_submission(self) -> ProfileSubmission {
        ProfileSubmission {
            gender: self.gender,
            age: self.age.map(NumericInput::Text),
            state: self.state,
            sector: self.sector,
            business_type: self.business_type,
            years_in_business: self.years_in_business.map(NumericInput::Text),
            loan_amount: self.loan_amount.map(NumericInput::Text),
        }
    }
}

fn parse_rows<R: Read>(reader: R) -> Result<Vec<BatchRow>, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<BatchRow>() {
        rows.push(record?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use asha_setu::schemes::{Catalog, IntakeError, SchemeServiceError};

    const BATCH: &str = "applicant,gender,age,state,sector,businessType,yearsInBusiness,loanAmount\n\
Meera,Female,30,Delhi,Retail,Sole Proprietorship,2,50000\n\
,Male,45,Assam,Technology,Startup,1,\n";

    #[test]
    fn parse_rows_reads_headers_and_blank_cells() {
        let rows = parse_rows(BATCH.as_bytes()).expect("csv parses");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].applicant.as_deref(), Some("Meera"));
        assert_eq!(rows[0].business_type.as_deref(), Some("Sole Proprietorship"));
        assert!(rows[1].applicant.is_none());
        assert!(rows[1].loan_amount.is_none());
    }

    #[test]
    fn parse_rows_rejects_ragged_rows_as_batch_errors() {
        let ragged = "applicant,gender,age\nMeera,Female,30,Delhi\n";

        match parse_rows(ragged.as_bytes()) {
            Err(AppError::Batch(err)) => {
                assert!(matches!(err.kind(), csv::ErrorKind::UnequalLengths { .. }));
            }
            other => panic!("expected batch error, got {other:?}"),
        }
    }

    #[test]
    fn batch_rows_flow_through_intake() {
        let service = SchemeMatchingService::new(Catalog::bundled().expect("bundled catalog"));
        let mut rows = parse_rows(BATCH.as_bytes()).expect("csv parses").into_iter();

        let first = rows.next().expect("first row");
        let report = service
            .match_submission(first.into_submission())
            .expect("complete row matches");
        assert!(report.count > 0);

        let second = rows.next().expect("second row");
        match service.match_submission(second.into_submission()) {
            Err(SchemeServiceError::Intake(IntakeError::MissingFields(fields))) => {
                assert_eq!(fields, vec!["loanAmount"]);
            }
            other => panic!("expected missing loan amount, got {other:?}"),
        }
    }

    #[test]
    fn render_json_emits_the_response_payload() {
        let report = MatchReport::from(Vec::new());
        let payload: serde_json::Value =
            serde_json::from_str(&render_json(&report).expect("report renders"))
                .expect("rendered json parses");

        assert_eq!(payload, serde_json::json!({ "count": 0, "schemes": [] }));
    }

    #[test]
    fn summary_line_lists_matched_labels() {
        let scheme = RankedResult {
            name: "Stree Shakti Package".to_string(),
            description: String::new(),
            apply_link: None,
            eligibility_percentage: 67,
            matched_criteria: vec![CriterionKind::Gender, CriterionKind::BusinessType],
            key_eligibility: Vec::new(),
        };

        assert_eq!(
            summary_line(&scheme),
            "-  67% Stree Shakti Package (matched: Gender, Business Type)"
        );
    }
}
