use super::super::criteria::{AttributeValue, Categorical, Criterion};
use super::super::domain::{CriterionKind, Profile, ProfileAttribute, Program, RankedResult};
use super::rules::value_matches;

/// Points tally for one program against one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramScore {
    pub possible_points: u8,
    pub matched_points: u8,
    pub eligibility_percentage: u8,
    pub matched_criteria: Vec<CriterionKind>,
}

impl ProgramScore {
    pub fn into_result(self, program: &Program) -> RankedResult {
        RankedResult {
            name: program.name.clone(),
            description: program.description.clone(),
            apply_link: program.apply_link.clone(),
            eligibility_percentage: self.eligibility_percentage,
            matched_criteria: self.matched_criteria,
            key_eligibility: program.key_eligibility.clone(),
        }
    }
}

pub fn score_program(program: &Program, profile: &Profile) -> ProgramScore {
    let mut possible_points: u8 = 0;
    let mut matched_points: u8 = 0;
    let mut matched_criteria = Vec::new();

    for (kind, criterion) in program.eligibility.defined_criteria() {
        possible_points += 1;
        if criterion_matches(criterion, profile.attribute(kind)) {
            matched_points += 1;
            matched_criteria.push(kind);
        }
    }

    ProgramScore {
        possible_points,
        matched_points,
        eligibility_percentage: percentage(matched_points, possible_points),
        matched_criteria,
    }
}

fn criterion_matches(criterion: Criterion<'_>, attribute: ProfileAttribute<'_>) -> bool {
    match (criterion, attribute) {
        (Criterion::Categorical(expected), ProfileAttribute::Text(value)) => {
            value_matches(Some(expected), &Categorical::One(AttributeValue::from(value)))
        }
        (Criterion::Categorical(expected), ProfileAttribute::Number(value)) => {
            value_matches(Some(expected), &Categorical::One(AttributeValue::Number(value)))
        }
        (Criterion::Location(locations), ProfileAttribute::Text(state)) => locations.allows(state),
        (Criterion::Range(range), ProfileAttribute::Number(value)) => range.contains(value),
        (Criterion::Location(_), ProfileAttribute::Number(_))
        | (Criterion::Range(_), ProfileAttribute::Text(_)) => false,
    }
}

fn percentage(matched: u8, possible: u8) -> u8 {
    if possible == 0 {
        return 0;
    }

    let ratio = f64::from(matched) / f64::from(possible);
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
