//! The three-field project draft check

use crate::error::FieldValidationError;
use crate::rule::{validate, Rule};

/// A validated project submission: title, description and headcount.
///
/// `people` is kept as `f64` so the numeric coercion path round-trips
/// unchanged (see [`parse_people`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: f64,
}

/// Coerce the raw headcount field to a number.
///
/// Empty or whitespace-only input coerces to 0, unparseable input to NaN.
/// Both then fail the 1..=5 range rule, so an empty field and a
/// non-numeric one collapse into the same range error.
pub fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

/// Validate the three form fields and produce a draft.
///
/// On failure, returns one message per failing field in fixed order:
/// title, description, people.
pub fn check_draft(
    title: &str,
    description: &str,
    people_raw: &str,
) -> Result<ProjectDraft, Vec<FieldValidationError>> {
    let people = parse_people(people_raw);

    let title_rule = Rule::text(title).required().min_length(1).max_length(30);
    let description_rule = Rule::text(description).required().min_length(4);
    let people_rule = Rule::number(people).required().min(1.0).max(5.0);

    let mut errors = Vec::new();

    if !validate(&title_rule) {
        errors.push(FieldValidationError::new(
            "title",
            "Title is missing or wrong length",
        ));
    }
    if !validate(&description_rule) {
        errors.push(FieldValidationError::new(
            "description",
            "Description is missing or too short",
        ));
    }
    if !validate(&people_rule) {
        errors.push(FieldValidationError::new(
            "people",
            "Project needs between 1 and 5 people assigned",
        ));
    }

    if errors.is_empty() {
        Ok(ProjectDraft {
            title: title.to_string(),
            description: description.to_string(),
            people,
        })
    } else {
        log::debug!("draft check failed with {} error(s)", errors.len());
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(errors: &[FieldValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_valid_draft() {
        let draft = check_draft("My Project", "A longer description", "3").unwrap();
        assert_eq!(draft.title, "My Project");
        assert_eq!(draft.description, "A longer description");
        assert_eq!(draft.people, 3.0);
    }

    #[test]
    fn test_missing_title() {
        let errors = check_draft("", "A longer description", "3").unwrap_err();
        assert_eq!(messages(&errors), vec!["Title is missing or wrong length"]);
    }

    #[test]
    fn test_title_too_long() {
        // Nonempty but over the 30 character bound
        let title = "x".repeat(31);
        let errors = check_draft(&title, "A longer description", "3").unwrap_err();
        assert_eq!(messages(&errors), vec!["Title is missing or wrong length"]);
    }

    #[test]
    fn test_description_too_short() {
        let errors = check_draft("My Project", "abc", "3").unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["Description is missing or too short"]
        );
    }

    #[test]
    fn test_people_out_of_range() {
        let errors = check_draft("My Project", "A longer description", "0").unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["Project needs between 1 and 5 people assigned"]
        );

        let errors = check_draft("My Project", "A longer description", "6").unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["Project needs between 1 and 5 people assigned"]
        );
    }

    #[test]
    fn test_people_non_numeric_collapses_to_range_error() {
        // Non-numeric and empty headcount both report the range message
        let errors = check_draft("My Project", "A longer description", "abc").unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["Project needs between 1 and 5 people assigned"]
        );

        let errors = check_draft("My Project", "A longer description", "").unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["Project needs between 1 and 5 people assigned"]
        );
    }

    #[test]
    fn test_errors_in_field_order() {
        let errors = check_draft("", "", "").unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                "Title is missing or wrong length",
                "Description is missing or too short",
                "Project needs between 1 and 5 people assigned",
            ]
        );
        assert_eq!(errors[0].field, "title");
        assert_eq!(errors[1].field, "description");
        assert_eq!(errors[2].field, "people");
    }

    #[test]
    fn test_parse_people_coercion() {
        assert_eq!(parse_people("3"), 3.0);
        assert_eq!(parse_people(" 4 "), 4.0);
        assert_eq!(parse_people(""), 0.0);
        assert_eq!(parse_people("   "), 0.0);
        assert!(parse_people("abc").is_nan());
    }

    #[test]
    fn test_fractional_people_accepted() {
        // The range check is numeric, not integral
        let draft = check_draft("My Project", "A longer description", "3.5").unwrap();
        assert_eq!(draft.people, 3.5);
    }
}
