//! Project intake domain logic
//!
//! Pure validation of the project intake form: declarative per-field rules,
//! the three-field draft check, and field-level validation errors. No
//! terminal or rendering dependencies.

pub mod draft;
pub mod error;
pub mod rule;

pub use draft::{check_draft, parse_people, ProjectDraft};
pub use error::FieldValidationError;
pub use rule::{validate, Rule, RuleValue};
