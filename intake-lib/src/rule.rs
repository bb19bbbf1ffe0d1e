//! Declarative per-field validation rules

/// The value a rule is checked against. Form fields hold either free text
/// or a coerced number.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleValue {
    Text(String),
    Number(f64),
}

impl RuleValue {
    fn stringified(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Constraint set for one field's value.
///
/// Length bounds apply only to textual values; numeric bounds apply only
/// to numeric values. Unset bounds are skipped.
#[derive(Debug, Clone)]
pub struct Rule {
    pub value: RuleValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Rule {
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(RuleValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(RuleValue::Number(value))
    }

    fn new(value: RuleValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Check a rule. Returns true iff every configured check passes.
///
/// The required check stringifies the value first, so it applies to both
/// variants. Length bounds compare against the trimmed character count,
/// which is also what the required check uses. NaN fails any configured
/// numeric bound.
pub fn validate(rule: &Rule) -> bool {
    let mut valid = true;
    let length = rule.value.stringified().trim().chars().count();

    if rule.required {
        valid = valid && length != 0;
    }

    if let (Some(min_length), RuleValue::Text(_)) = (rule.min_length, &rule.value) {
        valid = valid && length >= min_length;
    }

    if let (Some(max_length), RuleValue::Text(_)) = (rule.max_length, &rule.value) {
        valid = valid && length <= max_length;
    }

    if let (Some(min), RuleValue::Number(n)) = (rule.min, &rule.value) {
        valid = valid && *n >= min;
    }

    if let (Some(max), RuleValue::Number(n)) = (rule.max, &rule.value) {
        valid = valid && *n <= max;
    }

    valid
}
