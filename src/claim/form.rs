use std::collections::HashMap;
use std::fmt;

use super::choices::{CHOICE_FIELDS, COUNT_FIELDS, NUMERIC_FIELDS};
use super::record::{CLAIM_COLUMNS, CLAIM_FIELD_COUNT, ClaimRecord};

/// Raw form inputs as typed or picked by the user.
///
/// Numeric inputs stay as text until [`ClaimForm::build`] so a bad entry can
/// be reported instead of lost. Choice inputs are option indices into the
/// matching table in [`super::choices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimForm {
    pub numeric: [String; NUMERIC_FIELDS.len()],
    pub counts: [usize; COUNT_FIELDS.len()],
    pub choices: [usize; CHOICE_FIELDS.len()],
}

impl Default for ClaimForm {
    fn default() -> Self {
        Self {
            numeric: NUMERIC_FIELDS.map(|field| field.default.to_string()),
            counts: [0; COUNT_FIELDS.len()],
            choices: [0; CHOICE_FIELDS.len()],
        }
    }
}

/// Why a numeric input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Empty,
    NotANumber,
    NotFinite,
}

/// One rejected form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub column: &'static str,
    pub label: &'static str,
    pub input: String,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            FieldProblem::Empty => write!(f, "{} is empty", self.label),
            FieldProblem::NotANumber => write!(f, "{} is not a number ({:?})", self.label, self.input),
            FieldProblem::NotFinite => write!(f, "{} must be finite ({:?})", self.label, self.input),
        }
    }
}

/// Every input that kept the form from producing a claim record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl std::error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid input: ")?;
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl ValidationError {
    /// Columns of the rejected inputs, in form order.
    pub fn columns(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.column).collect()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|field| field.column == column)
    }
}

impl ClaimForm {
    /// Parse every input and assemble a claim record.
    ///
    /// All numeric inputs are checked before returning, so the error lists
    /// every offending field rather than the first one.
    pub fn build(&self) -> Result<ClaimRecord, ValidationError> {
        let mut cells: HashMap<&'static str, String> = HashMap::with_capacity(CLAIM_FIELD_COUNT);
        let mut errors = Vec::new();

        for (field, input) in NUMERIC_FIELDS.iter().zip(&self.numeric) {
            match parse_number(input) {
                Ok(value) => {
                    cells.insert(field.column, value.to_string());
                }
                Err(problem) => errors.push(FieldError {
                    column: field.column,
                    label: field.label,
                    input: input.clone(),
                    problem,
                }),
            }
        }
        if !errors.is_empty() {
            return Err(ValidationError { fields: errors });
        }

        for (field, &selected) in COUNT_FIELDS.iter().zip(&self.counts) {
            let value = field.options.get(selected).or(field.options.first());
            cells.insert(field.column, value.map(u8::to_string).unwrap_or_default());
        }
        for (field, &selected) in CHOICE_FIELDS.iter().zip(&self.choices) {
            let value = field.options.get(selected).or(field.options.first());
            cells.insert(field.column, value.copied().unwrap_or_default().to_string());
        }

        let ordered: [&str; CLAIM_FIELD_COUNT] = std::array::from_fn(|index| {
            cells
                .get(CLAIM_COLUMNS[index])
                .map(String::as_str)
                .unwrap_or_default()
        });
        ClaimRecord::from_cells(&ordered).map_err(|err| ValidationError {
            fields: vec![FieldError {
                column: err.column,
                label: err.column,
                input: err.value,
                problem: FieldProblem::NotANumber,
            }],
        })
    }

    /// Text of a numeric input by column, if the column is a numeric input.
    pub fn numeric_input(&self, column: &str) -> Option<&str> {
        NUMERIC_FIELDS
            .iter()
            .position(|field| field.column == column)
            .map(|index| self.numeric[index].as_str())
    }

    /// Replace the text of a numeric input. Returns false for unknown columns.
    pub fn set_numeric(&mut self, column: &str, value: impl Into<String>) -> bool {
        match NUMERIC_FIELDS.iter().position(|field| field.column == column) {
            Some(index) => {
                self.numeric[index] = value.into();
                true
            }
            None => false,
        }
    }

    /// Pick a category by its label text. Returns false if either is unknown.
    pub fn select_choice(&mut self, column: &str, option: &str) -> bool {
        let Some(index) = CHOICE_FIELDS.iter().position(|field| field.column == column) else {
            return false;
        };
        match CHOICE_FIELDS[index].options.iter().position(|o| *o == option) {
            Some(selected) => {
                self.choices[index] = selected;
                true
            }
            None => false,
        }
    }

    /// Pick a count by value. Returns false if either is unknown.
    pub fn select_count(&mut self, column: &str, value: u8) -> bool {
        let Some(index) = COUNT_FIELDS.iter().position(|field| field.column == column) else {
            return false;
        };
        match COUNT_FIELDS[index].options.iter().position(|o| *o == value) {
            Some(selected) => {
                self.counts[index] = selected;
                true
            }
            None => false,
        }
    }
}

fn parse_number(input: &str) -> Result<f64, FieldProblem> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldProblem::Empty);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| FieldProblem::NotANumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldProblem::NotFinite)
    }
}
