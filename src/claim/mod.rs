//! Claim attributes and the form that assembles them.

pub mod choices;
mod form;
mod record;

pub use form::{ClaimForm, FieldError, FieldProblem, ValidationError};
pub use record::{CLAIM_COLUMNS, CLAIM_FIELD_COUNT, ClaimRecord, ColumnParseError, FieldValue};

#[cfg(test)]
pub(crate) use record::tests::sample_record;
