use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of attributes in a claim record.
pub const CLAIM_FIELD_COUNT: usize = 34;

/// Claim attribute column names, in inference log order.
pub const CLAIM_COLUMNS: [&str; CLAIM_FIELD_COUNT] = [
    "months_as_customer",
    "age",
    "policy_state",
    "policy_csl",
    "policy_deductable",
    "policy_annual_premium",
    "umbrella_limit",
    "insured_zip",
    "insured_sex",
    "insured_education_level",
    "insured_occupation",
    "insured_hobbies",
    "insured_relationship",
    "capital-gains",
    "capital-loss",
    "incident_type",
    "collision_type",
    "incident_severity",
    "authorities_contacted",
    "incident_state",
    "incident_city",
    "incident_hour_of_the_day",
    "number_of_vehicles_involved",
    "property_damage",
    "bodily_injuries",
    "witnesses",
    "police_report_available",
    "auto_make",
    "auto_model",
    "auto_year",
    "injury_claim",
    "property_claim",
    "vehicle_claim",
    "total_claim_amount",
];

/// Attributes of one insurance claim submitted for scoring.
///
/// Equality is exact on every field, floats included. The inference log
/// relies on that when skipping a repeated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub months_as_customer: f64,
    pub age: f64,
    pub policy_state: String,
    pub policy_csl: String,
    pub policy_deductable: f64,
    pub policy_annual_premium: f64,
    pub umbrella_limit: f64,
    pub insured_zip: f64,
    pub insured_sex: String,
    pub insured_education_level: String,
    pub insured_occupation: String,
    pub insured_hobbies: String,
    pub insured_relationship: String,
    #[serde(rename = "capital-gains")]
    pub capital_gains: f64,
    #[serde(rename = "capital-loss")]
    pub capital_loss: f64,
    pub incident_type: String,
    pub collision_type: String,
    pub incident_severity: String,
    pub authorities_contacted: String,
    pub incident_state: String,
    pub incident_city: String,
    pub incident_hour_of_the_day: f64,
    pub number_of_vehicles_involved: u8,
    pub property_damage: String,
    pub bodily_injuries: u8,
    pub witnesses: u8,
    pub police_report_available: String,
    pub auto_make: String,
    pub auto_model: String,
    pub auto_year: f64,
    pub injury_claim: f64,
    pub property_claim: f64,
    pub vehicle_claim: f64,
    pub total_claim_amount: f64,
}

/// Borrowed view of a single claim attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Free-text numeric input.
    Number(f64),
    /// Small count picked from a fixed set.
    Count(u8),
    /// Category picked from a fixed set.
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Numeric view, if the attribute is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(value) => Some(value),
            FieldValue::Count(value) => Some(f64::from(value)),
            FieldValue::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }
}

/// Formats the value the way it is written to the inference log.
///
/// Floats use the shortest representation that parses back to the same
/// value, so a logged row compares equal to the record it came from.
impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Count(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// A cell that could not be turned back into a claim attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column {column}: cannot parse {value:?}")]
pub struct ColumnParseError {
    pub column: &'static str,
    pub value: String,
}

impl ClaimRecord {
    /// All attributes paired with their column names, in log order.
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); CLAIM_FIELD_COUNT] {
        use FieldValue::{Count, Number, Text};
        [
            ("months_as_customer", Number(self.months_as_customer)),
            ("age", Number(self.age)),
            ("policy_state", Text(&self.policy_state)),
            ("policy_csl", Text(&self.policy_csl)),
            ("policy_deductable", Number(self.policy_deductable)),
            ("policy_annual_premium", Number(self.policy_annual_premium)),
            ("umbrella_limit", Number(self.umbrella_limit)),
            ("insured_zip", Number(self.insured_zip)),
            ("insured_sex", Text(&self.insured_sex)),
            ("insured_education_level", Text(&self.insured_education_level)),
            ("insured_occupation", Text(&self.insured_occupation)),
            ("insured_hobbies", Text(&self.insured_hobbies)),
            ("insured_relationship", Text(&self.insured_relationship)),
            ("capital-gains", Number(self.capital_gains)),
            ("capital-loss", Number(self.capital_loss)),
            ("incident_type", Text(&self.incident_type)),
            ("collision_type", Text(&self.collision_type)),
            ("incident_severity", Text(&self.incident_severity)),
            ("authorities_contacted", Text(&self.authorities_contacted)),
            ("incident_state", Text(&self.incident_state)),
            ("incident_city", Text(&self.incident_city)),
            ("incident_hour_of_the_day", Number(self.incident_hour_of_the_day)),
            ("number_of_vehicles_involved", Count(self.number_of_vehicles_involved)),
            ("property_damage", Text(&self.property_damage)),
            ("bodily_injuries", Count(self.bodily_injuries)),
            ("witnesses", Count(self.witnesses)),
            ("police_report_available", Text(&self.police_report_available)),
            ("auto_make", Text(&self.auto_make)),
            ("auto_model", Text(&self.auto_model)),
            ("auto_year", Number(self.auto_year)),
            ("injury_claim", Number(self.injury_claim)),
            ("property_claim", Number(self.property_claim)),
            ("vehicle_claim", Number(self.vehicle_claim)),
            ("total_claim_amount", Number(self.total_claim_amount)),
        ]
    }

    /// Look up one attribute by column name.
    pub fn value(&self, column: &str) -> Option<FieldValue<'_>> {
        self.fields()
            .into_iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    /// Rebuild a record from log cells given in [`CLAIM_COLUMNS`] order.
    ///
    /// Categorical cells are taken verbatim; they are not checked against the
    /// form's option sets because the log may predate a change to them.
    pub fn from_cells(cells: &[&str; CLAIM_FIELD_COUNT]) -> Result<Self, ColumnParseError> {
        let number = |index: usize| -> Result<f64, ColumnParseError> {
            cells[index]
                .trim()
                .parse::<f64>()
                .map_err(|_| parse_error(index, cells[index]))
        };
        let count = |index: usize| -> Result<u8, ColumnParseError> {
            let raw = cells[index].trim();
            raw.parse::<u8>()
                .or_else(|_| whole_number(raw).ok_or(()))
                .map_err(|_| parse_error(index, cells[index]))
        };
        let text = |index: usize| cells[index].to_string();

        Ok(Self {
            months_as_customer: number(0)?,
            age: number(1)?,
            policy_state: text(2),
            policy_csl: text(3),
            policy_deductable: number(4)?,
            policy_annual_premium: number(5)?,
            umbrella_limit: number(6)?,
            insured_zip: number(7)?,
            insured_sex: text(8),
            insured_education_level: text(9),
            insured_occupation: text(10),
            insured_hobbies: text(11),
            insured_relationship: text(12),
            capital_gains: number(13)?,
            capital_loss: number(14)?,
            incident_type: text(15),
            collision_type: text(16),
            incident_severity: text(17),
            authorities_contacted: text(18),
            incident_state: text(19),
            incident_city: text(20),
            incident_hour_of_the_day: number(21)?,
            number_of_vehicles_involved: count(22)?,
            property_damage: text(23),
            bodily_injuries: count(24)?,
            witnesses: count(25)?,
            police_report_available: text(26),
            auto_make: text(27),
            auto_model: text(28),
            auto_year: number(29)?,
            injury_claim: number(30)?,
            property_claim: number(31)?,
            vehicle_claim: number(32)?,
            total_claim_amount: number(33)?,
        })
    }
}

fn parse_error(index: usize, value: &str) -> ColumnParseError {
    ColumnParseError {
        column: CLAIM_COLUMNS[index],
        value: value.to_string(),
    }
}

// Counts written by other tools sometimes carry a trailing ".0".
fn whole_number(raw: &str) -> Option<u8> {
    let value = raw.parse::<f64>().ok()?;
    if value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The dashboard's default claim.
    pub(crate) fn sample_record() -> ClaimRecord {
        ClaimRecord {
            months_as_customer: 120.0,
            age: 45.0,
            policy_state: "IN".into(),
            policy_csl: "250/500".into(),
            policy_deductable: 1000.0,
            policy_annual_premium: 850.5,
            umbrella_limit: 0.0,
            insured_zip: 43110.0,
            insured_sex: "MALE".into(),
            insured_education_level: "College".into(),
            insured_occupation: "engineer".into(),
            insured_hobbies: "chess".into(),
            insured_relationship: "own-child".into(),
            capital_gains: 0.0,
            capital_loss: 0.0,
            incident_type: "Single Vehicle Collision".into(),
            collision_type: "Rear Collision".into(),
            incident_severity: "Minor Damage".into(),
            authorities_contacted: "Police".into(),
            incident_state: "IN".into(),
            incident_city: "Indianapolis".into(),
            incident_hour_of_the_day: 14.0,
            number_of_vehicles_involved: 1,
            property_damage: "YES".into(),
            bodily_injuries: 0,
            witnesses: 0,
            police_report_available: "YES".into(),
            auto_make: "Toyota".into(),
            auto_model: "Camry".into(),
            auto_year: 2015.0,
            injury_claim: 5000.0,
            property_claim: 3000.0,
            vehicle_claim: 4000.0,
            total_claim_amount: 12000.0,
        }
    }

    fn cells_of(record: &ClaimRecord) -> Vec<String> {
        record.fields().iter().map(|(_, v)| v.to_string()).collect()
    }

    #[test]
    fn fields_follow_column_order() {
        let record = sample_record();
        let names: Vec<&str> = record.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, CLAIM_COLUMNS);
    }

    #[test]
    fn cells_parse_back_to_equal_record() {
        let mut record = sample_record();
        record.policy_annual_premium = 0.1 + 0.2;
        record.umbrella_limit = -1_000_000.0;
        let owned = cells_of(&record);
        let cells: [&str; CLAIM_FIELD_COUNT] =
            std::array::from_fn(|index| owned[index].as_str());
        assert_eq!(ClaimRecord::from_cells(&cells).unwrap(), record);
    }

    #[test]
    fn display_uses_plain_numbers() {
        let record = sample_record();
        assert_eq!(record.value("age").unwrap().to_string(), "45");
        assert_eq!(
            record.value("policy_annual_premium").unwrap().to_string(),
            "850.5"
        );
        assert_eq!(record.value("witnesses").unwrap().to_string(), "0");
    }

    #[test]
    fn unparsable_number_names_column() {
        let mut owned = cells_of(&sample_record());
        owned[1] = "forty".into();
        let cells: [&str; CLAIM_FIELD_COUNT] =
            std::array::from_fn(|index| owned[index].as_str());
        let err = ClaimRecord::from_cells(&cells).unwrap_err();
        assert_eq!(err.column, "age");
        assert_eq!(err.value, "forty");
    }

    #[test]
    fn counts_accept_trailing_zero_fraction() {
        let mut owned = cells_of(&sample_record());
        owned[22] = "3.0".into();
        let cells: [&str; CLAIM_FIELD_COUNT] =
            std::array::from_fn(|index| owned[index].as_str());
        let record = ClaimRecord::from_cells(&cells).unwrap();
        assert_eq!(record.number_of_vehicles_involved, 3);
    }

    #[test]
    fn json_uses_log_column_names() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert!(json.get("capital-gains").is_some());
        assert!(json.get("capital_gains").is_none());
    }
}
