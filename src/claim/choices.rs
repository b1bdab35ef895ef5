//! Field tables driving the claim form.
//!
//! Ranges in the numeric hints are shown to the user but not enforced.

/// Free-text numeric input.
#[derive(Debug, Clone, Copy)]
pub struct NumericField {
    pub column: &'static str,
    pub label: &'static str,
    /// Expected range, shown next to the label.
    pub hint: &'static str,
    pub default: &'static str,
}

/// Small integer picked from a fixed list.
#[derive(Debug, Clone, Copy)]
pub struct CountField {
    pub column: &'static str,
    pub label: &'static str,
    pub options: &'static [u8],
}

/// Category picked from a fixed list. The first option is the default.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceField {
    pub column: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
}

const fn numeric(
    column: &'static str,
    label: &'static str,
    hint: &'static str,
    default: &'static str,
) -> NumericField {
    NumericField {
        column,
        label,
        hint,
        default,
    }
}

const fn choice(
    column: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> ChoiceField {
    ChoiceField {
        column,
        label,
        options,
    }
}

pub const NUMERIC_FIELDS: [NumericField; 14] = [
    numeric("months_as_customer", "Months as Customer", "0–500", "120"),
    numeric("age", "Age", "18–100", "45"),
    numeric("policy_deductable", "Policy Deductible", "0–5000", "1000"),
    numeric("policy_annual_premium", "Annual Premium", "0–10000", "850.5"),
    numeric("umbrella_limit", "Umbrella Limit", "±1000000", "0"),
    numeric("insured_zip", "Zip Code", "10000–99999", "43110"),
    numeric("capital-gains", "Capital Gains", "0–100000", "0"),
    numeric("capital-loss", "Capital Loss", "0–100000", "0"),
    numeric("incident_hour_of_the_day", "Incident Hour", "0–23", "14"),
    numeric("auto_year", "Auto Year", "1995–2025", "2015"),
    numeric("injury_claim", "Injury Claim Amount", "0–100000", "5000"),
    numeric("property_claim", "Property Claim Amount", "0–100000", "3000"),
    numeric("vehicle_claim", "Vehicle Claim Amount", "0–100000", "4000"),
    numeric("total_claim_amount", "Total Claim Amount", "0–500000", "12000"),
];

pub const COUNT_FIELDS: [CountField; 3] = [
    CountField {
        column: "number_of_vehicles_involved",
        label: "Vehicles Involved",
        options: &[1, 2, 3, 4],
    },
    CountField {
        column: "bodily_injuries",
        label: "Bodily Injuries",
        options: &[0, 1, 2],
    },
    CountField {
        column: "witnesses",
        label: "Witnesses",
        options: &[0, 1, 2, 3],
    },
];

pub const CHOICE_FIELDS: [ChoiceField; 17] = [
    choice("policy_state", "Policy State", &["IN", "IL", "OH"]),
    choice("policy_csl", "Policy CSL", &["250/500", "500/1000", "100/300"]),
    choice("insured_sex", "Sex", &["MALE", "FEMALE"]),
    choice(
        "insured_education_level",
        "Education",
        &["College", "High School", "JD", "MD", "PhD"],
    ),
    choice(
        "insured_occupation",
        "Occupation",
        &["engineer", "teacher", "doctor", "clerk", "manager"],
    ),
    choice(
        "insured_hobbies",
        "Hobbies",
        &["chess", "cross-fit", "reading", "writing", "video games"],
    ),
    choice(
        "insured_relationship",
        "Relationship",
        &["own-child", "husband", "wife", "other-relative"],
    ),
    choice(
        "incident_type",
        "Incident Type",
        &[
            "Single Vehicle Collision",
            "Multi-vehicle Collision",
            "Parked Car",
        ],
    ),
    choice(
        "collision_type",
        "Collision Type",
        &["Rear Collision", "Side Collision", "Front Collision"],
    ),
    choice(
        "incident_severity",
        "Severity",
        &["Minor Damage", "Major Damage", "Total Loss"],
    ),
    choice(
        "authorities_contacted",
        "Authorities Contacted",
        &["Police", "Fire", "Other", "None"],
    ),
    choice("incident_state", "Incident State", &["IN", "OH", "IL"]),
    choice(
        "incident_city",
        "Incident City",
        &["Indianapolis", "Columbus", "Springfield"],
    ),
    choice("property_damage", "Property Damage", &["YES", "NO"]),
    choice("police_report_available", "Police Report", &["YES", "NO"]),
    choice(
        "auto_make",
        "Auto Make",
        &["Toyota", "Ford", "Dodge", "Chevrolet"],
    ),
    choice(
        "auto_model",
        "Auto Model",
        &["Camry", "Escape", "Accord", "Civic", "A3"],
    ),
];
