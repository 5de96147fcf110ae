use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref FOUND_EDITS: Regex =
        Regex::new(r"Found (?:at least )?([0-9]+(?:,[0-9]+)?) edits").unwrap();
}

/// Site-wide editing limits for a single account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditLimits {
    pub max_open_edits: u64,
    pub max_edits_per_day: u64,
}

impl Default for EditLimits {
    fn default() -> Self {
        Self {
            max_open_edits: 2000,
            max_edits_per_day: 1000,
        }
    }
}

/// How many more edits may be entered right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EditAllowance {
    /// Edits that may be left open for voting
    pub normal_edits_left: u64,
    /// Edits of any kind still allowed today
    pub edits_left: u64,
}

impl EditAllowance {
    pub fn compute(edits_today: u64, open_edits: u64, limits: EditLimits) -> Self {
        let edits_left = limits.max_edits_per_day.saturating_sub(edits_today);
        if edits_left == 0 {
            return Self::default();
        }
        let open_left = limits.max_open_edits.saturating_sub(open_edits);
        Self {
            normal_edits_left: edits_left.min(open_left),
            edits_left,
        }
    }

    /// No edits left at all
    pub fn exhausted() -> Self {
        Self::default()
    }

    pub fn is_exhausted(&self) -> bool {
        self.edits_left == 0
    }
}

/// Read the "Found N edits" counter of an edit search page
pub fn parse_found_edits(body: &str) -> Option<u64> {
    let captures = FOUND_EDITS.captures(body)?;
    let digits: String = captures[1].chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Query for edits opened by an editor since `today` (`YYYY-MM-DD`)
pub fn todays_edits_query(username: &str, editor_id: u64, today: &str) -> Vec<(String, String)> {
    [
        ("page", "2000"),
        ("combinator", "and"),
        ("negation", "0"),
        ("conditions.0.field", "open_time"),
        ("conditions.0.operator", ">"),
        ("conditions.0.args.0", today),
        ("conditions.0.args.1", ""),
        ("conditions.1.field", "editor"),
        ("conditions.1.operator", "="),
        ("conditions.1.name", username),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .chain(std::iter::once((
        "conditions.1.args.0".to_string(),
        editor_id.to_string(),
    )))
    .collect()
}
