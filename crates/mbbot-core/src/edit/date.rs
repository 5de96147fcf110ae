use serde::{Deserialize, Serialize};

/// A date where month and day may be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl PartialDate {
    pub fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    pub fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    pub fn with_month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; unparseable parts are dropped
    pub fn parse(text: &str) -> Self {
        let mut parts = text.trim().split('-');
        let year = parts.next().and_then(|p| p.parse().ok());
        let month = parts.next().and_then(|p| p.parse().ok());
        let day = parts.next().and_then(|p| p.parse().ok());
        Self { year, month, day }
    }

    /// Form fields under `prefix`, e.g. `edit-artist.begin_date.year`
    ///
    /// Nothing is written without a year, and the day only follows a month.
    pub fn form_fields(&self, prefix: &str) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        let Some(year) = self.year else {
            return fields;
        };
        fields.push((format!("{}.year", prefix), year.to_string()));
        if let Some(month) = self.month {
            fields.push((format!("{}.month", prefix), month.to_string()));
            if let Some(day) = self.day {
                fields.push((format!("{}.day", prefix), day.to_string()));
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_dates() {
        assert_eq!(PartialDate::parse("1999"), PartialDate::year(1999));
        assert_eq!(PartialDate::parse("1999-04"), PartialDate::year(1999).with_month(4));
        assert_eq!(PartialDate::parse("1999-04-01"), PartialDate::ymd(1999, 4, 1));
        assert!(PartialDate::parse("").is_empty());
    }

    #[test]
    fn test_form_fields_skip_day_without_month() {
        let date = PartialDate {
            year: Some(1970),
            month: None,
            day: Some(3),
        };
        assert_eq!(
            date.form_fields("ar.begin_date"),
            vec![("ar.begin_date.year".to_string(), "1970".to_string())]
        );

        let fields = PartialDate::ymd(1970, 1, 3).form_fields("edit-artist.end_date");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[2], ("edit-artist.end_date.day".to_string(), "3".to_string()));
    }

    #[test]
    fn test_form_fields_need_a_year() {
        let date = PartialDate {
            year: None,
            month: Some(4),
            day: Some(1),
        };
        assert!(date.form_fields("edit-artist.begin_date").is_empty());
    }
}
