use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One recorded user action. Entries are immutable once appended; the
/// stored order is forward chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    timestamp: NaiveDateTime,
    action: String,
}

impl ActivityEntry {
    pub fn new(timestamp: NaiveDateTime, action: String) -> Self {
        Self { timestamp, action }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Presentation form: `HH:MM:SS dd.mm.yyyy: <action>`.
    pub fn render(&self) -> String {
        format!("{}: {}", self.timestamp.format("%H:%M:%S %d.%m.%Y"), self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_format() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 3)
            .unwrap();
        let entry = ActivityEntry::new(timestamp, "Created a post with id ann-0".to_string());

        assert_eq!(entry.render(), "09:07:03 05.03.2024: Created a post with id ann-0");
    }
}
