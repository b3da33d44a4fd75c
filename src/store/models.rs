use chrono::NaiveDate;

use crate::error::InputError;

/// Textual format of a deadline, both at the prompt and in the database.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Shown for a stored deadline that cannot be read back.
pub const UNSET_DEADLINE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub deadline: NaiveDate,
    pub priority: String,
    pub category: String,
}

impl Task {
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }

    /// The fixed block of lines used when a task is listed.
    pub fn detail_lines(&self) -> [String; 6] {
        [
            format!("ID: {}", self.id),
            format!("Description: {}", self.description),
            format!("Deadline: {}", format_deadline(self.deadline)),
            format!("Priority: {}", self.priority),
            format!("Category: {}", self.category),
            format!("Status: {}", self.status_label()),
        ]
    }
}

/// Fields collected by the add flow. The store assigns the id and starts
/// every task as pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub description: String,
    pub deadline: NaiveDate,
    pub priority: String,
    pub category: String,
}

pub fn parse_deadline(input: &str) -> Result<NaiveDate, InputError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DEADLINE_FORMAT)
        .map_err(|_| InputError::Deadline(trimmed.to_string()))
}

pub fn format_deadline(date: NaiveDate) -> String {
    date.format(DEADLINE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task {
            id: 7,
            description: "Buy milk".into(),
            completed: false,
            deadline: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            priority: "Low".into(),
            category: "Home".into(),
        }
    }

    #[test]
    fn parse_deadline_accepts_iso_dates() {
        assert_eq!(
            parse_deadline("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert_eq!(
            parse_deadline("  2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn parse_deadline_rejects_bad_input() {
        for bad in ["2024-13-40", "not-a-date", "", "2023-02-29", "01/03/2025"] {
            assert!(parse_deadline(bad).is_err(), "{bad:?} should not parse");
        }
        assert_eq!(
            parse_deadline("not-a-date"),
            Err(InputError::Deadline("not-a-date".into()))
        );
    }

    #[test]
    fn deadline_survives_format_and_reparse() {
        for text in ["2025-03-01", "1999-12-31", "2024-02-29", "2000-01-01"] {
            let date = parse_deadline(text).unwrap();
            assert_eq!(format_deadline(date), text);
            assert_eq!(parse_deadline(&format_deadline(date)).unwrap(), date);
        }
    }

    #[test]
    fn status_label_follows_completion() {
        let mut task = sample();
        assert_eq!(task.status_label(), "Pending");
        task.completed = true;
        assert_eq!(task.status_label(), "Completed");
    }

    #[test]
    fn detail_lines_layout() {
        assert_eq!(
            sample().detail_lines(),
            [
                "ID: 7".to_string(),
                "Description: Buy milk".to_string(),
                "Deadline: 2025-03-01".to_string(),
                "Priority: Low".to_string(),
                "Category: Home".to_string(),
                "Status: Pending".to_string(),
            ]
        );
    }
}
