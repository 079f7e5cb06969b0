//! Data handed to the program record page.
//!
//! The server renders these as JSON props. Fields the page only displays are
//! kept as display strings; the record view never does arithmetic on them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::components::TableRow;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record is missing its uuid")]
    MissingUuid,
    #[error("record is missing platform_name")]
    MissingPlatformName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Learner {
    #[serde(default)]
    pub full_name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub school: String,
}

/// One completed course within the program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GradeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub school: String,
    /// Verified attempts.
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub course_id: String,
    #[serde(default, deserialize_with = "display_string")]
    pub issue_date: String,
    #[serde(default, deserialize_with = "display_string")]
    pub start: String,
    #[serde(default, deserialize_with = "display_string")]
    pub end: String,
    #[serde(default, deserialize_with = "display_string")]
    pub percent_grade: String,
    #[serde(default)]
    pub letter_grade: String,
}

/// A whole record payload, shaped like the `ProgramRecord` props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRecordData {
    pub learner: Option<Learner>,
    pub program: Option<Program>,
    pub grades: Option<Vec<GradeRecord>>,
    pub uuid: String,
    pub platform_name: String,
}

#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    learner: Option<Learner>,
    #[serde(default)]
    program: Option<Program>,
    #[serde(default)]
    grades: Option<Vec<GradeRecord>>,
    #[serde(default)]
    uuid: String,
    #[serde(default)]
    platform_name: Option<String>,
}

impl ProgramRecordData {
    pub fn from_json(src: &str) -> Result<Self, RecordError> {
        let raw: RawRecord = serde_json::from_str(src)?;
        if raw.uuid.trim().is_empty() {
            return Err(RecordError::MissingUuid);
        }
        let platform_name = raw
            .platform_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(RecordError::MissingPlatformName)?;

        Ok(Self {
            learner: raw.learner,
            program: raw.program,
            grades: raw.grades,
            uuid: raw.uuid,
            platform_name,
        })
    }
}

/// Accept strings, numbers or null for fields that are only ever displayed.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

impl From<&Learner> for TableRow {
    fn from(learner: &Learner) -> Self {
        TableRow::new()
            .with("full_name", &learner.full_name)
            .with("username", &learner.username)
            .with("email", &learner.email)
    }
}

impl From<&GradeRecord> for TableRow {
    fn from(grade: &GradeRecord) -> Self {
        TableRow::new()
            .with("name", &grade.name)
            .with("school", &grade.school)
            .with("attempts", grade.attempts.to_string())
            .with("course_id", &grade.course_id)
            .with("issue_date", &grade.issue_date)
            .with("start", &grade.start)
            .with("end", &grade.end)
            .with("percent_grade", &grade.percent_grade)
            .with("letter_grade", &grade.letter_grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "learner": {"full_name": "Jane Doe", "username": "jdoe", "email": "j@x.com"},
        "program": {"name": "Data Science", "school": "MIT"},
        "grades": [{
            "name": "CS101", "school": "MIT", "attempts": 1, "course_id": "C1",
            "issue_date": "2020-01-01", "start": "2019-09-01", "end": "2019-12-15",
            "percent_grade": 95, "letter_grade": "A"
        }],
        "uuid": "0f3c2f8a9b7d4e31a1c2d3e4f5a6b7c8",
        "platform_name": "Acme"
    }"#;

    #[test]
    fn parses_full_payload() {
        let record = ProgramRecordData::from_json(FULL).unwrap();
        assert_eq!(record.learner.as_ref().unwrap().username, "jdoe");
        assert_eq!(record.program.as_ref().unwrap().school, "MIT");
        let grades = record.grades.unwrap();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].attempts, 1);
        assert_eq!(grades[0].percent_grade, "95");
        assert_eq!(record.platform_name, "Acme");
    }

    #[test]
    fn null_sections_become_none() {
        let record = ProgramRecordData::from_json(
            r#"{"learner": null, "program": null, "grades": null, "uuid": "u", "platform_name": "Acme"}"#,
        )
        .unwrap();
        assert!(record.learner.is_none());
        assert!(record.program.is_none());
        assert!(record.grades.is_none());
    }

    #[test]
    fn empty_grade_list_is_kept() {
        let record = ProgramRecordData::from_json(
            r#"{"grades": [], "uuid": "u", "platform_name": "Acme"}"#,
        )
        .unwrap();
        assert_eq!(record.grades, Some(Vec::new()));
    }

    #[test]
    fn missing_dates_are_blank() {
        let grade: GradeRecord =
            serde_json::from_str(r#"{"name": "CS101", "start": null}"#).unwrap();
        assert_eq!(grade.start, "");
        assert_eq!(grade.end, "");
    }

    #[test]
    fn missing_uuid_is_rejected() {
        let err = ProgramRecordData::from_json(r#"{"uuid": " ", "platform_name": "Acme"}"#)
            .unwrap_err();
        assert!(matches!(err, RecordError::MissingUuid));
    }

    #[test]
    fn missing_platform_is_rejected() {
        let err = ProgramRecordData::from_json(r#"{"uuid": "u"}"#).unwrap_err();
        assert!(matches!(err, RecordError::MissingPlatformName));
    }

    #[test]
    fn blank_platform_is_rejected() {
        for src in [
            r#"{"uuid": "u", "platform_name": ""}"#,
            r#"{"uuid": "u", "platform_name": "  "}"#,
        ] {
            let err = ProgramRecordData::from_json(src).unwrap_err();
            assert!(matches!(err, RecordError::MissingPlatformName), "{src}");
        }
    }

    #[test]
    fn grade_row_carries_folded_only_fields() {
        let record = ProgramRecordData::from_json(FULL).unwrap();
        let row = TableRow::from(&record.grades.unwrap()[0]);
        assert_eq!(row.get("start"), Some("2019-09-01"));
        assert_eq!(row.get("attempts"), Some("1"));
    }
}
