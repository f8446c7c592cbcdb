//! Course record shape.
//!
//! The remote API controls the record shape, not us, so the ten fields we
//! care about are all optional and anything else lands in an overflow map
//! instead of failing deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Expected column names, in output order.
pub const EXPECTED_COLUMNS: [&str; 10] = [
    "Course",
    "CRN",
    "Division",
    "Availability",
    "CourseTitle",
    "Activity",
    "Hours",
    "Days",
    "Time",
    "Teacher",
];

/// One schedule entry (a course/section offering) as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "Course", skip_serializing_if = "Option::is_none")]
    pub course: Option<Value>,
    #[serde(rename = "CRN", skip_serializing_if = "Option::is_none")]
    pub crn: Option<Value>,
    #[serde(rename = "Division", skip_serializing_if = "Option::is_none")]
    pub division: Option<Value>,
    #[serde(rename = "Availability", skip_serializing_if = "Option::is_none")]
    pub availability: Option<Value>,
    #[serde(rename = "CourseTitle", skip_serializing_if = "Option::is_none")]
    pub course_title: Option<Value>,
    #[serde(rename = "Activity", skip_serializing_if = "Option::is_none")]
    pub activity: Option<Value>,
    #[serde(rename = "Hours", skip_serializing_if = "Option::is_none")]
    pub hours: Option<Value>,
    #[serde(rename = "Days", skip_serializing_if = "Option::is_none")]
    pub days: Option<Value>,
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    pub time: Option<Value>,
    #[serde(rename = "Teacher", skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Value>,
    /// Fields the API sends that we don't know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CourseRecord {
    /// Resolves a column name to its value, checking the typed fields first
    /// and falling back to the overflow map.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "Course" => self.course.as_ref(),
            "CRN" => self.crn.as_ref(),
            "Division" => self.division.as_ref(),
            "Availability" => self.availability.as_ref(),
            "CourseTitle" => self.course_title.as_ref(),
            "Activity" => self.activity.as_ref(),
            "Hours" => self.hours.as_ref(),
            "Days" => self.days.as_ref(),
            "Time" => self.time.as_ref(),
            "Teacher" => self.teacher.as_ref(),
            _ => self.extra.get(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_known_and_unknown_fields() {
        let record: CourseRecord = serde_json::from_value(json!({
            "Course": "CS101",
            "CRN": "10001",
            "Semester": "461",
        }))
        .unwrap();

        assert_eq!(record.course, Some(json!("CS101")));
        assert_eq!(record.crn, Some(json!("10001")));
        assert_eq!(record.division, None);
        assert_eq!(record.extra.get("Semester"), Some(&json!("461")));
    }

    #[test]
    fn test_deserialize_tolerates_non_string_values() {
        let record: CourseRecord = serde_json::from_value(json!({
            "Hours": 3,
            "Availability": null,
        }))
        .unwrap();

        assert_eq!(record.hours, Some(json!(3)));
        assert_eq!(record.availability, Some(Value::Null));
    }

    #[test]
    fn test_field_lookup_covers_all_expected_columns() {
        let record: CourseRecord = serde_json::from_value(json!({
            "Course": "CS101",
            "CRN": "10001",
            "Division": "1",
            "Availability": "Open",
            "CourseTitle": "Intro",
            "Activity": "Lecture",
            "Hours": "3",
            "Days": "1 3 5",
            "Time": "0800-0850",
            "Teacher": "Staff",
        }))
        .unwrap();

        for column in EXPECTED_COLUMNS {
            assert!(record.field(column).is_some(), "missing {column}");
        }
        assert!(record.field("Semester").is_none());
    }
}
