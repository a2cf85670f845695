use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::error::CourseError;

/// A catalog entry as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Server-assigned identifier, immutable once assigned
    #[serde(rename = "courseid")]
    pub id: Uuid,
    /// Display name of the course, never empty for stored courses
    pub name: String,
    /// Price in whole units
    pub price: i64,
    /// Embedded author, owned by the course
    pub author: Option<Author>,
}

/// Creator of a course. Has no identity outside its course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
}

impl Author {
    pub fn new(full_name: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            website: website.into(),
        }
    }
}

/// Request payload for creating or replacing a course.
///
/// Any `courseid` the client sends is ignored. Absent or `null` fields
/// decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseInput {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    pub author: Option<Author>,
}

impl CourseInput {
    pub fn new(name: impl Into<String>, price: i64, author: Option<Author>) -> Self {
        Self {
            name: name.into(),
            price,
            author,
        }
    }

    /// Decode and validate a request body.
    pub fn parse(body: &[u8]) -> Result<Self, CourseError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(CourseError::MissingBody);
        }

        let input: CourseInput = serde_json::from_slice(body).map_err(CourseError::MalformedJson)?;
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), CourseError> {
        if self.name.is_empty() {
            return Err(CourseError::EmptyName);
        }
        Ok(())
    }

    /// Attach an identifier, producing a storable course.
    pub fn into_course(self, id: Uuid) -> Course {
        Course {
            id,
            name: self.name,
            price: self.price,
            author: self.author,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a path segment as a course identifier.
pub fn parse_id(raw: &str) -> Result<Uuid, CourseError> {
    Uuid::parse_str(raw).map_err(|_| CourseError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn course_serializes_with_wire_names() {
        let id = Uuid::new_v4();
        let course = CourseInput::new("Rust", 150, Some(Author::new("Jane", "jane.dev")))
            .into_course(id);

        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(
            value,
            json!({
                "courseid": id.to_string(),
                "name": "Rust",
                "price": 150,
                "author": { "name": "Jane", "website": "jane.dev" }
            })
        );
    }

    #[test]
    fn missing_author_serializes_as_null() {
        let course = CourseInput::new("Go", 1, None).into_course(Uuid::new_v4());
        let value = serde_json::to_value(&course).unwrap();
        assert!(value["author"].is_null());
    }

    #[test]
    fn parse_accepts_full_payload() {
        let body = br#"{"name":"Rust","price":150,"author":{"name":"Jane","website":"jane.dev"}}"#;
        let input = CourseInput::parse(body).unwrap();
        assert_eq!(
            input,
            CourseInput::new("Rust", 150, Some(Author::new("Jane", "jane.dev")))
        );
    }

    #[test]
    fn parse_ignores_client_supplied_id_and_unknown_fields() {
        let body = br#"{"courseid":"not-even-a-uuid","name":"Rust","extra":true}"#;
        let input = CourseInput::parse(body).unwrap();
        assert_eq!(input.name, "Rust");
        assert_eq!(input.price, 0);
        assert!(input.author.is_none());
    }

    #[test]
    fn parse_treats_null_fields_as_zero_values() {
        let input = CourseInput::parse(br#"{"name":"x","price":null}"#).unwrap();
        assert_eq!(input, CourseInput::new("x", 0, None));

        let input =
            CourseInput::parse(br#"{"name":"x","author":{"name":null,"website":"a.b"}}"#).unwrap();
        assert_eq!(input.author, Some(Author::new("", "a.b")));

        assert!(matches!(
            CourseInput::parse(br#"{"name":null,"price":3}"#),
            Err(CourseError::EmptyName)
        ));
    }

    #[test]
    fn parse_rejects_empty_body() {
        assert!(matches!(CourseInput::parse(b""), Err(CourseError::MissingBody)));
        assert!(matches!(CourseInput::parse(b"  \n"), Err(CourseError::MissingBody)));
    }

    #[test]
    fn parse_distinguishes_malformed_json_from_empty_name() {
        assert!(matches!(
            CourseInput::parse(b"{\"name\":"),
            Err(CourseError::MalformedJson(_))
        ));
        assert!(matches!(
            CourseInput::parse(br#"{"name":"","price":10}"#),
            Err(CourseError::EmptyName)
        ));
        assert!(matches!(
            CourseInput::parse(br#"{"price":10}"#),
            Err(CourseError::EmptyName)
        ));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        match parse_id("not-a-uuid") {
            Err(CourseError::InvalidId(raw)) => assert_eq!(raw, "not-a-uuid"),
            other => panic!("expected InvalidId, got {:?}", other),
        }

        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
