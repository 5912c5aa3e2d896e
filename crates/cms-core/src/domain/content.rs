//! Content records and the stages a submission moves through.
//!
//! `CandidateRecord` -> `ValidatedCandidate` -> `DerivedContent` ->
//! `FinalizedRecord`. Each step consumes the previous one, so a record that
//! skipped validation cannot be finalized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::rules::{
    MIN_HEADING_CHARS, SEO_DESCRIPTION_MAX_CHARS, SEO_TITLE_MAX_CHARS, read_time_minutes,
    resolve_seo_field,
};
use crate::error::SubmissionError;

/// Keys the server owns; caller-supplied values for them are dropped.
pub const SERVER_OWNED_KEYS: [&str; 4] = ["id", "created_at", "updated_at", "read_time_minutes"];

/// Caller-supplied content payload, before validation.
///
/// Any key other than the named fields (author, tags, category, status,
/// media reference, ...) lands in `attributes` and is passed through as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl CandidateRecord {
    pub fn new(
        heading: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            heading: Some(heading.into()),
            description: Some(description.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn with_seo(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.seo_title = Some(title.into());
        self.seo_description = Some(description.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Fail-fast validation: missing fields first, then heading length.
    pub fn validate(self) -> Result<ValidatedCandidate, SubmissionError> {
        let Self {
            heading,
            description,
            content,
            seo_title,
            seo_description,
            attributes,
        } = self;

        let (Some(heading), Some(description), Some(content)) = (
            heading.filter(|s| !s.is_empty()),
            description.filter(|s| !s.is_empty()),
            content.filter(|s| !s.is_empty()),
        ) else {
            return Err(SubmissionError::MissingRequiredFields);
        };

        if heading.chars().count() < MIN_HEADING_CHARS {
            return Err(SubmissionError::HeadingTooShort);
        }

        Ok(ValidatedCandidate {
            heading,
            description,
            content,
            seo_title,
            seo_description,
            attributes,
        })
    }
}

/// A candidate whose required fields are present and whose heading is long
/// enough.
#[derive(Debug, Clone)]
pub struct ValidatedCandidate {
    heading: String,
    description: String,
    content: String,
    seo_title: Option<String>,
    seo_description: Option<String>,
    attributes: Map<String, Value>,
}

impl ValidatedCandidate {
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Resolve SEO fallbacks and compute read time.
    pub fn derive(self) -> DerivedContent {
        let seo_title = resolve_seo_field(self.seo_title, &self.heading, SEO_TITLE_MAX_CHARS);
        let seo_description = resolve_seo_field(
            self.seo_description,
            &self.description,
            SEO_DESCRIPTION_MAX_CHARS,
        );
        let read_time_minutes = read_time_minutes(&self.content);

        let mut attributes = self.attributes;
        for key in SERVER_OWNED_KEYS {
            attributes.remove(key);
        }

        DerivedContent {
            heading: self.heading,
            description: self.description,
            content: self.content,
            seo_title,
            seo_description,
            read_time_minutes,
            attributes,
        }
    }
}

/// Validated content with every derived field resolved; only identity and
/// timestamp are still missing.
#[derive(Debug, Clone)]
pub struct DerivedContent {
    heading: String,
    description: String,
    content: String,
    seo_title: String,
    seo_description: String,
    read_time_minutes: u32,
    attributes: Map<String, Value>,
}

impl DerivedContent {
    pub fn read_time_minutes(&self) -> u32 {
        self.read_time_minutes
    }

    pub fn finalize(self, id: String, created_at: DateTime<Utc>) -> FinalizedRecord {
        FinalizedRecord {
            id,
            heading: self.heading,
            description: self.description,
            content: self.content,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
            attributes: self.attributes,
            created_at,
            updated_at: None,
            read_time_minutes: self.read_time_minutes,
        }
    }
}

/// Record returned by the creation path, carrying server-owned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedRecord {
    pub id: String,
    pub heading: String,
    pub description: String,
    pub content: String,
    pub seo_title: String,
    pub seo_description: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Omitted from JSON when unset; consumers test for its presence.
    #[serde(
        default,
        with = "super::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    pub read_time_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timestamp;
    use serde_json::json;

    fn valid() -> CandidateRecord {
        CandidateRecord::new("My Great Article", "A description", "Some body text")
    }

    #[test]
    fn missing_required_fields_win_over_short_heading() {
        let candidate = CandidateRecord::new("ab", "", "body");
        assert!(matches!(
            candidate.validate(),
            Err(SubmissionError::MissingRequiredFields)
        ));
    }

    #[test]
    fn absent_fields_count_as_empty() {
        let candidate = CandidateRecord {
            heading: Some("Heading".into()),
            ..CandidateRecord::default()
        };
        assert!(matches!(
            candidate.validate(),
            Err(SubmissionError::MissingRequiredFields)
        ));
    }

    #[test]
    fn each_required_field_is_checked() {
        for candidate in [
            CandidateRecord::new("", "d", "c"),
            CandidateRecord::new("Heading", "", "c"),
            CandidateRecord::new("Heading", "d", ""),
        ] {
            assert!(matches!(
                candidate.validate(),
                Err(SubmissionError::MissingRequiredFields)
            ));
        }
    }

    #[test]
    fn short_heading_is_rejected() {
        assert!(matches!(
            CandidateRecord::new("ab", "d", "c").validate(),
            Err(SubmissionError::HeadingTooShort)
        ));
        assert!(CandidateRecord::new("abc", "d", "c").validate().is_ok());
    }

    #[test]
    fn whitespace_heading_is_present_but_measured() {
        // Not empty, so the missing-fields check passes; length decides.
        assert!(CandidateRecord::new("   ", "d", "c").validate().is_ok());
        assert!(matches!(
            CandidateRecord::new("  ", "d", "c").validate(),
            Err(SubmissionError::HeadingTooShort)
        ));
    }

    #[test]
    fn seo_fallbacks_apply_to_blank_values() {
        let derived = valid().with_seo("   ", "").validate().unwrap().derive();
        let record = derived.finalize("id-1".into(), Utc::now());
        assert_eq!(record.seo_title, "My Great Article");
        assert_eq!(record.seo_description, "A description");
    }

    #[test]
    fn long_heading_truncates_to_sixty_chars() {
        let heading = "h".repeat(100);
        let description = "d".repeat(200);
        let record = CandidateRecord::new(heading.clone(), description.clone(), "body")
            .validate()
            .unwrap()
            .derive()
            .finalize("id-1".into(), Utc::now());

        assert_eq!(record.seo_title, heading[..60]);
        assert_eq!(record.seo_description, description[..160]);
        assert_eq!(record.heading, heading);
    }

    #[test]
    fn server_owned_attributes_are_dropped() {
        let record = valid()
            .with_attribute("author", "jane")
            .with_attribute("tags", json!(["rust", "cms"]))
            .with_attribute("updated_at", "2020-01-01T00:00:00.000Z")
            .with_attribute("id", "spoofed")
            .validate()
            .unwrap()
            .derive()
            .finalize("id-1".into(), Utc::now());

        assert_eq!(record.id, "id-1");
        assert!(record.updated_at.is_none());
        assert_eq!(record.attributes.get("author"), Some(&json!("jane")));
        assert_eq!(record.attributes.get("tags"), Some(&json!(["rust", "cms"])));
        assert!(!record.attributes.contains_key("id"));
        assert!(!record.attributes.contains_key("updated_at"));
    }

    #[test]
    fn candidate_json_collects_extra_keys() {
        let candidate: CandidateRecord = serde_json::from_value(json!({
            "heading": "Test Article",
            "description": null,
            "content": "words",
            "category": "news",
            "featured_image": {"url": "https://cdn.example/a.png"}
        }))
        .unwrap();

        assert_eq!(candidate.description, None);
        assert_eq!(candidate.attributes.get("category"), Some(&json!("news")));
        assert!(candidate.attributes.contains_key("featured_image"));
        assert!(!candidate.attributes.contains_key("heading"));
    }

    #[test]
    fn finalized_json_omits_updated_at_and_flattens_attributes() {
        let created_at = timestamp::parse("2025-03-04T05:06:07.089Z").unwrap();
        let record = valid()
            .with_attribute("status", "draft")
            .validate()
            .unwrap()
            .derive()
            .finalize("abc".into(), created_at);

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("updated_at"));
        assert_eq!(object["created_at"], json!("2025-03-04T05:06:07.089Z"));
        assert_eq!(object["status"], json!("draft"));
        assert_eq!(object["read_time_minutes"], json!(1));

        let back: FinalizedRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
