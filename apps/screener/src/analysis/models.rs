use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// An uploaded file as received from the form. `name` is `None` when the
/// part carried no filename attribute.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(name: Option<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name,
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True for the part browsers send when the file input was left empty.
    pub fn is_blank(&self) -> bool {
        self.name.as_deref().unwrap_or("").is_empty() && self.is_empty()
    }
}

/// Per-metric scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    pub skills_match: f64,
    pub knowledge_depth: f64,
    pub experience_relevance: f64,
}

/// The payload shown in the "Analysis Result" panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub filename: String,
    #[serde(serialize_with = "serialize_utc_z")]
    pub upload_time: DateTime<Utc>,
    pub skills_extracted: Vec<String>,
    pub experience_years: u32,
    pub scores: Scores,
    pub summary: String,
}

/// ISO-8601, microsecond precision, trailing `Z`.
fn serialize_utc_z<S: Serializer>(t: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Micros, true))
}
