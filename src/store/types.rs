//! Job records and search filters.

use serde_json::{Map, Value};

/// Name of the collection holding job postings.
pub const JOB_COLLECTION: &str = "job";

/// Maximum number of records returned by one search.
pub const MAX_RESULTS: usize = 100;

/// Identity field as stored in the database.
pub const STORAGE_ID_FIELD: &str = "_id";

/// Identity field as exposed to clients.
pub const PUBLIC_ID_FIELD: &str = "id";

/// Fields matched against the general search term.
pub const SEARCH_FIELDS: [&str; 3] = ["title", "company", "description"];

/// Field matched against the location term.
pub const LOCATION_FIELD: &str = "location";

/// A job posting, treated as an opaque field map.
pub type JobRecord = Map<String, Value>;

/// Case-insensitive substring match of `text` against `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Record field to match.
    pub field: &'static str,
    /// Literal text to look for.
    pub text: String,
}

impl FieldMatch {
    /// Create a new field match.
    pub fn new(field: &'static str, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }

    /// Regex source matching `text` literally.
    pub fn pattern(&self) -> String {
        regex::escape(&self.text)
    }
}

/// Optional search terms for the job listing.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// General search term (`q`), matched against title, company and description.
    pub search: Option<String>,
    /// Location term.
    pub location: Option<String>,
}

impl JobFilter {
    /// Create a filter from optional terms.
    pub fn new(search: Option<String>, location: Option<String>) -> Self {
        Self { search, location }
    }

    /// Build a filter from decoded query-string pairs.
    ///
    /// Repeated keys keep the last value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => filter.search = Some(value),
                "location" => filter.location = Some(value),
                _ => {}
            }
        }
        filter
    }

    /// Clauses to OR together. Empty means "match everything".
    pub fn clauses(&self) -> Vec<FieldMatch> {
        let mut clauses = Vec::with_capacity(SEARCH_FIELDS.len() + 1);

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            clauses.extend(SEARCH_FIELDS.iter().map(|&field| FieldMatch::new(field, search)));
        }

        if let Some(location) = self.location.as_deref().filter(|s| !s.is_empty()) {
            clauses.push(FieldMatch::new(LOCATION_FIELD, location));
        }

        clauses
    }
}

/// Rename the storage identity field to a public string `id`.
///
/// A `null` identity is dropped without adding `id`.
pub fn serialize_job(mut record: JobRecord) -> JobRecord {
    let Some(raw_id) = record.remove(STORAGE_ID_FIELD) else {
        return record;
    };

    let id = match raw_id {
        Value::Null => return record,
        Value::String(s) => s,
        Value::Object(ref obj) => match obj.get("$oid") {
            Some(Value::String(hex)) => hex.clone(),
            _ => raw_id.to_string(),
        },
        other => other.to_string(),
    };

    record.insert(PUBLIC_ID_FIELD.to_string(), Value::String(id));
    record
}
