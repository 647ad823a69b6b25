use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of an Airtable table. The field set is owned by the remote schema,
/// so `fields` stays a dynamically keyed map that keeps the server's order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "createdTime", default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<Record>,
    // Present when more pages exist; never followed.
    #[serde(default)]
    pub offset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRecordsQuery {
    pub max_records: usize,
    pub view: Option<String>,
    pub filter_by_formula: Option<String>,
}

impl ListRecordsQuery {
    pub fn first_record() -> Self {
        Self {
            max_records: 1,
            view: None,
            filter_by_formula: None,
        }
    }

    pub fn with_view(mut self, view: Option<String>) -> Self {
        self.view = view;
        self
    }

    pub fn with_filter(mut self, formula: Option<String>) -> Self {
        self.filter_by_formula = formula;
        self
    }
}
