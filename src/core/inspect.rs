use crate::core::{ListRecordsQuery, Record, RecordSource};
use crate::utils::error::Result;
use std::io::Write;

pub const NO_RECORDS_MESSAGE: &str = "No records found.";
pub const FIELD_NAMES_HEADER: &str = "Field names:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldReport {
    NoRecords,
    Fields(Vec<String>),
}

impl FieldReport {
    pub fn from_records(records: &[Record]) -> Self {
        match records.first() {
            None => FieldReport::NoRecords,
            Some(record) => FieldReport::Fields(record.field_names()),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            FieldReport::NoRecords => writeln!(out, "{}", NO_RECORDS_MESSAGE)?,
            FieldReport::Fields(names) => {
                writeln!(out, "{}", FIELD_NAMES_HEADER)?;
                for name in names {
                    writeln!(out, "{}", name)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Fetches the first record of a table and reports its field names.
pub struct FieldInspector<S: RecordSource> {
    source: S,
    query: ListRecordsQuery,
}

impl<S: RecordSource> FieldInspector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            query: ListRecordsQuery::first_record(),
        }
    }

    pub fn with_view(mut self, view: Option<String>) -> Self {
        self.query = self.query.with_view(view);
        self
    }

    pub fn with_filter(mut self, formula: Option<String>) -> Self {
        self.query = self.query.with_filter(formula);
        self
    }

    pub async fn inspect(&self) -> Result<FieldReport> {
        let records = self.source.list_records(&self.query).await?;
        tracing::debug!("Fetched {} record(s)", records.len());

        if let Some(record) = records.first() {
            tracing::info!(
                record_id = %record.id,
                created = ?record.created_time,
                fields = record.fields.len(),
                "Inspecting first record"
            );
        }

        Ok(FieldReport::from_records(&records))
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<FieldReport> {
        let report = self.inspect().await?;
        report.render(out)?;
        Ok(report)
    }
}
