use crate::domain::model::{ListRecordsQuery, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn list_records(&self, query: &ListRecordsQuery) -> Result<Vec<Record>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn base_id(&self) -> &str;
    fn table_name(&self) -> &str;
}
