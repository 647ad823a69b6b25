pub mod inspect;

pub use crate::domain::model::{ListRecordsQuery, ListRecordsResponse, Record};
pub use crate::domain::ports::{ConfigProvider, RecordSource};
pub use crate::utils::error::Result;
