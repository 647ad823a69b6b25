// Adapters layer: concrete implementations of the domain ports.

pub mod airtable;

pub use airtable::AirtableClient;
