use airtable_fields::core::inspect::{FieldReport, NO_RECORDS_MESSAGE};
use airtable_fields::{AirtableClient, AirtableConfig, FieldInspector};
use anyhow::Result;
use httpmock::prelude::*;
use std::collections::HashMap;

fn config_for(server: &MockServer, key: &str, base: &str, table: &str) -> Result<AirtableConfig> {
    let vars: HashMap<String, String> = HashMap::from([
        ("AIRTABLE_API_URL".to_string(), server.url("/v0")),
        ("AIRTABLE_KEY".to_string(), key.to_string()),
        ("AIRTABLE_ID".to_string(), base.to_string()),
        ("AIRTABLE_TABLE_NAME".to_string(), table.to_string()),
    ]);
    Ok(AirtableConfig::from_map(&vars)?)
}

#[tokio::test]
async fn test_end_to_end_field_names() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/appMembers/Verifications")
            .header("authorization", "Bearer patLIVE.123")
            .query_param("maxRecords", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(
                r#"{"records":[{"id":"recA","createdTime":"2025-12-04T16:55:00.000Z",
                "fields":{"Name":"Ann Lee","Phone":"8015550100","Status":"Active"}}]}"#,
            );
    });

    let config = config_for(&server, "patLIVE.123", "appMembers", "Verifications")?;
    let inspector = FieldInspector::new(AirtableClient::new(config));
    let mut out = Vec::new();
    let report = inspector.run(&mut out).await?;

    api_mock.assert();
    assert_eq!(
        report,
        FieldReport::Fields(vec![
            "Name".to_string(),
            "Phone".to_string(),
            "Status".to_string()
        ])
    );
    assert_eq!(String::from_utf8(out)?, "Field names:\nName\nPhone\nStatus\n");
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_empty_table() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v0/appMembers/Verifications")
            .query_param("maxRecords", "1");
        then.status(200).json_body(serde_json::json!({"records": []}));
    });

    let config = config_for(&server, "patLIVE.123", "appMembers", "Verifications")?;
    let mut out = Vec::new();
    FieldInspector::new(AirtableClient::new(config))
        .run(&mut out)
        .await?;

    api_mock.assert();
    assert_eq!(String::from_utf8(out)?, format!("{}\n", NO_RECORDS_MESSAGE));
    Ok(())
}

#[tokio::test]
async fn test_unknown_table_is_an_error() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v0/appMembers/Missing");
        then.status(404).json_body(serde_json::json!({"error": "NOT_FOUND"}));
    });

    let config = config_for(&server, "patLIVE.123", "appMembers", "Missing")?;
    let mut out = Vec::new();
    let result = FieldInspector::new(AirtableClient::new(config))
        .run(&mut out)
        .await;

    api_mock.assert();
    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_two_runs_give_same_output() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v0/appMembers/Verifications");
        then.status(200).json_body(serde_json::json!({
            "records": [{"id": "recA", "fields": {"Name": "Ann", "Member Status": "Active"}}],
            "offset": "itrNext/recA"
        }));
    });

    let config = config_for(&server, "patLIVE.123", "appMembers", "Verifications")?;
    let inspector = FieldInspector::new(AirtableClient::new(config));

    let mut first = Vec::new();
    let mut second = Vec::new();
    inspector.run(&mut first).await?;
    inspector.run(&mut second).await?;

    api_mock.assert_hits(2);
    assert_eq!(first, second);
    Ok(())
}
