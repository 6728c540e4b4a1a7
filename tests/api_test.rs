//! Integration tests for the animals API client, against a local mock.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

use menagerie::api::AnimalsClient;
use menagerie::error::MenagerieError;

fn lion_body() -> serde_json::Value {
    json!([
        {
            "name": "Lion",
            "locations": ["Africa"],
            "characteristics": {
                "diet": "Carnivore",
                "lifespan": "8-15 years",
                "skin_type": "Fur"
            }
        }
    ])
}

#[test]
fn fetch_sends_lowercased_name_and_api_key_header() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/animals")
            .query_param("name", "lion")
            .header("X-Api-Key", "test-key");
        then.status(200).json_body(lion_body());
    });

    let client = AnimalsClient::with_api_url("test-key", server.url("/v1/animals")).unwrap();
    let records = client.fetch("Lion").unwrap();

    mock.assert();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Lion"));
    assert_eq!(records[0].skin_type(), Some("Fur"));
}

#[test]
fn fetch_empty_result_is_ok() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/animals");
        then.status(200).json_body(json!([]));
    });

    let client = AnimalsClient::with_api_url("test-key", server.url("/v1/animals")).unwrap();
    let records = client.fetch("unicorn").unwrap();
    assert!(records.is_empty());
}

#[test]
fn fetch_non_success_status_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/animals");
        then.status(401).body("{\"error\": \"Invalid API Key.\"}");
    });

    let client = AnimalsClient::with_api_url("bad-key", server.url("/v1/animals")).unwrap();
    let result = client.fetch("lion");
    assert!(matches!(
        result,
        Err(MenagerieError::ApiStatusError { status: 401, .. })
    ));
}

#[test]
fn fetch_non_json_body_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/animals");
        then.status(200).body("<html>definitely not json</html>");
    });

    let client = AnimalsClient::with_api_url("test-key", server.url("/v1/animals")).unwrap();
    let result = client.fetch("lion");
    assert!(matches!(result, Err(MenagerieError::ApiRequestError(_))));
}

#[test]
fn cli_fetch_json_prints_records() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/animals")
            .query_param("name", "lion")
            .header("X-Api-Key", "test-key");
        then.status(200).json_body(lion_body());
    });

    let api_url = server.url("/v1/animals");
    let mut cmd = Command::new(cargo_bin("menagerie"));
    cmd.args([
        "fetch",
        "Lion",
        "--api-key",
        "test-key",
        "--api-url",
        api_url.as_str(),
        "--json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"Lion\""));
}

#[test]
fn cli_fetch_renders_records_into_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/animals");
        then.status(200).json_body(lion_body());
    });

    let temp = tempfile::TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("animals_template.html"),
        "<ul>__REPLACE_ANIMALS_INFO__</ul>",
    )
    .unwrap();

    let api_url = server.url("/v1/animals");
    let mut cmd = Command::new(cargo_bin("menagerie"));
    cmd.current_dir(temp.path());
    cmd.args([
        "fetch",
        "Lion",
        "--api-key",
        "test-key",
        "--api-url",
        api_url.as_str(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote animals.html"));

    let page = std::fs::read_to_string(temp.path().join("animals.html")).unwrap();
    assert!(page.contains("<div class=\"card__title\">Lion</div>"));
    assert!(page.contains("<li><strong>Skin type:</strong> Fur</li>"));
}
