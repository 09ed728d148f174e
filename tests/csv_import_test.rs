//! Integration tests for the CSV-by-URL importer, driven through a
//! recording fake transport.

mod utils;

use std::sync::Arc;

use serde_json::json;
use taskhive_import::infrastructure::importers::{CsvImporter, TaskImporter};
use taskhive_import::{BulkImportError, ImportRequest, ImportSource};

use utils::factories::{csv_response, response};
use utils::fakes::FakeTransport;

const URL: &str = "http://myfakecsvurl.com";

fn request() -> ImportRequest {
    ImportRequest::new(ImportSource::Csv).with_param("csv_url", URL)
}

fn importer(transport: &Arc<FakeTransport>) -> CsvImporter {
    CsvImporter::new(transport.clone())
}

#[tokio::test]
async fn count_returns_0_when_no_rows_other_than_header() {
    let transport = Arc::new(FakeTransport::single(csv_response("CSV,with,no,content\n")));
    let count = importer(&transport).count_tasks(&request()).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn count_returns_1_for_csv_with_one_valid_row() {
    let transport = Arc::new(FakeTransport::single(csv_response("Foo,Bar,Baz\n1,2,3")));
    let count = importer(&transport).count_tasks(&request()).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn count_fails_when_file_is_forbidden() {
    let transport = Arc::new(FakeTransport::single(response("Forbidden", 403, "text/csv")));
    let err = importer(&transport).count_tasks(&request()).await.unwrap_err();

    assert!(matches!(err, BulkImportError::PermissionDenied(_)));
    assert_eq!(
        err.to_string(),
        "Oops! It looks like you don't have permission to access that file"
    );
}

#[tokio::test]
async fn count_fails_when_not_a_csv_file() {
    let transport = Arc::new(FakeTransport::single(response("Not a CSV", 200, "text/html")));
    let err = importer(&transport).count_tasks(&request()).await.unwrap_err();

    assert!(matches!(err, BulkImportError::WrongContentType(_)));
    assert_eq!(
        err.to_string(),
        "Oops! That file doesn't look like the right file."
    );
}

#[tokio::test]
async fn count_fails_on_duplicate_header() {
    let transport = Arc::new(FakeTransport::single(csv_response("Foo,Bar,Foo\n1,2,3")));
    let err = importer(&transport).count_tasks(&request()).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "The file you uploaded has two headers with the same name."
    );
}

#[tokio::test]
async fn tasks_fails_when_file_is_forbidden() {
    let transport = Arc::new(FakeTransport::single(response("Forbidden", 403, "text/csv")));
    let err = importer(&transport).tasks(&request()).await.err().unwrap();

    assert_eq!(
        err.to_string(),
        "Oops! It looks like you don't have permission to access that file"
    );
}

#[tokio::test]
async fn tasks_fails_when_not_a_csv_file() {
    let transport = Arc::new(FakeTransport::single(response("Not a CSV", 200, "text/html")));
    let err = importer(&transport).tasks(&request()).await.err().unwrap();

    assert_eq!(
        err.to_string(),
        "Oops! That file doesn't look like the right file."
    );
}

#[tokio::test]
async fn tasks_fails_on_duplicate_header_before_yielding_anything() {
    let transport = Arc::new(FakeTransport::single(csv_response("Foo,Bar,Foo\n1,2,3")));
    let err = importer(&transport).tasks(&request()).await.err().unwrap();

    assert_eq!(
        err.to_string(),
        "The file you uploaded has two headers with the same name."
    );
}

#[tokio::test]
async fn tasks_returns_records_with_only_info_fields() {
    let transport = Arc::new(FakeTransport::single(csv_response("Foo,Bar,Baz\n1,2,3")));
    let records: Vec<_> = importer(&transport)
        .tasks(&request())
        .await
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        serde_json::to_value(&records[0]).unwrap(),
        json!({"info": {"Foo": "1", "Bar": "2", "Baz": "3"}})
    );
}

#[tokio::test]
async fn tasks_promotes_reserved_columns_to_top_level_fields() {
    let transport = Arc::new(FakeTransport::single(csv_response("Foo,Bar,priority_0\n1,2,3")));
    let records: Vec<_> = importer(&transport)
        .tasks(&request())
        .await
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&records[0]).unwrap(),
        json!({"info": {"Foo": "1", "Bar": "2"}, "priority_0": "3"})
    );
}

#[tokio::test]
async fn each_call_issues_a_fresh_request() {
    let transport = Arc::new(FakeTransport::new(vec![
        csv_response("Foo\n1"),
        csv_response("Foo\n1"),
    ]));
    let importer = importer(&transport);

    importer.count_tasks(&request()).await.unwrap();
    importer.count_tasks(&request()).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, URL);
    assert_eq!(requests[1].url, URL);
}

#[tokio::test]
async fn missing_url_parameter_is_reported() {
    let transport = Arc::new(FakeTransport::new(vec![]));
    let err = importer(&transport)
        .count_tasks(&ImportRequest::new(ImportSource::Csv))
        .await
        .unwrap_err();

    assert!(matches!(err, BulkImportError::MissingParameter("csv_url")));
}
