use photogrid_api::{Client, Error, SearchQuery, SortOrder};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn search_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("search.json");

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let result = client.search(&SearchQuery::new("kittens")).await;
    assert!(result.is_ok());

    let page = result.unwrap();
    assert_eq!(page.total, 50);
    assert_eq!(page.pages, 2);
    assert_eq!(page.photo.len(), 2);
    assert_eq!(page.photo[0].id, "53872001");
}

#[tokio::test]
async fn search_sends_expected_parameters() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("empty.json");

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("method", "flickr.photos.search"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("text", "kittens"))
        .and(query_param("per_page", "10"))
        .and(query_param("page", "3"))
        .and(query_param("sort", "date-posted-desc"))
        .and(query_param("format", "json"))
        .and(query_param("nojsoncallback", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let query = SearchQuery::new("kittens")
        .with_page(3)
        .with_per_page(10)
        .with_sort(SortOrder::DatePostedDesc);
    let result = client.search(&query).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn search_api_failure_keeps_message() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("fail.json");

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "bad-key");
    let result = client.search(&SearchQuery::new("kittens")).await;
    match result {
        Err(Error::ApiFail { message }) => {
            assert_eq!(message, "Invalid API Key (Key has invalid format)");
        }
        other => panic!("expected ApiFail, got {:?}", other.map(|p| p.total)),
    }
}

#[tokio::test]
async fn search_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let result = client.search(&SearchQuery::new("kittens")).await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn search_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let result = client.search(&SearchQuery::new("kittens")).await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}
