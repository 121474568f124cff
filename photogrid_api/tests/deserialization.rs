use photogrid_api::{PhotoSize, SearchResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn parses_successful_response() {
    let body = load_fixture("search.json");
    let parsed: SearchResponse = serde_json::from_str(&body).unwrap();

    let photos = match parsed {
        SearchResponse::Ok { photos } => photos,
        SearchResponse::Fail { message, .. } => panic!("unexpected failure: {}", message),
    };

    assert_eq!(photos.page, 1);
    assert_eq!(photos.pages, 2);
    assert_eq!(photos.perpage, 25);
    assert_eq!(photos.total, 50);
    assert_eq!(photos.photo.len(), 2);

    let first = &photos.photo[0];
    assert_eq!(first.title.as_deref(), Some("Kitten on a fence"));
    assert_eq!(
        first.source_url(PhotoSize::Medium640),
        "https://live.staticflickr.com/65535/53872001_abc123def4_z.jpg"
    );
}

#[test]
fn parses_failure_response() {
    let body = load_fixture("fail.json");
    let parsed: SearchResponse = serde_json::from_str(&body).unwrap();

    match parsed {
        SearchResponse::Fail { message, code } => {
            assert_eq!(message, "Invalid API Key (Key has invalid format)");
            assert_eq!(code, 100);
        }
        SearchResponse::Ok { .. } => panic!("expected failure envelope"),
    }
}

#[test]
fn parses_empty_result_set() {
    let body = load_fixture("empty.json");
    let parsed: SearchResponse = serde_json::from_str(&body).unwrap();

    match parsed {
        SearchResponse::Ok { photos } => {
            assert_eq!(photos.total, 0);
            assert_eq!(photos.pages, 0);
            assert!(photos.photo.is_empty());
        }
        SearchResponse::Fail { message, .. } => panic!("unexpected failure: {}", message),
    }
}

#[test]
fn photo_without_title_defaults_to_none() {
    let raw = r#"{ "id": "1", "secret": "s", "server": "100" }"#;
    let photo: photogrid_api::Photo = serde_json::from_str(raw).unwrap();
    assert!(photo.title.is_none());
}
