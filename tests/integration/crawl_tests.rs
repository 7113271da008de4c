//! Integration tests for the crawler
//!
//! These tests use wiremock to serve paginated result pages and exercise the
//! full fetch → extract → paginate → write cycle.

use listing_harvest::config::Config;
use listing_harvest::crawler::Coordinator;
use listing_harvest::output::StopReason;
use listing_harvest::HarvestError;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing pagination at the mock server
fn create_test_config(base_origin: &str) -> Config {
    let mut config = Config::default();
    config.site.base_origin = base_origin.to_string();
    config.fetcher.timeout_secs = 5;
    config
}

/// Renders one listing card with the usual MagicBricks markers
fn card(title: &str, price: &str, area: &str, society: &str) -> String {
    format!(
        r#"<div class="mb-srp__list">
            <h2 class="mb-srp__card--title">{}</h2>
            <div class="mb-srp__card__price--amount">{}</div>
            <div data-summary="carpet-area">
                <div class="mb-srp__card__summary--value">{}</div>
            </div>
            <div data-summary="society">
                <div class="mb-srp__card__summary--value">{}</div>
            </div>
        </div>"#,
        title, price, area, society
    )
}

fn results_page(cards: &[String], next: Option<&str>) -> String {
    let next_link = next
        .map(|href| format!(r#"<a title="Next" href="{}">Next</a>"#, href))
        .unwrap_or_default();
    format!(
        "<html><body><div class=\"mb-srp\">{}</div>{}</body></html>",
        cards.join("\n"),
        next_link
    )
}

#[tokio::test]
async fn test_full_crawl_follows_pagination() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/flats-in-mumbai"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(
            &[
                card(
                    "3 BHK Flat for Sale in Andheri West, Mumbai",
                    "₹1.2 Cr",
                    "850 sqft",
                    "Lodha Park",
                ),
                card("2 BHK Flat for Sale in Powai, Mumbai", "₹95 Lac", "700 sqft", ""),
            ],
            Some("/flats-in-mumbai/page-2"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flats-in-mumbai/page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(
            &[card("1 BHK Flat for Rent in Bandra, Mumbai", "45000", "", "")],
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("raw").join("mumbai_raw_data.csv");

    let coordinator = Coordinator::new(create_test_config(&base_url)).unwrap();
    let summary = coordinator
        .run(&format!("{}/flats-in-mumbai", base_url), &output)
        .await
        .expect("Crawl failed");

    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.records, 3);
    assert_eq!(summary.stop_reason, StopReason::NoNextPage);

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        vec![
            "title",
            "price",
            "carpet_area",
            "furnishing",
            "status",
            "society",
            "car_parking",
            "bathrooms"
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "3 BHK Flat for Sale in Andheri West, Mumbai");
    assert_eq!(&rows[0][5], "Lodha Park");
    assert_eq!(&rows[2][1], "45000");
    assert_eq!(&rows[2][2], "");
}

#[tokio::test]
async fn test_crawl_stops_on_first_empty_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/page-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(
            &[card("2 BHK Flat for Sale in Baner, Pune", "₹90 Lac", "900 sqft", "")],
            Some("/page-2"),
        )))
        .mount(&mock_server)
        .await;

    // Empty page that still advertises a next page
    Mock::given(method("GET"))
        .and(path("/page-2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(results_page(&[], Some("/page-3"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // Would yield cards, but must never be requested
    Mock::given(method("GET"))
        .and(path("/page-3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(
            &[card("Villa for Sale in Goa", "₹3 Cr", "3000 sqft", "")],
            None,
        )))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("pune_raw_data.csv");

    let coordinator = Coordinator::new(create_test_config(&base_url)).unwrap();
    let summary = coordinator
        .run(&format!("{}/page-1", base_url), &output)
        .await
        .expect("Crawl failed");

    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.records, 1);
    assert_eq!(summary.stop_reason, StopReason::NoRecords);
    assert!(output.exists());
}

#[tokio::test]
async fn test_crawl_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let mut config = create_test_config(&base_url);
    config.fetcher.user_agent = "Mozilla/5.0 (X11; Linux x86_64) TestBrowser/1.0".to_string();

    Mock::given(method("GET"))
        .and(header(
            "user-agent",
            "Mozilla/5.0 (X11; Linux x86_64) TestBrowser/1.0",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(
            &[card("Studio for Rent in Powai, Mumbai", "₹25,000", "400 sqft", "")],
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("raw.csv");

    let coordinator = Coordinator::new(config).unwrap();
    let summary = coordinator.run(&base_url, &output).await.unwrap();
    assert_eq!(summary.records, 1);
}

#[tokio::test]
async fn test_blocked_mid_crawl_propagates_and_writes_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/page-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(
            &[card("2 BHK Flat for Sale in Baner, Pune", "₹90 Lac", "900 sqft", "")],
            Some("/page-2"),
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page-2"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("raw.csv");

    let coordinator = Coordinator::new(create_test_config(&base_url)).unwrap();
    let err = coordinator
        .run(&format!("{}/page-1", base_url), &output)
        .await
        .unwrap_err();

    assert!(err.is_blocked());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("raw.csv");

    let coordinator = Coordinator::new(create_test_config(&mock_server.uri())).unwrap();
    let err = coordinator.run(&mock_server.uri(), &output).await.unwrap_err();

    assert!(matches!(err, HarvestError::Transport { .. }));
    assert!(!output.exists());
}
