//! Integration tests for the cleaner
//!
//! Raw files are produced by a real crawl against a mock server where it
//! matters, so the crawler's output format and the cleaner's input format are
//! checked against each other.

use listing_harvest::cleaner::{clean_data, CLEANED_COLUMNS, NAME_NOT_AVAILABLE};
use listing_harvest::config::{CleanerConfig, Config};
use listing_harvest::crawler::run_crawl;
use listing_harvest::HarvestError;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cleaner_config(dir: &Path) -> CleanerConfig {
    CleanerConfig {
        processed_dir: dir.join("processed").to_string_lossy().into_owned(),
        demo_raw_path: None,
    }
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

#[tokio::test]
async fn test_crawl_then_clean() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <div class="mb-srp__list">
                <h2 class="mb-srp__card--title">3 BHK Flat for Sale in Andheri West, Mumbai</h2>
                <div class="mb-srp__card__price--amount">₹1.2 Cr</div>
                <div data-summary="carpet-area"><div class="mb-srp__card__summary--value">850 sqft</div></div>
                <div data-summary="furnishing"><div class="mb-srp__card__summary--value">semi-furnished</div></div>
                <div data-summary="status"><div class="mb-srp__card__summary--label">Ready to Move</div></div>
                <div data-summary="society"><div class="mb-srp__card__summary--value">Lodha Park</div></div>
                <div data-summary="bathroom"><div class="mb-srp__card__summary--value">3</div></div>
            </div>
            <div class="mb-srp__list">
                <h2 class="mb-srp__card--title">2 BHK Flat for Sale in Powai, Mumbai</h2>
                <div class="mb-srp__card__price--amount">₹85 Lac</div>
            </div>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let raw_path = dir.path().join("raw").join("mumbai_raw_data.csv");

    let mut config = Config::default();
    config.site.base_origin = mock_server.uri();
    let crawl_summary = run_crawl(config, &mock_server.uri(), &raw_path)
        .await
        .unwrap();
    assert_eq!(crawl_summary.records, 2);

    let summary = clean_data(
        &raw_path,
        "mumbai_cleaned_data.csv",
        &cleaner_config(dir.path()),
    )
    .unwrap();

    assert_eq!(summary.rows, 2);
    assert!(summary.project_name_kept);
    assert_eq!(summary.median_area_sqft, 850);
    assert_eq!(summary.imputed_areas, 1);

    let (headers, rows) = read_rows(&summary.output);
    assert_eq!(headers, CLEANED_COLUMNS.to_vec());
    assert_eq!(
        rows[0],
        vec![
            "Lodha Park",
            "Flat",
            "for Sale",
            "Mumbai",
            "Andheri West",
            "Semi-Furnished",
            "Ready To Move",
            "3",
            "3",
            "120",
            "850",
            "14117.65",
        ]
    );
    // Society missing: the title segment before the city is used
    assert_eq!(rows[1][0], "Powai");
    assert_eq!(rows[1][10], "850");
    assert_eq!(rows[1][11], "10000.0");
}

#[test]
fn test_clean_drops_project_column_without_names() {
    let dir = TempDir::new().unwrap();
    let raw_path = dir.path().join("raw.csv");
    std::fs::write(
        &raw_path,
        "title,price,carpet_area,furnishing,status,society,car_parking,bathrooms\n\
         Villa for Sale in Goa,₹3 Cr,3000 sqft,,,,,4\n\
         3 BHK Flat for Sale,₹1 Cr,,,,flat,,2\n",
    )
    .unwrap();

    let summary = clean_data(&raw_path, "goa.csv", &cleaner_config(dir.path())).unwrap();
    assert!(!summary.project_name_kept);

    let (headers, rows) = read_rows(&summary.output);
    assert_eq!(headers[0], "property_type");
    assert_eq!(headers.len(), CLEANED_COLUMNS.len() - 1);
    assert_eq!(rows[0][2], "Unknown");
    assert_eq!(rows[0][3], "Unknown");
    assert_eq!(rows[1][9], "3000");
}

#[test]
fn test_clean_substitutes_placeholder_names() {
    let dir = TempDir::new().unwrap();
    let raw_path = dir.path().join("raw.csv");
    std::fs::write(
        &raw_path,
        "title,price,carpet_area,furnishing,status,society,car_parking,bathrooms\n\
         Villa for Sale in Goa,₹3 Cr,3000 sqft,,,,,4\n\
         \"2 BHK Flat for Sale in Baner, Pune\",₹90 Lac,900 sqft,,,Kumar Park,,2\n",
    )
    .unwrap();

    let summary = clean_data(&raw_path, "mixed.csv", &cleaner_config(dir.path())).unwrap();
    assert!(summary.project_name_kept);

    let (_, rows) = read_rows(&summary.output);
    assert_eq!(rows[0][0], NAME_NOT_AVAILABLE);
    assert_eq!(rows[1][0], "Kumar Park");
}

#[test]
fn test_clean_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let raw_path = dir.path().join("raw.csv");
    std::fs::write(
        &raw_path,
        "title,price,carpet_area,furnishing,status,society,car_parking,bathrooms\n\
         \"3 BHK Flat for Sale in Andheri West, Mumbai\",₹1.2 Cr,850 sqft,Furnished,,,,2\n\
         \"2 BHK Flat for Sale in Saket, New Delhi\",₹85 Lac,,,,,,1\n\
         \"1 BHK Flat for Rent in Anna Nagar Chennai\",18000,oops,,,,,1\n",
    )
    .unwrap();

    let config = cleaner_config(dir.path());
    let first = clean_data(&raw_path, "run1.csv", &config).unwrap();
    let second = clean_data(&raw_path, "run2.csv", &config).unwrap();

    assert_eq!(
        std::fs::read(&first.output).unwrap(),
        std::fs::read(&second.output).unwrap()
    );
}

#[test]
fn test_clean_missing_file_is_data_format_error() {
    let dir = TempDir::new().unwrap();
    let err = clean_data(
        &dir.path().join("does_not_exist.csv"),
        "out.csv",
        &cleaner_config(dir.path()),
    )
    .unwrap_err();

    assert!(matches!(err, HarvestError::DataFormat(_)));
    assert!(!dir.path().join("processed").join("out.csv").exists());
}
