//! Pagination lookup
//!
//! Finds the "Next" control on a results page and turns its relative path
//! into an absolute URL. Pure lookup: no network access.

use scraper::{Html, Selector};

/// Marker of the link to the following results page
const NEXT_SELECTOR: &str = "a[title=\"Next\"]";

/// Returns the absolute URL of the next results page, if any
///
/// The link's `href` is appended verbatim to `base_origin`; a missing control
/// or an empty `href` yields `None`.
///
/// # Example
///
/// ```
/// use listing_harvest::crawler::next_page_url;
///
/// let html = r#"<a title="Next" href="/flats-in-pune-pppfs/page-2">Next</a>"#;
/// assert_eq!(
///     next_page_url(html, "https://www.magicbricks.com"),
///     Some("https://www.magicbricks.com/flats-in-pune-pppfs/page-2".to_string())
/// );
/// ```
pub fn next_page_url(html: &str, base_origin: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(NEXT_SELECTOR).ok()?;

    let href = document
        .select(&selector)
        .next()?
        .value()
        .attr("href")
        .filter(|href| !href.is_empty())?;

    Some(format!("{}{}", base_origin, href))
}
