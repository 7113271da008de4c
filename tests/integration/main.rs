//! Integration tests for Listing Harvest

mod clean_tests;
mod crawl_tests;
