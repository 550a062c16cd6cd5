use prospector::tools::search::parse_results;
use prospector::tools::wiki::summarize;

const RESULTS_PAGE: &str = r#"
    <html><body>
      <div class="result">
        <a class="result__a" href="https://example.com/a">First</a>
        <a class="result__snippet">First snippet</a>
      </div>
      <div class="result">
        <a class="result__a" href="https://example.com/b">Second</a>
      </div>
      <div class="result">
        <a class="result__a" href="/l/?kh=-1">Broken redirect</a>
      </div>
    </body></html>
"#;

#[test]
fn search_parsing_skips_unresolvable_links() {
    let hits = parse_results(RESULTS_PAGE, 10);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "First");
    assert_eq!(hits[0].snippet, "First snippet");
    assert_eq!(hits[1].url, "https://example.com/b");
}

#[test]
fn search_parsing_of_empty_page_yields_nothing() {
    assert!(parse_results("<html><body></body></html>", 10).is_empty());
}

#[test]
fn wiki_summary_is_bounded_to_a_single_short_extract() {
    let extract = "a".repeat(1000);
    let summary = summarize("Metallurgy", &extract);
    assert!(summary.starts_with("Page: Metallurgy\nSummary: "));
    assert!(summary.len() < 150);
}
