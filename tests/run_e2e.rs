// tests/run_e2e.rs
//
// Whole runs against an in-memory fetcher: fetch → text → extract → merge → file.
//
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use device_scrape::config::{ExportFormat, RunOptions, Source};
use device_scrape::core::Fetcher;
use device_scrape::extract::Extractor;
use device_scrape::progress::Progress;
use device_scrape::{FetchError, runner};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("device_scrape_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Pages by URL; anything else is a 404.
struct PageFetcher(HashMap<&'static str, &'static str>);

impl Fetcher for PageFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        self.0
            .get(location)
            .map(|s| s.to_string())
            .ok_or(FetchError::Status { status: 404 })
    }
}

#[derive(Default)]
struct Recorder {
    done: Vec<(String, usize, usize)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn item_done(&mut self, label: &str, candidates: usize, kept: usize) {
        self.done.push((label.to_string(), candidates, kept));
    }
    fn item_failed(&mut self, label: &str, _reason: &str) {
        self.failed.push(label.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

const GALAXY_S: &str = r#"<html><head>
<script>var fake = "SM-X000";</script></head><body>
<table>
<tr><th>Model</th><th>Name</th></tr>
<tr><td>SM-G991B</td><td>Galaxy S21</td></tr>
<tr><td>SM-G996B</td><td>Galaxy S21+</td></tr>
</table>
<p>Older tablets such as the GT-P3113 are covered elsewhere.</p>
</body></html>"#;

const GALAXY_TAB: &str = r#"<html><body>
<ul><li>Galaxy Tab 2 7.0 &ndash; GT-P3113</li><li>Galaxy Tab S7 &ndash; sm-t870</li></ul>
</body></html>"#;

const IPHONE: &str = r#"<html><body>
<table><tr><td>iPhone 13 Pro</td><td>iPhone14,2</td></tr></table>
</body></html>"#;

fn sources() -> Vec<Source> {
    vec![
        Source::new("galaxy_s", "https://pages/galaxy_s"),
        Source::new("broken", "https://pages/missing"),
        Source::new("galaxy_tab", "https://pages/galaxy_tab"),
        Source::new("iphone_wikipedia", "https://pages/iphone"),
    ]
}

fn fetcher() -> PageFetcher {
    PageFetcher(HashMap::from([
        ("https://pages/galaxy_s", GALAXY_S),
        ("https://pages/galaxy_tab", GALAXY_TAB),
        ("https://pages/iphone", IPHONE),
    ]))
}

#[test]
fn skips_failed_source_and_keeps_first_seen() {
    let ex = Extractor::builtin().unwrap();
    let mut rec = Recorder::default();
    let out = runner::collect(&sources(), &fetcher(), &ex, Some(&mut rec));

    assert_eq!(out.fetched, ["galaxy_s", "galaxy_tab", "iphone_wikipedia"]);
    assert_eq!(out.skipped.len(), 1);
    assert_eq!(out.skipped[0].label, "broken");
    assert!(matches!(out.skipped[0].error, FetchError::Status { status: 404 }));
    assert_eq!(rec.failed, ["broken"]);
    assert!(rec.finished);

    // GT-P3113 first appears on galaxy_s; galaxy_tab's copy is dropped
    let gt = out.store.get("GT-P3113").unwrap();
    assert_eq!(gt.provenance.note(), "scraped from galaxy_s");
    assert_eq!(rec.done[1], ("galaxy_tab".to_string(), 2, 1));

    // the script body never reached the extractor
    assert!(!out.store.contains("SM-X000"));

    assert_eq!(out.fallbacks_added, 2);
    assert!(out.store.contains("IOS_DEVICE"));
    assert!(out.store.contains("ANDROID_DEVICE"));
}

#[test]
fn all_sources_failing_leaves_only_fallbacks() {
    let ex = Extractor::builtin().unwrap();
    let nothing = PageFetcher(HashMap::new());
    let out = runner::collect(&sources(), &nothing, &ex, None);

    assert!(out.fetched.is_empty());
    assert_eq!(out.skipped.len(), 4);
    let keys: Vec<_> = out.store.keys().collect();
    assert_eq!(keys, ["ANDROID_DEVICE", "IOS_DEVICE"]);

    let err = out.skipped.into_iter().next().unwrap().into_error();
    assert!(matches!(err, device_scrape::Error::DocumentUnavailable { .. }));
    assert!(err.to_string().contains("HTTP status 404"));
}

#[test]
fn run_writes_sorted_table_with_header() {
    let dir = tmp_dir("run_csv");
    let mut opts = RunOptions { sources: sources(), ..RunOptions::default() };
    opts.export.set_path(dir.join("map.csv"));

    let summary = runner::run(&opts, &fetcher(), None).unwrap();
    assert_eq!(summary.path, dir.join("map.csv"));
    assert_eq!(summary.skipped.len(), 1);

    let text = fs::read_to_string(&summary.path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("identifier,manufacturer,friendly_name,device_family,note"));

    let ids: Vec<&str> = lines
        .map(|l| l.strip_prefix('"').map_or_else(|| l.split(',').next().unwrap(), |q| q.split('"').next().unwrap()))
        .collect();
    assert_eq!(
        ids,
        ["android device", "GT-P3113", "ios device", "iPhone14,2", "SM-G991B", "SM-G996B", "sm-t870"]
    );
    assert_eq!(summary.rows, ids.len());

    assert!(text.contains("SM-G991B,Samsung,Galaxy S21,android device,scraped from galaxy_s"), "{text}");
    // the capitalized-run heuristic starts at the first uppercase letter
    assert!(text.contains("\"iPhone14,2\",Apple,Phone 13 Pro,ios device,scraped from iphone_wikipedia"), "{text}");
    assert!(text.contains("ios device,Apple,iOS device (generic),ios device,fallback"), "{text}");
}

#[test]
fn run_overwrites_existing_output() {
    let dir = tmp_dir("overwrite");
    let path = dir.join("nested").join("map.tsv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "stale contents\nthat must go\n").unwrap();

    let mut opts = RunOptions { sources: Vec::new(), ..RunOptions::default() };
    opts.export.format = ExportFormat::Tsv;
    opts.export.set_path(&path);

    runner::run(&opts, &fetcher(), None).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert!(text.starts_with("identifier\tmanufacturer\tfriendly_name\tdevice_family\tnote\r\n"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = tmp_dir("unwritable");
    // a file where the parent directory should be
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = RunOptions { sources: Vec::new(), ..RunOptions::default() };
    opts.export.set_path(blocker.join("map.csv"));

    let err = runner::run(&opts, &fetcher(), None).unwrap_err();
    assert!(matches!(err, device_scrape::Error::OutputWrite { .. }), "{err}");
}
