// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, bail};

use crate::config::{ExportFormat, RunOptions, sources};
use crate::core::NetFetcher;
use crate::lookup::{DeviceMap, MatchKind};
use crate::progress::Progress;
use crate::runner::RunSummary;

#[derive(Parser, Debug)]
#[command(name = "device_scrape", version)]
#[command(about = "Build a device identifier → friendly name table from reference pages")]
pub struct Args {
    /// Output file (for --lookup: the table to read)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// TOML file with [[source]] entries, replaces the built-in list
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only these source labels, comma separated
    #[arg(long)]
    pub only: Option<String>,

    /// Print label,url for each configured source and exit
    #[arg(long)]
    pub list_sources: bool,

    /// Resolve an identifier or platform string against an existing table
    #[arg(long, value_name = "QUERY")]
    pub lookup: Option<String>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Turn parsed arguments into run options. No I/O beyond reading `--config`.
pub fn build_options(args: &Args) -> crate::error::Result<RunOptions> {
    let mut options = RunOptions::default();
    options.export.format = args.format.into();

    if let Some(path) = &args.config {
        let cfg = sources::load(path)?;
        options.sources = cfg.sources;
        if let Some(out) = cfg.out {
            options.export.set_path(out);
        }
    }
    if let Some(out) = &args.out {
        options.export.set_path(out);
    }
    if let Some(only) = &args.only {
        options.sources = sources::select(options.sources, &sources::parse_labels(only))?;
    }
    Ok(options)
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let options = build_options(&args)?;

    if args.list_sources {
        for s in &options.sources {
            println!("{},{}", s.label, s.url);
        }
        return Ok(());
    }

    if let Some(query) = &args.lookup {
        return lookup(&options.export.out_path(), query);
    }

    let fetcher = NetFetcher::new()?;
    let mut progress = CliProgress::default();
    let summary = crate::runner::run(&options, &fetcher, Some(&mut progress))?;

    eprintln!("{}", summary_line(&summary));
    Ok(())
}

/// Skip reasons are left to the runner's `warn!`; this only counts them.
fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Wrote {} rows to {} ({} sources ok, {} skipped)",
        summary.rows,
        summary.path.display(),
        summary.fetched.len(),
        summary.skipped.len(),
    )
}

fn lookup(path: &std::path::Path, query: &str) -> Result<()> {
    let map = DeviceMap::load(path)?;
    let Some((row, kind)) = map.lookup(query) else {
        bail!("no match for '{query}' in {}", path.display());
    };
    let tag = match kind {
        MatchKind::Exact => "exact",
        MatchKind::Fallback => "fallback",
    };
    println!(
        "{}\t{}\t{}\t{}\t{}",
        row.identifier, row.manufacturer, row.friendly_name, row.device_family, tag
    );
    Ok(())
}

/// Console progress: one stderr line per source.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn item_done(&mut self, label: &str, candidates: usize, kept: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {label}: {candidates} candidates, {kept} new", self.done, self.total);
    }

    fn item_failed(&mut self, label: &str, _reason: &str) {
        self.done += 1;
        eprintln!("{}", self.failed_line(label));
    }
}

impl CliProgress {
    fn failed_line(&self, label: &str) -> String {
        format!("[{}/{}] {label}: skipped", self.done, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::runner::SkippedSource;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("device_scrape").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_builtin_sources_and_csv() {
        let opts = build_options(&parse(&[])).unwrap();
        assert_eq!(opts.sources.len(), crate::config::consts::SOURCES.len());
        assert_eq!(opts.export.format, ExportFormat::Csv);
    }

    #[test]
    fn only_and_out_apply() {
        let opts = build_options(&parse(&["--only", "ps5,galaxy_s", "-o", "x/map.tsv", "--format", "tsv"])).unwrap();
        let labels: Vec<_> = opts.sources.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["galaxy_s", "ps5"]);
        assert_eq!(opts.export.out_path(), PathBuf::from("x").join("map.tsv"));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
    }

    #[test]
    fn skipped_sources_are_counted_not_re_reported() {
        let mut progress = CliProgress::default();
        progress.begin(3);
        progress.item_done("galaxy_s", 4, 4);
        progress.done += 1;
        assert_eq!(progress.failed_line("broken"), "[2/3] broken: skipped");

        let summary = RunSummary {
            path: PathBuf::from("out").join("device_mapping.csv"),
            rows: 6,
            candidates: 4,
            fetched: vec!["galaxy_s".into(), "galaxy_tab".into()],
            skipped: vec![SkippedSource {
                label: "broken".into(),
                url: "https://example.invalid/broken".into(),
                error: FetchError::Status { status: 404 },
            }],
        };
        let line = summary_line(&summary);
        assert!(line.ends_with("(2 sources ok, 1 skipped)"), "{line}");
        assert!(!line.contains("broken") && !line.contains("404"), "{line}");
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert!(build_options(&parse(&["--only", "nope"])).is_err());
    }
}
