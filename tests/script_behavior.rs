//! Behavior-driven tests for the four scripts, run in-process against a buffer.
//!
//! These tests verify WHAT each script prints and writes for a given set of
//! positional arguments, and which error category a bad input ends in.

mod support;

use std::fs;
use std::path::PathBuf;

use image::Rgb;
use tempfile::tempdir;
use tickscript_cli::cli::{ChartArgs, EchoDelayArgs, EchoFileArgs, KmeansArgs};
use tickscript_cli::commands::{chart, echo_delay, echo_file, kmeans, load_series};
use tickscript_cli::config::{ChartConfig, ClusterConfig, EchoConfig, MarkerConfig};
use tickscript_cli::CliError;
use tickscript_core::chart::decode_base64;
use tickscript_core::{AnalysisError, NormalizedSeries, WarehouseError};
use uuid::Uuid;

fn chart_args(db_path: PathBuf, tickers: &str) -> ChartArgs {
    ChartArgs {
        db_path,
        tickers: tickers.to_string(),
        start_date: String::from("2024-01-01"),
        end_date: String::from("2024-03-31"),
    }
}

fn kmeans_args(db_path: PathBuf, tickers: &str, clusters: &str) -> KmeansArgs {
    KmeansArgs {
        db_path,
        tickers: tickers.to_string(),
        clusters: clusters.to_string(),
        start_date: String::from("2024-01-01"),
        end_date: String::from("2024-03-31"),
    }
}

// =============================================================================
// Echo scripts
// =============================================================================

#[test]
fn echo_script_repeats_arguments_around_the_delay() {
    // Given: Four positional arguments with a zero delay
    let config = EchoConfig::from_args(EchoDelayArgs {
        title: String::from("Nightly run"),
        delay: String::from("0.0"),
        arg2: String::from("alpha"),
        arg3: String::from("beta gamma"),
    })
    .expect("valid arguments");

    // When: The script runs
    let mut out = Vec::new();
    echo_delay::run(&config, &mut out).expect("run");

    // Then: Every argument is echoed verbatim, with the start and finish markers
    let text = String::from_utf8(out).expect("utf8");
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "Title:  Nightly run",
            "Arg1 (delay time in seconds):",
            "0.0",
            "Arg2:",
            "alpha",
            "Arg3:",
            "beta gamma",
            "Script delay 0.0 seconds is starting delay.",
            "Script delay 0.0 seconds is finished.",
        ]
    );
}

#[test]
fn echo_script_output_depends_only_on_its_arguments() {
    // Given: The same arguments used twice
    let config = EchoConfig::from_args(EchoDelayArgs {
        title: String::from("Repeat"),
        delay: String::from("0"),
        arg2: String::from("same"),
        arg3: String::from("input"),
    })
    .expect("valid arguments");

    // When: The script runs twice
    let mut first = Vec::new();
    let mut second = Vec::new();
    echo_delay::run(&config, &mut first).expect("first run");
    echo_delay::run(&config, &mut second).expect("second run");

    // Then: Both runs print identical text
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn file_script_creates_missing_directory_and_writes_a_uuid() {
    // Given: An output directory that does not exist yet, two levels deep
    let temp = tempdir().expect("tempdir");
    let output_dir = temp.path().join("runs").join("first");
    let config = MarkerConfig::from_args(EchoFileArgs {
        title: String::from("T"),
        delay: String::from("0"),
        file_output_dir: output_dir.clone(),
        arg: String::from("payload"),
    })
    .expect("valid arguments");

    // When: The script runs
    let mut out = Vec::new();
    echo_file::run(&config, &mut out).expect("run");

    // Then: The directory is created and reported as such
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.starts_with("Title: T\nDelay: 0\n"));
    assert!(text.contains("Script is starting delay of 0 seconds.\n"));
    assert!(text.contains("Current working directory is: "));
    assert!(text.contains("Directory created.\n"));
    assert!(text.ends_with("File written.\nScript finished.\n"));

    // And: example.txt holds exactly one hyphenated UUID
    let content = fs::read_to_string(output_dir.join("example.txt")).expect("marker");
    assert_eq!(content.len(), 36);
    Uuid::parse_str(&content).expect("uuid content");
}

#[test]
fn file_script_overwrites_marker_in_existing_directory() {
    // Given: A directory that already holds a marker
    let temp = tempdir().expect("tempdir");
    let config = MarkerConfig::from_args(EchoFileArgs {
        title: String::from("T"),
        delay: String::from("0"),
        file_output_dir: temp.path().to_path_buf(),
        arg: String::from("a"),
    })
    .expect("valid arguments");
    echo_file::run(&config, &mut Vec::new()).expect("first run");
    let first = fs::read_to_string(temp.path().join("example.txt")).expect("first marker");

    // When: The script runs again
    let mut out = Vec::new();
    echo_file::run(&config, &mut out).expect("second run");

    // Then: The directory is reported as existing and the UUID is replaced
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Directory exists.\n"));
    let second = fs::read_to_string(temp.path().join("example.txt")).expect("second marker");
    assert_ne!(first, second);
    assert_eq!(second.len(), 36);
}

// =============================================================================
// Chart script
// =============================================================================

#[test]
fn chart_script_prints_one_base64_png_line() {
    // Given: A store with four tickers over three months
    let temp = tempdir().expect("tempdir");
    let db_path = support::two_group_store(temp.path());
    let config = ChartConfig::from_args(chart_args(db_path, "AAPL,XOM")).expect("valid");

    // When: The chart is rendered
    let mut out = Vec::new();
    chart::run(&config, &mut out).expect("render");

    // Then: Exactly one line is printed and it decodes to a 900x600 PNG
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 1);
    let png = decode_base64(&text).expect("base64");
    let image = image::load_from_memory(&png).expect("png").to_rgb8();
    assert_eq!(image.dimensions(), (900, 600));

    // And: Lines are drawn in the first two palette colors
    assert!(image.pixels().any(|pixel| *pixel == Rgb([0, 0, 255])));
    assert!(image.pixels().any(|pixel| *pixel == Rgb([255, 165, 0])));
}

#[test]
fn every_loaded_series_starts_at_zero_percent_change() {
    // Given: Three tickers with rows over the same range
    let temp = tempdir().expect("tempdir");
    let db_path = support::two_group_store(temp.path());
    let config = ChartConfig::from_args(chart_args(db_path, "MSFT,CVX,AAPL")).expect("valid");

    // When: The series are loaded and normalized
    let series = load_series(&config.query).expect("load");
    let normalized = series
        .iter()
        .map(NormalizedSeries::from_series)
        .collect::<Result<Vec<_>, _>>()
        .expect("normalize");

    // Then: Each series keeps its rows and starts at exactly zero
    let names = normalized
        .iter()
        .map(|entry| entry.ticker.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["MSFT", "CVX", "AAPL"]);
    for entry in &normalized {
        assert_eq!(entry.points.len(), support::trading_dates().len());
        assert!(entry.points[0].1.abs() < 1e-9, "{} starts off zero", entry.ticker);
    }
}

#[test]
fn chart_script_matches_tickers_exactly_as_given() {
    // Given: A store holding a lowercase ticker and a digit-leading exchange ticker
    let temp = tempdir().expect("tempdir");
    let mut rows = support::zigzag("aapl", 1.0, 1.0);
    rows.extend(support::zigzag("7203.T", -1.0, 1.0));
    let db_path = support::seed_store(temp.path(), &rows);
    let config = ChartConfig::from_args(chart_args(db_path.clone(), "aapl,7203.T")).expect("valid");

    // When: The chart is requested with the same spelling
    let mut out = Vec::new();
    chart::run(&config, &mut out).expect("render");

    // Then: Both series are found and drawn
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 1);

    // And: A different spelling does not match the stored rows
    let config = ChartConfig::from_args(chart_args(db_path, "AAPL")).expect("valid");
    let error = chart::run(&config, &mut Vec::new()).expect_err("must fail");
    assert!(matches!(
        error,
        CliError::Analysis(AnalysisError::EmptySeries { ref ticker }) if ticker == "AAPL"
    ));
}

#[test]
fn chart_script_draws_more_tickers_than_palette_colors() {
    // Given: 31 tickers, one more than the palette holds
    let temp = tempdir().expect("tempdir");
    let tickers = (0..31).map(|i| format!("T{i}")).collect::<Vec<_>>();
    let rows = tickers
        .iter()
        .enumerate()
        .flat_map(|(i, ticker)| support::zigzag(ticker, 1.0, 0.5 + i as f64 * 0.1))
        .collect::<Vec<_>>();
    let db_path = support::seed_store(temp.path(), &rows);
    let config = ChartConfig::from_args(chart_args(db_path, &tickers.join(","))).expect("valid");

    // When: The chart is rendered
    let mut out = Vec::new();
    chart::run(&config, &mut out).expect("render");

    // Then: Colors wrap around instead of failing, and a PNG is printed
    let text = String::from_utf8(out).expect("utf8");
    let png = decode_base64(&text).expect("base64");
    let image = image::load_from_memory(&png).expect("png");
    assert_eq!(image.width(), 900);
}

#[test]
fn chart_script_fails_on_ticker_without_rows_and_prints_nothing() {
    // Given: A store that has no rows for IBM
    let temp = tempdir().expect("tempdir");
    let db_path = support::two_group_store(temp.path());
    let config = ChartConfig::from_args(chart_args(db_path, "AAPL,IBM")).expect("valid");

    // When: The chart is requested
    let mut out = Vec::new();
    let error = chart::run(&config, &mut out).expect_err("must fail");

    // Then: The empty series is named and no partial output is emitted
    assert!(matches!(
        error,
        CliError::Analysis(AnalysisError::EmptySeries { ref ticker }) if ticker == "IBM"
    ));
    assert_eq!(error.exit_code(), 4);
    assert!(out.is_empty());
}

#[test]
fn chart_script_reports_missing_store_as_query_error() {
    // Given: A path with no database behind it
    let temp = tempdir().expect("tempdir");
    let config =
        ChartConfig::from_args(chart_args(temp.path().join("nope.duckdb"), "AAPL")).expect("valid");

    // When / Then: The run fails with a store error and creates no file
    let error = chart::run(&config, &mut Vec::new()).expect_err("must fail");
    assert!(matches!(
        error,
        CliError::Warehouse(WarehouseError::StoreNotFound { .. })
    ));
    assert_eq!(error.exit_code(), 3);
    assert!(!temp.path().join("nope.duckdb").exists());
}

// =============================================================================
// Clustering script
// =============================================================================

#[test]
fn kmeans_script_groups_tickers_with_the_same_movement_shape() {
    // Given: Two tickers that rise first and two that fall first
    let temp = tempdir().expect("tempdir");
    let db_path = support::two_group_store(temp.path());
    let config =
        ClusterConfig::from_args(kmeans_args(db_path, "AAPL,XOM,MSFT,CVX", "2")).expect("valid");

    // When: They are clustered into two groups
    let mut out = Vec::new();
    kmeans::run(&config, &mut out).expect("cluster");

    // Then: Same-shape tickers share a cluster, sorted by cluster then input order,
    // each with the color of its list position
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "0 AAPL 0,0,255",
            "0 MSFT 0,128,0",
            "1 XOM 255,165,0",
            "1 CVX 255,0,0",
        ]
    );
}

#[test]
fn kmeans_script_reports_tickers_in_their_stored_spelling() {
    // Given: Lowercase and digit-leading tickers in the store
    let temp = tempdir().expect("tempdir");
    let mut rows = support::zigzag("msft", 1.0, 1.0);
    rows.extend(support::zigzag("0700.HK", -1.0, 2.0));
    let db_path = support::seed_store(temp.path(), &rows);
    let config = ClusterConfig::from_args(kmeans_args(db_path, "msft,0700.HK", "1")).expect("valid");

    // When: They are clustered
    let mut out = Vec::new();
    kmeans::run(&config, &mut out).expect("cluster");

    // Then: Output repeats the caller's spelling
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text, "0 msft 0,0,255\n0 0700.HK 255,165,0\n");
}

#[test]
fn kmeans_script_with_one_cluster_keeps_input_order() {
    // Given: A valid store
    let temp = tempdir().expect("tempdir");
    let db_path = support::two_group_store(temp.path());
    let config = ClusterConfig::from_args(kmeans_args(db_path, "'CVX','AAPL'", "1")).expect("valid");

    // When: One cluster is requested
    let mut out = Vec::new();
    kmeans::run(&config, &mut out).expect("cluster");

    // Then: Every ticker lands in cluster 0
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text, "0 CVX 0,0,255\n0 AAPL 255,165,0\n");
}

#[test]
fn kmeans_script_names_the_ticker_with_a_different_row_count() {
    // Given: MSFT is missing its last trading day
    let temp = tempdir().expect("tempdir");
    let mut rows = support::zigzag("AAPL", 1.0, 1.0);
    let mut msft = support::zigzag("MSFT", 1.0, 1.0);
    msft.pop();
    rows.extend(msft);
    rows.extend(support::zigzag("IBM", -1.0, 1.0));
    let db_path = support::seed_store(temp.path(), &rows);
    let config =
        ClusterConfig::from_args(kmeans_args(db_path, "AAPL,MSFT,IBM", "2")).expect("valid");

    // When: Clustering is attempted
    let mut out = Vec::new();
    let error = kmeans::run(&config, &mut out).expect_err("must fail");

    // Then: The first offending ticker and both counts are reported
    assert!(matches!(
        error,
        CliError::Analysis(AnalysisError::LengthMismatch {
            ref ticker,
            expected: 30,
            actual: 29,
        }) if ticker == "MSFT"
    ));
    assert_eq!(
        error.to_string(),
        "number of rows for 'MSFT' should be 30, but is actually 29"
    );
    assert!(out.is_empty());
}
