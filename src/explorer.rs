use log::{debug, info, warn};

pub use vote_tally::*;

use snafu::{prelude::*, Snafu};

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::explorer::io_csv::load_records;
use crate::explorer::report::*;

pub mod io_csv;
pub mod menu;
pub mod report;

#[derive(Debug, Snafu)]
pub enum ExplorerError {
    #[snafu(display("Error opening file {path}"))]
    SourceUnavailable {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Line {lineno}: the number of votes is not a non-negative integer: {content:?}"))]
    MalformedRecord { lineno: u64, content: String },
    #[snafu(display("Line {lineno}: expected 5 fields, found {found}"))]
    WrongFieldCount { lineno: u64, found: usize },
    #[snafu(display("Error reading the records of {path}"))]
    ReadingRecord { source: csv::Error, path: String },
    #[snafu(display("Invalid query settings"))]
    InvalidRules { source: TallyErrors },
    #[snafu(display("Unknown query {name:?} (expected overview, national, state, candidate or county)"))]
    UnknownQuery { name: String },
    #[snafu(display("Error reading the standard input"))]
    ReadingInput { source: std::io::Error },
    #[snafu(display("Error writing the output"))]
    WritingOutput { source: std::io::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error serializing the summary"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Difference detected between the summary and the reference summary {path}"))]
    ReferenceMismatch { path: String },
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum QueryKind {
    Overview,
    National,
    State,
    Candidate,
    County,
}

impl QueryKind {
    pub fn parse(name: &str) -> ExplorerResult<QueryKind> {
        match name.to_lowercase().as_str() {
            "overview" => Ok(QueryKind::Overview),
            "national" => Ok(QueryKind::National),
            "state" => Ok(QueryKind::State),
            "candidate" => Ok(QueryKind::Candidate),
            "county" => Ok(QueryKind::County),
            _ => UnknownQuerySnafu { name }.fail(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QueryKind::Overview => "overview",
            QueryKind::National => "national",
            QueryKind::State => "state",
            QueryKind::Candidate => "candidate",
            QueryKind::County => "county",
        }
    }

    fn uses_term(&self) -> bool {
        matches!(
            self,
            QueryKind::State | QueryKind::Candidate | QueryKind::County
        )
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub input: String,
    pub query: String,
    pub term: Option<String>,
}

fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn candidate_total_to_json(t: &CandidateTotal) -> JSValue {
    json!({
        "candidate": t.candidate_name,
        "party": t.party_label,
        "votes": t.total_votes.to_string()
    })
}

fn candidate_report_to_json(report: &CandidateReport) -> JSValue {
    let states: Vec<JSValue> = report
        .tallies
        .iter()
        .map(|t| {
            json!({
                "state": t.jurisdiction,
                "candidateVotes": t.candidate_votes.to_string(),
                "totalVotes": t.total_votes.to_string(),
                "percentage": format!("{:.1}", t.percentage())
            })
        })
        .collect();
    let best = report.best.map(|b| {
        json!({
            "state": b.jurisdiction,
            "percentage": format!("{:.1}", b.percentage)
        })
    });
    json!({
        "candidate": report.resolved_name,
        "states": states,
        "bestState": best,
        "unrecognizedStates": report.unrecognized
    })
}

/// Runs one query, writes its text rendering and returns its results in
/// JSON format.
pub fn execute_query<W: Write>(
    store: &RecordStore,
    kind: QueryKind,
    term: &str,
    out: &mut W,
) -> ExplorerResult<JSValue> {
    info!("execute_query: {:?} term: {:?}", kind, term);
    let res = match kind {
        QueryKind::Overview => {
            let o = store.overview();
            write_overview(out, &o).context(WritingOutputSnafu {})?;
            json!({
                "records": o.record_count.to_string(),
                "totalVotes": o.total_votes.to_string()
            })
        }
        QueryKind::National => {
            let totals = store.national_results();
            write_national(out, &totals).context(WritingOutputSnafu {})?;
            JSValue::Array(totals.iter().map(candidate_total_to_json).collect())
        }
        QueryKind::State => {
            let results = store.state_results(term);
            write_state(out, &results).context(WritingOutputSnafu {})?;
            JSValue::Array(
                results
                    .iter()
                    .map(|r| {
                        let mut js = candidate_total_to_json(&r.total);
                        js["bars"] = json!(r.bars.to_string());
                        js
                    })
                    .collect(),
            )
        }
        QueryKind::Candidate => {
            let report = store.candidate_results(term);
            if !report.unrecognized.is_empty() {
                warn!(
                    "execute_query: votes in unrecognized states are not counted: {:?}",
                    report.unrecognized
                );
            }
            write_candidate(out, &report).context(WritingOutputSnafu {})?;
            candidate_report_to_json(&report)
        }
        QueryKind::County => {
            let records = store.county_search(term);
            write_county(out, &records).context(WritingOutputSnafu {})?;
            JSValue::Array(
                records
                    .iter()
                    .map(|r| {
                        json!({
                            "state": r.jurisdiction,
                            "county": r.sub_jurisdiction,
                            "candidate": r.candidate_name,
                            "party": r.party_label,
                            "votes": r.vote_count.to_string()
                        })
                    })
                    .collect(),
            )
        }
    };
    Ok(res)
}

fn build_summary_js(config: &SummaryConfig, results: JSValue) -> JSValue {
    json!({
        "config": config,
        "results": results
    })
}

pub fn read_summary(path: &str) -> ExplorerResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read content: {:?}", contents);
    let js: JSValue =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(js)
}

/// Checks that a summary is the same as the one stored in a reference file.
/// The differences are printed when they do not match.
pub fn check_reference(summary: &JSValue, reference_path: &str) -> ExplorerResult<()> {
    let summary_ref = read_summary(reference_path)?;
    info!("summary: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(WritingJsonSnafu {})?;
    let pretty_js_summary = serde_json::to_string_pretty(summary).context(WritingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_summary {
        warn!("Found differences with the reference string");
        print_diff(
            pretty_js_summary_ref.as_str(),
            pretty_js_summary.as_ref(),
            "\n",
        );
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    Ok(())
}

fn write_summary<W: Write>(summary: &JSValue, dest: &str, out: &mut W) -> ExplorerResult<()> {
    let pretty_js = serde_json::to_string_pretty(summary).context(WritingJsonSnafu {})?;
    if dest == "stdout" {
        writeln!(out, "{}", pretty_js).context(WritingOutputSnafu {})?;
    } else {
        info!("Writing summary to {:?}", dest);
        fs::write(dest, pretty_js).context(WritingSummarySnafu { path: dest })?;
    }
    Ok(())
}

/// Runs a single query and produces its summary.
pub fn run_query<W: Write>(
    store: &RecordStore,
    input_path: &str,
    query: &str,
    term: Option<&str>,
    out: &mut W,
) -> ExplorerResult<JSValue> {
    let kind = QueryKind::parse(query)?;
    let term = if kind.uses_term() { term } else { None };
    let results = execute_query(store, kind, term.unwrap_or(""), out)?;
    let config = SummaryConfig {
        input: simplify_file_name(input_path),
        query: kind.name().to_string(),
        term: term.map(|s| s.to_string()),
    };
    Ok(build_summary_js(&config, results))
}

pub fn run_explorer<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> ExplorerResult<()> {
    let rules = QueryRules {
        bar_scale: args
            .bar_scale
            .unwrap_or(QueryRules::DEFAULT_RULES.bar_scale),
    };
    debug!("run_explorer: rules: {:?}", rules);

    let input_path = match args.input.clone() {
        Some(p) => p,
        None => menu::prompt(input, out, "Enter file to use: ")?.unwrap_or_default(),
    };
    let store = load_records(&input_path, &rules)?;

    let query = match args.query.as_deref() {
        Some(q) => q,
        None => return menu::run_menu(&store, input, out),
    };

    let summary = run_query(&store, &input_path, query, args.term.as_deref(), out)?;
    if let Some(dest) = args.out.as_deref() {
        write_summary(&summary, dest, out)?;
    }
    if let Some(reference_path) = args.reference.as_deref() {
        check_reference(&summary, reference_path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};
    use vote_tally::builder::Builder;

    fn store() -> RecordStore {
        let mut builder = Builder::new(&QueryRules::DEFAULT_RULES).unwrap();
        builder.add_vote("OHIO", "Cuyahoga", "A", "PartyX", 100);
        builder.add_vote("OHIO", "Franklin", "A", "PartyX", 50);
        builder.add_vote("OHIO", "Cuyahoga", "B", "PartyY", 30);
        builder.add_vote("GUAM", "Hagatna", "B", "PartyY", 300_000);
        builder.build()
    }

    fn run(query: &str, term: Option<&str>) -> JSValue {
        let mut out: Vec<u8> = Vec::new();
        run_query(&store(), "/data/returns-2020.csv", query, term, &mut out).unwrap()
    }

    fn args(input: &str) -> Args {
        Args {
            input: Some(input.to_string()),
            query: None,
            term: None,
            out: None,
            reference: None,
            bar_scale: None,
            verbose: false,
        }
    }

    #[test]
    fn parse_query_kinds() {
        assert_eq!(QueryKind::parse("overview").unwrap(), QueryKind::Overview);
        assert_eq!(QueryKind::parse("National").unwrap(), QueryKind::National);
        assert_eq!(QueryKind::parse("COUNTY").unwrap(), QueryKind::County);
        assert!(matches!(
            QueryKind::parse("precinct"),
            Err(ExplorerError::UnknownQuery { .. })
        ));
    }

    #[test]
    fn overview_summary() {
        let js = run("overview", Some("ignored"));
        assert_eq!(
            js,
            json!({
                "config": {"input": "returns-2020.csv", "query": "overview", "term": null},
                "results": {"records": "4", "totalVotes": "300180"}
            })
        );
    }

    #[test]
    fn national_summary() {
        let js = run("national", None);
        assert_eq!(
            js["results"],
            json!([
                {"candidate": "B", "party": "PartyY", "votes": "300030"},
                {"candidate": "A", "party": "PartyX", "votes": "150"}
            ])
        );
    }

    #[test]
    fn state_summary() {
        let js = run("state", Some("guam"));
        assert_eq!(js["config"]["term"], json!("guam"));
        assert_eq!(
            js["results"],
            json!([{"candidate": "B", "party": "PartyY", "votes": "300000", "bars": "2"}])
        );
    }

    #[test]
    fn candidate_summary() {
        let js = run("candidate", Some("b"));
        let results = &js["results"];
        assert_eq!(results["candidate"], json!("B"));
        assert_eq!(results["states"].as_array().unwrap().len(), 51);
        assert_eq!(
            results["states"][34],
            json!({"state": "OHIO", "candidateVotes": "30", "totalVotes": "180", "percentage": "16.7"})
        );
        assert_eq!(
            results["bestState"],
            json!({"state": "OHIO", "percentage": "16.7"})
        );
        assert_eq!(results["unrecognizedStates"], json!(["GUAM"]));
    }

    #[test]
    fn candidate_summary_without_match() {
        let js = run("candidate", None);
        assert_eq!(js["results"]["candidate"], JSValue::Null);
        assert_eq!(js["results"]["bestState"], JSValue::Null);
    }

    #[test]
    fn county_summary() {
        let js = run("county", Some("cuya"));
        assert_eq!(js["results"].as_array().unwrap().len(), 2);
        assert_eq!(
            js["results"][1],
            json!({"state": "OHIO", "county": "Cuyahoga", "candidate": "B", "party": "PartyY", "votes": "30"})
        );
        assert_eq!(run("county", Some("xyz123"))["results"], json!([]));
    }

    #[test]
    fn reference_comparison() {
        let js = run("national", None);
        let mut reference = NamedTempFile::new().unwrap();
        write!(reference, "{}", serde_json::to_string(&js).unwrap()).unwrap();
        let path = reference.path().display().to_string();
        assert!(check_reference(&js, &path).is_ok());

        let other = run("overview", None);
        assert!(matches!(
            check_reference(&other, &path),
            Err(ExplorerError::ReferenceMismatch { .. })
        ));
    }

    #[test]
    fn missing_reference() {
        let js = run("overview", None);
        assert!(matches!(
            check_reference(&js, "/nonexistent/elexplore/reference.json"),
            Err(ExplorerError::OpeningJson { .. })
        ));
    }

    #[test]
    fn explorer_one_shot_with_summary() {
        let dir = tempdir().unwrap();
        let data_path = dir.path().join("returns.csv").display().to_string();
        let summary_path = dir.path().join("summary.json").display().to_string();
        fs::write(&data_path, "OHIO,Cuyahoga,A,PartyX,100\nOHIO,Cuyahoga,B,PartyY,30\n").unwrap();
        let mut a = args(&data_path);
        a.query = Some("national".to_string());
        a.out = Some(summary_path.clone());

        let mut input: &[u8] = b"";
        let mut out: Vec<u8> = Vec::new();
        run_explorer(&a, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("A                   PartyX                100\n"));

        let written = read_summary(&summary_path).unwrap();
        assert_eq!(written["results"][1]["votes"], json!("30"));
        assert_eq!(written["config"]["input"], json!("returns.csv"));
    }

    #[test]
    fn explorer_asks_for_the_file_and_runs_the_menu() {
        let mut data = NamedTempFile::new().unwrap();
        writeln!(data, "IOWA,Polk,A,P,7").unwrap();
        let data_path = data.path().display().to_string();
        let mut a = args(&data_path);
        a.input = None;

        let session = format!("{}\n1\n6\n", data_path);
        let mut input: &[u8] = session.as_bytes();
        let mut out: Vec<u8> = Vec::new();
        run_explorer(&a, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Enter file to use: "));
        assert!(text.contains("Total number of votes recorded: 7"));
    }

    #[test]
    fn explorer_missing_file() {
        let a = args("/nonexistent/elexplore/returns.csv");
        let mut input: &[u8] = b"";
        let mut out: Vec<u8> = Vec::new();
        assert!(matches!(
            run_explorer(&a, &mut input, &mut out),
            Err(ExplorerError::SourceUnavailable { .. })
        ));
    }
}
