// Text rendering of the query results.

use std::io::Write;

use crate::explorer::*;

pub fn write_overview<W: Write>(out: &mut W, overview: &Overview) -> std::io::Result<()> {
    writeln!(out, "Number of election records: {}", overview.record_count)?;
    writeln!(out, "Total number of votes recorded: {}", overview.total_votes)
}

pub fn write_national<W: Write>(out: &mut W, totals: &[CandidateTotal]) -> std::io::Result<()> {
    for t in totals.iter() {
        writeln!(
            out,
            "{:<20}{:<15}{:>10}",
            t.candidate_name, t.party_label, t.total_votes
        )?;
    }
    Ok(())
}

const BAR_CHUNK: &str = "||||||||||||||||||||||||||||||||||||||||||||||||||||||||||||||||";

pub fn write_state<W: Write>(out: &mut W, results: &[StateResult]) -> std::io::Result<()> {
    for r in results.iter() {
        write!(out, "{:<20}", r.total.candidate_name)?;
        write_bars(out, r.bars)?;
        writeln!(out)?;
    }
    Ok(())
}

// Long bars are written piece by piece, without building the whole line.
fn write_bars<W: Write>(out: &mut W, bars: u64) -> std::io::Result<()> {
    let chunk = BAR_CHUNK.len() as u64;
    let mut left = bars;
    while left > 0 {
        let n = left.min(chunk);
        out.write_all(&BAR_CHUNK.as_bytes()[..n as usize])?;
        left -= n;
    }
    Ok(())
}

pub fn write_candidate<W: Write>(out: &mut W, report: &CandidateReport) -> std::io::Result<()> {
    for t in report.tallies.iter() {
        writeln!(
            out,
            "{:<20}{:>10}{:>10}{:>7.1}%",
            t.jurisdiction,
            t.candidate_votes,
            t.total_votes,
            t.percentage()
        )?;
    }
    for j in report.unrecognized.iter() {
        writeln!(out, "Not counted (unrecognized state): {}", j)?;
    }
    match (&report.resolved_name, &report.best) {
        (Some(name), Some(best)) => writeln!(
            out,
            "The best state for {} is {}",
            name, best.jurisdiction
        ),
        (Some(name), None) => writeln!(out, "No votes recorded for {} in any state", name),
        (None, _) => writeln!(out, "No candidate matches the search"),
    }
}

pub fn write_county<W: Write>(out: &mut W, records: &[&VoteRecord]) -> std::io::Result<()> {
    for r in records.iter() {
        let place = format!("{}, {}", r.sub_jurisdiction, r.jurisdiction);
        writeln!(
            out,
            "{:<40}{:<20}{:>10}",
            place, r.candidate_name, r.vote_count
        )?;
    }
    Ok(())
}
