// Primitives for reading the election returns.

use log::{debug, info};
use snafu::prelude::*;

use std::fs::File;
use std::io::Read;

use vote_tally::builder::Builder;

use crate::explorer::*;

const NUM_FIELDS: usize = 5;

/// Reads all the records of a file.
///
/// The whole file is rejected at the first line that cannot be read.
pub fn load_records(path: &str, rules: &QueryRules) -> ExplorerResult<RecordStore> {
    info!("Attempting to read election returns {:?}", path);
    let file = File::open(path).context(SourceUnavailableSnafu { path })?;
    let mut builder = Builder::new(rules).context(InvalidRulesSnafu {})?;
    read_csv_records(file, path, &mut builder)?;
    info!("Read {} records from {:?}", builder.len(), path);
    Ok(builder.build())
}

/// Parses the records of a source and adds them to the builder.
///
/// `origin` is only used in the error messages.
pub fn read_csv_records<R: Read>(
    source: R,
    origin: &str,
    builder: &mut Builder,
) -> ExplorerResult<()> {
    // No header and no quoting: quotes are regular characters.
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(source);

    for (idx, line_r) in rdr.into_records().enumerate() {
        let line = line_r.context(ReadingRecordSnafu { path: origin })?;
        let lineno = line
            .position()
            .map(|p| p.line())
            .unwrap_or((idx + 1) as u64);
        debug!("read_csv_records: lineno: {:?} row: {:?}", lineno, line);

        // Trailing separators are tolerated.
        let extra_filled = line.iter().skip(NUM_FIELDS).any(|s| !s.is_empty());
        if line.len() < NUM_FIELDS || extra_filled {
            return WrongFieldCountSnafu {
                lineno,
                found: line.len(),
            }
            .fail();
        }

        let count_s = &line[4];
        let vote_count = count_s
            .trim()
            .parse::<u32>()
            .ok()
            .context(MalformedRecordSnafu {
                lineno,
                content: count_s.to_string(),
            })?;

        builder.add_vote(&line[0], &line[1], &line[2], &line[3], vote_count);
    }
    Ok(())
}
