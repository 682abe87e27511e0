// The interactive menu.

use log::debug;
use snafu::prelude::*;

use std::io::{BufRead, Write};

use crate::explorer::report::*;
use crate::explorer::*;

const MENU: &str = "
Select a menu option:
  1. Data overview
  2. National results
  3. State results
  4. Candidate results
  5. County search
  6. Exit
Your choice: ";

/// Prints a prompt and reads one line of the answer, without the surrounding
/// whitespace. Returns None at the end of the input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> ExplorerResult<Option<String>> {
    write!(out, "{}", message).context(WritingOutputSnafu {})?;
    out.flush().context(WritingOutputSnafu {})?;
    let mut line = String::new();
    let num_read = input.read_line(&mut line).context(ReadingInputSnafu {})?;
    if num_read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}

/// Runs the menu until the user exits or the input ends.
pub fn run_menu<R: BufRead, W: Write>(
    store: &RecordStore,
    input: &mut R,
    out: &mut W,
) -> ExplorerResult<()> {
    loop {
        let choice = match prompt(input, out, MENU)? {
            Some(c) => c,
            None => {
                debug!("run_menu: end of input");
                return Ok(());
            }
        };
        debug!("run_menu: choice {:?}", choice);
        let written = match choice.parse::<u32>() {
            Ok(1) => write_overview(out, &store.overview()),
            Ok(2) => write_national(out, &store.national_results()),
            Ok(3) => {
                let state = prompt(input, out, "Enter state: ")?.unwrap_or_default();
                write_state(out, &store.state_results(&state))
            }
            Ok(4) => {
                let term = prompt(input, out, "Enter candidate: ")?.unwrap_or_default();
                write_candidate(out, &store.candidate_results(&term))
            }
            Ok(5) => {
                let term = prompt(input, out, "Enter county: ")?.unwrap_or_default();
                write_county(out, &store.county_search(&term))
            }
            Ok(6) => return Ok(()),
            _ => Ok(()),
        };
        written.context(WritingOutputSnafu {})?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vote_tally::builder::Builder;

    fn ohio() -> RecordStore {
        let mut builder = Builder::new(&QueryRules::DEFAULT_RULES).unwrap();
        builder.add_vote("OHIO", "Cuyahoga", "A", "PartyX", 100);
        builder.add_vote("OHIO", "Franklin", "A", "PartyX", 50);
        builder.add_vote("OHIO", "Cuyahoga", "B", "PartyY", 30);
        builder.build()
    }

    fn session(input: &str) -> String {
        let mut cursor = Cursor::new(input.as_bytes().to_vec());
        let mut out: Vec<u8> = Vec::new();
        run_menu(&ohio(), &mut cursor, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_right_away() {
        let text = session("6\n1\n");
        assert_eq!(text.matches("Your choice: ").count(), 1);
        assert!(!text.contains("Number of election records"));
    }

    #[test]
    fn end_of_input_exits() {
        let text = session("1\n");
        assert!(text.contains("Number of election records: 3"));
        assert_eq!(text.matches("Your choice: ").count(), 2);
    }

    #[test]
    fn all_queries() {
        let text = session("1\n2\n3\nohio\n4\nA\n5\nfrank\n6\n");
        assert!(text.contains("Total number of votes recorded: 180"));
        assert!(text.contains("A                   PartyX                150"));
        assert!(text.contains("Enter state: "));
        assert!(text.contains("Enter candidate: "));
        assert!(text.contains("The best state for A is OHIO"));
        assert!(text.contains("Enter county: "));
        assert!(text.contains("Franklin, OHIO"));
        assert!(!text.contains("Cuyahoga, OHIO"));
    }

    #[test]
    fn invalid_choices_prompt_again() {
        let text = session("abc\n9\n\n6\n");
        assert_eq!(text.matches("Your choice: ").count(), 4);
    }

    #[test]
    fn prompt_trims_the_answer() {
        let mut cursor = Cursor::new(b"  new york \r\n".to_vec());
        let mut out: Vec<u8> = Vec::new();
        let answer = prompt(&mut cursor, &mut out, "Enter state: ").unwrap();
        assert_eq!(answer, Some("new york".to_string()));
        assert_eq!(out, b"Enter state: ".to_vec());
    }
}
