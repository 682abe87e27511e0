/*!

This is the long-form manual for `vote_tally` and `elexplore`.

## Input format

The returns are read from a text file with one record per line and five
comma-separated fields, in this order:

| field            | example        |
|------------------|----------------|
| state            | `OHIO`         |
| county           | `Cuyahoga`     |
| candidate        | `Jo Jorgensen` |
| party            | `Libertarian`  |
| number of votes  | `4511`         |

```text
OHIO,Cuyahoga,Joseph R. Biden Jr.,Democrat,416176
OHIO,Cuyahoga,Donald J. Trump,Republican,202699
```

Notes:
- there is no header row
- fields cannot be quoted: a comma always separates two fields, so county or
  candidate names must not contain commas
- the number of votes must be a non-negative integer. A single malformed line
  stops the loading of the whole file.
- state names are expected in upper case. The state-by-state table of a
  candidate only covers the 50 states and `WASHINGTON DC`, spelled as in
  [`crate::jurisdictions::JURISDICTIONS`]. Other states are still counted in
  the national and state results, and are listed after the table.

## Queries

`elexplore` offers the following queries, either from the interactive menu or
with the `--query` flag:

### `overview`

The number of records and the total number of votes in the file.

### `national`

All the candidates, ranked by number of votes. Candidates with the same
number of votes are listed in the order they first appear in the file.

### `state`

The candidates of one state (the name is not case-sensitive), ranked as
above, with a bar chart where each `|` stands for 150,000 votes by default
(see `--bar-scale`).

### `candidate`

The first candidate whose name contains the search term (not
case-sensitive), with the number of votes for this candidate and the total
number of votes in each state, and the state where the candidate had the
highest share.

### `county`

Every record of the counties whose name contains the search term (not
case-sensitive), as found in the file.

## Summary output

With `--out`, the result of a `--query` is also written in the JSON format.
Counts are written as strings. The `--reference` flag compares this summary
with a previous one and fails if they differ.

*/
