use clap::Parser;

/// This is an explorer for county-level presidential election returns.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The file containing the election returns: one record per line with
    /// the fields state,county,candidate,party,votes. If not provided, the file name is asked
    /// on the standard input.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (overview, national, state, candidate, county or empty) If specified, runs this query
    /// once and exits. Otherwise, an interactive menu is started.
    #[clap(short, long, value_parser)]
    pub query: Option<String>,

    /// (text, optional) The state name or the search term used by the state, candidate and
    /// county queries.
    #[clap(short, long, value_parser)]
    pub term: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the query will be written in
    /// JSON format to the given location. Only used with --query.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the summary of a query in JSON format. If
    /// provided, elexplore will check that the summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (default 150000) The number of votes represented by one bar in the state chart.
    #[clap(long, value_parser)]
    pub bar_scale: Option<u64>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
