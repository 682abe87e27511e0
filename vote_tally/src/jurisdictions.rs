/*
 * The fixed list of jurisdictions reported in the candidate tables.
 */

pub const NUM_JURISDICTIONS: usize = 51;

// The 50 states and the district, in the order of the candidate tables.
// Names are matched exactly against the records, which use upper case.
pub const JURISDICTIONS: [&str; NUM_JURISDICTIONS] = [
    "ALABAMA",
    "ALASKA",
    "ARIZONA",
    "ARKANSAS",
    "CALIFORNIA",
    "COLORADO",
    "CONNECTICUT",
    "DELAWARE",
    "FLORIDA",
    "GEORGIA",
    "HAWAII",
    "IDAHO",
    "ILLINOIS",
    "INDIANA",
    "IOWA",
    "KANSAS",
    "KENTUCKY",
    "LOUISIANA",
    "MAINE",
    "MARYLAND",
    "MASSACHUSETTS",
    "MICHIGAN",
    "MINNESOTA",
    "MISSISSIPPI",
    "MISSOURI",
    "MONTANA",
    "NEBRASKA",
    "NEVADA",
    "NEW HAMPSHIRE",
    "NEW JERSEY",
    "NEW MEXICO",
    "NEW YORK",
    "NORTH CAROLINA",
    "NORTH DAKOTA",
    "OHIO",
    "OKLAHOMA",
    "OREGON",
    "PENNSYLVANIA",
    "RHODE ISLAND",
    "SOUTH CAROLINA",
    "SOUTH DAKOTA",
    "TENNESSEE",
    "TEXAS",
    "UTAH",
    "VERMONT",
    "VIRGINIA",
    "WASHINGTON",
    "WASHINGTON DC",
    "WEST VIRGINIA",
    "WISCONSIN",
    "WYOMING",
];

/// The position of a jurisdiction in the canonical list.
///
/// The match is exact and case-sensitive.
pub fn jurisdiction_index(name: &str) -> Option<usize> {
    JURISDICTIONS.iter().position(|j| *j == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_has_no_duplicates() {
        let distinct: HashSet<&str> = JURISDICTIONS.iter().cloned().collect();
        assert_eq!(distinct.len(), NUM_JURISDICTIONS);
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(jurisdiction_index("ALABAMA"), Some(0));
        assert_eq!(jurisdiction_index("WASHINGTON DC"), Some(47));
        assert_eq!(jurisdiction_index("WYOMING"), Some(50));
        assert_eq!(jurisdiction_index("Ohio"), None);
        assert_eq!(jurisdiction_index("WASHINGTON D.C."), None);
        assert_eq!(jurisdiction_index(""), None);
    }
}
