//! Calendar era tag and the astronomical year conversion.

/// Era tag for a calendar year.
///
/// Years are positive 1-based magnitudes within their era, and there is
/// no year zero: BC year 1 is immediately followed by AD year 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Anno Domini. Years count forward from 1.
    Ad,
    /// Before Christ. Years count backward from 1.
    Bc,
}

/// Converts an (era, year) pair to the signed astronomical year.
///
/// Astronomical numbering has a year zero: BC year 1 maps to 0, BC year 2
/// to -1, and so on, while AD years map to themselves. The leap-year and
/// weekday formulas need this signed form; everything else in the crate
/// works on the tagged (era, year) pair, so the conversion stays crate
/// private.
pub(crate) fn astronomical_year(era: Era, year: u32) -> i64 {
    match era {
        Era::Ad => i64::from(year),
        Era::Bc => 1 - i64::from(year),
    }
}
