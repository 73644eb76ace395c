//! Formatted duration strings and the time-saved estimate
use once_cell::sync::Lazy;
use regex::Regex;

use crate::route::RouteCandidate;

static DURATION_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(\d+)\s*(?:h|hr|hrs|hour|hours))?\s*(?:(\d+)\s*(?:min|mins|minute|minutes))?\s*$",
    )
    .ok()
});

/// Parse a formatted duration such as `"22 min"` or `"1 h 5 min"` into minutes.
///
/// Returns `None` for anything that is not an hour and/or minute quantity.
#[must_use]
pub fn parse_minutes(text: &str) -> Option<u32> {
    let re = DURATION_RE.as_ref()?;
    let caps = re.captures(text)?;
    let hours = caps.get(1).map(|m| m.as_str().parse::<u32>());
    let minutes = caps.get(2).map(|m| m.as_str().parse::<u32>());
    match (hours, minutes) {
        (None, None) => None,
        (h, m) => {
            let h = h.transpose().ok()?.unwrap_or(0);
            let m = m.transpose().ok()?.unwrap_or(0);
            h.checked_mul(60)?.checked_add(m)
        }
    }
}

/// Render whole minutes the way route cards display them.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

/// Difference between the slowest and fastest candidate, in minutes.
///
/// Each candidate contributes its in-traffic duration, falling back to the
/// free-flow duration. Unparsable durations are skipped; fewer than two
/// usable values yields zero.
#[must_use]
pub fn time_saved(routes: &[RouteCandidate]) -> u32 {
    if routes.len() < 2 {
        return 0;
    }
    let durations: Vec<u32> = routes
        .iter()
        .filter_map(|route| parse_minutes(route.effective_duration()))
        .collect();
    if durations.len() < 2 {
        return 0;
    }
    let fastest = durations.iter().copied().min().unwrap_or(0);
    let slowest = durations.iter().copied().max().unwrap_or(0);
    slowest - fastest
}
