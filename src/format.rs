use serde::{Deserialize, Serialize};

/// How the hour component of a duration is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourScale {
    /// Hours in full, e.g. `1234:05:06`.
    #[default]
    Plain,
    /// Whole thousands or millions of hours only, e.g. `1k:05:06`.
    Abbreviated,
}

/// Render milliseconds as `H:MM:SS`, dropping the sub-second remainder.
pub fn format_duration(ms: u64, scale: HourScale) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let hours = match scale {
        HourScale::Plain => hours.to_string(),
        HourScale::Abbreviated => {
            let mega = hours / 1_000_000;
            let kilo = (hours % 1_000_000) / 1_000;
            if mega > 0 {
                format!("{mega}M")
            } else if kilo > 0 {
                format!("{kilo}k")
            } else {
                hours.to_string()
            }
        }
    };
    format!("{hours}:{minutes:02}:{seconds:02}")
}

/// Parse `H:MM:SS`, `M:SS` or a bare number of seconds into milliseconds.
pub fn parse_duration(input: &str) -> Option<u64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if !input.contains(':') {
        return input.parse::<u64>().ok()?.checked_mul(1000);
    }
    let parts: Vec<&str> = input.split(':').collect();
    let (h, m, s) = match parts.as_slice() {
        [h, m, s] => (h.parse::<u64>().ok()?, m.parse::<u64>().ok()?, s.parse::<u64>().ok()?),
        [m, s] => (0, m.parse::<u64>().ok()?, s.parse::<u64>().ok()?),
        _ => return None,
    };
    if m >= 60 || s >= 60 {
        return None;
    }
    h.checked_mul(3600)?
        .checked_add(m * 60 + s)?
        .checked_mul(1000)
}
