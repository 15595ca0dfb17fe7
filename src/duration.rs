//! Duration parsing and formatting.
//!
//! Video lengths arrive from the API in a compact ISO-8601-like encoding
//! (`PT1H30M15S`). Everything past that boundary works in whole seconds.

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Parse a compact duration encoding into seconds.
///
/// Parsing starts at the first `PT` and reads optional hour, minute and
/// second components in that order. Missing components count as zero, and
/// an encoding without `PT` or without any recognizable component is zero.
///
/// ```
/// use playtime::duration::parse_duration;
///
/// assert_eq!(parse_duration("PT1H30M15S"), 5415);
/// assert_eq!(parse_duration("PT2H"), 7200);
/// assert_eq!(parse_duration("garbage"), 0);
/// ```
pub fn parse_duration(encoded: &str) -> u64 {
    let Some(start) = encoded.find("PT") else {
        return 0;
    };
    let mut rest = &encoded[start + 2..];

    let mut total: u64 = 0;
    for (unit, scale) in [('H', SECONDS_PER_HOUR), ('M', SECONDS_PER_MINUTE), ('S', 1)] {
        if let Some((value, remaining)) = take_component(rest, unit) {
            total = total.saturating_add(value.saturating_mul(scale));
            rest = remaining;
        }
    }
    total
}

/// Consume `<digits><unit>` from the front of `input`.
///
/// Returns `None` (consuming nothing) when the input does not start with at
/// least one digit followed by `unit`.
fn take_component(input: &str, unit: char) -> Option<(u64, &str)> {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let remaining = input[digits..].strip_prefix(unit)?;
    let value = input[..digits]
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')));
    Some((value, remaining))
}

/// Hours, minutes and seconds of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Hms {
    /// Split a whole number of seconds into components.
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Total seconds represented by these components.
    pub fn total_seconds(&self) -> u64 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }
}

impl std::fmt::Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Render seconds as `"{h}h {m}m {s}s"`.
pub fn format_hms(seconds: u64) -> String {
    Hms::from_seconds(seconds).to_string()
}

/// Render seconds as a sentence, e.g. `"1 hour 30 minutes 15 seconds"`.
///
/// Zero components are left out; a zero duration reads `"0 seconds"`.
pub fn describe(seconds: u64) -> String {
    let hms = Hms::from_seconds(seconds);
    let parts: Vec<String> = [
        (hms.hours, "hour"),
        (hms.minutes, "minute"),
        (hms.seconds, "second"),
    ]
    .into_iter()
    .filter(|(value, _)| *value > 0)
    .map(|(value, unit)| pluralize(value, unit))
    .collect();

    if parts.is_empty() {
        "0 seconds".to_string()
    } else {
        parts.join(" ")
    }
}

fn pluralize(value: u64, unit: &str) -> String {
    if value == 1 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}
