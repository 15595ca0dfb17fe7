//! Plain-text summary of an analysis, as placed on the clipboard.

use crate::analysis::AggregateResult;

/// Render the fixed-format summary for `result`.
pub fn render(result: &AggregateResult) -> String {
    let mut lines = vec![
        "Playlist Analysis Results:".to_string(),
        "------------------------".to_string(),
        format!("Title: {}", result.title),
        format!("Creator: {}", result.creator),
        format!(
            "Total Videos: {} ({} unavailable)",
            result.video_count, result.unavailable_count
        ),
        format!("Average Video Length: {}", result.average()),
        format!("Total Duration: {}", result.total()),
        String::new(),
        "Estimated Watching Time:".to_string(),
    ];

    lines.extend(
        result
            .speed_times
            .iter()
            .map(|speed| format!("- At {} speed: {}", speed.label(), speed.hms())),
    );

    lines.join("\n")
}
