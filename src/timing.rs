//! Solve-time display.

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;

/// Formats a duration in milliseconds as `MM:SS.mmm`.
///
/// Minutes are padded to two digits but never truncated, so an hour shows
/// as `60:00.000`.
pub fn format_time(ms: u64) -> String {
    let minutes = ms / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}
