//! Utility helpers for Podcastr

/// Format a duration in seconds as zero-padded `MM:SS`.
/// Minutes are not rolled over into hours, so an hour-long episode reads `60:00`.
pub fn format_time_to_string(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(format_time_to_string(0), "00:00");
        assert_eq!(format_time_to_string(65), "01:05");
        assert_eq!(format_time_to_string(3599), "59:59");
    }

    #[test]
    fn keeps_counting_minutes_past_an_hour() {
        assert_eq!(format_time_to_string(3600), "60:00");
        assert_eq!(format_time_to_string(3981), "66:21");
    }
}
