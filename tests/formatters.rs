#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chronos::libs::formatter::{format_duration, format_hours, format_minutes, format_optional_timestamp, round_hours};

    #[test]
    fn test_hours_have_two_decimals() {
        assert_eq!(format_hours(165.5), "165.50");
        assert_eq!(format_hours(161.0 + 1.0 / 3.0), "161.33");
        assert_eq!(format_hours(0.0), "0.00");
        assert_eq!(round_hours(5.555_555), 5.56);
    }

    #[test]
    fn test_duration_as_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00");
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_minutes(&Duration::seconds(150)), "2 min");
        assert_eq!(format_minutes(&Duration::seconds(-150)), "0 min");
    }

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(format_optional_timestamp(None), "-");
    }
}
