#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use chronos::libs::period::{Period, PeriodError};

    #[test]
    fn test_parse_formats() {
        let march = Period::new(3, 2025).unwrap();

        assert_eq!("2025-03".parse::<Period>().unwrap(), march);
        assert_eq!("03/2025".parse::<Period>().unwrap(), march);
        assert_eq!(" 3/2025 ".parse::<Period>().unwrap(), march);
        assert_eq!("current".parse::<Period>().unwrap(), Period::current());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("March".parse::<Period>(), Err(PeriodError::Unparsable(_))));
        assert_eq!("2025-13".parse::<Period>(), Err(PeriodError::InvalidMonth(13)));
        assert_eq!(Period::new(0, 2025), Err(PeriodError::InvalidMonth(0)));
    }

    #[test]
    fn test_calendar_boundaries() {
        let march = Period::new(3, 2025).unwrap();

        assert_eq!(march.start(), Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(march.end(), Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
        assert!(march.contains(Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap()));
        assert!(!march.contains(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()));
        assert!(!march.contains(Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_year_rollover() {
        let december = Period::new(12, 2024).unwrap();
        let january = Period::new(1, 2025).unwrap();

        assert_eq!(december.next(), january);
        assert_eq!(january.previous(), december);
        assert!(december < january);
    }

    #[test]
    fn test_display_and_label() {
        let march = Period::new(3, 2025).unwrap();

        assert_eq!(march.to_string(), "2025-03");
        assert_eq!(march.label(), "March 2025");
    }

    #[test]
    fn test_deserialize_validates_the_month() {
        let march: Period = serde_json::from_str(r#"{"year":2025,"month":3}"#).unwrap();
        assert_eq!(march, Period::new(3, 2025).unwrap());
        assert_eq!(serde_json::to_string(&march).unwrap(), r#"{"year":2025,"month":3}"#);

        assert!(serde_json::from_str::<Period>(r#"{"year":2025,"month":13}"#).is_err());
        assert!(serde_json::from_str::<Period>(r#"{"year":2025,"month":0}"#).is_err());
    }
}
