#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use chronos::libs::clocking::{duration, duration_seconds, hours, ClockingError, ClockingRecord, ClockingStatus};

    fn at(day: u32, hour: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_open_record_contributes_nothing() {
        let record = ClockingRecord::new(3, "Juan Empleado", at(10, 9), None);

        assert!(record.is_open());
        assert_eq!(record.status(), ClockingStatus::InProgress);
        assert_eq!(duration(&record), Duration::zero());
    }

    #[test]
    fn test_completed_record_duration() {
        let mut record = ClockingRecord::new(3, "Juan Empleado", at(10, 9), None);
        record.complete(at(10, 17)).unwrap();

        assert_eq!(record.status(), ClockingStatus::Completed);
        assert_eq!(duration_seconds(&record), 8 * 3600);
        assert_eq!(hours(duration_seconds(&record)), 8.0);
    }

    #[test]
    fn test_end_before_start_is_clamped_to_zero() {
        let mut record = ClockingRecord::new(3, "Juan Empleado", at(10, 9), None);
        record.end_time = Some(at(10, 8));

        assert!(record.is_anomalous());
        assert_eq!(duration_seconds(&record), 0);
    }

    #[test]
    fn test_record_completes_only_once() {
        let mut record = ClockingRecord::new(3, "Juan Empleado", at(10, 9), None);
        record.id = Some(41);
        record.complete(at(10, 12)).unwrap();

        assert_eq!(record.complete(at(10, 13)), Err(ClockingError::AlreadyCompleted(41)));
        assert_eq!(record.end_time, Some(at(10, 12)));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ClockingStatus::InProgress.to_string(), "in-progress");
        assert_eq!(ClockingStatus::Completed.to_string(), "completed");
    }
}
