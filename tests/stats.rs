#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chronos::libs::clocking::ClockingRecord;
    use chronos::libs::overtime::EmployeeStatus;
    use chronos::libs::period::Period;
    use chronos::libs::stats::{DashboardStats, EmployeeHistory, RECENT_CLOCKINGS};

    fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, month, day, hour, 0, 0).unwrap()
    }

    fn completed(id: i64, employee_id: i64, start: DateTime<Utc>, hours: i64) -> ClockingRecord {
        let mut record = ClockingRecord::new(employee_id, "Someone", start, None);
        record.id = Some(id);
        record.end_time = Some(start + Duration::hours(hours));
        record
    }

    fn records() -> Vec<ClockingRecord> {
        let mut open = ClockingRecord::new(2, "Someone", at(3, 28, 9), None);
        open.id = Some(20);

        let mut records: Vec<ClockingRecord> = (1..=6).map(|day| completed(day as i64, 1, at(3, day, 9), 30)).collect();
        records.push(completed(10, 2, at(3, 3, 9), 4));
        records.push(completed(11, 1, at(2, 10, 9), 10));
        records.push(open);
        records
    }

    #[test]
    fn test_dashboard_for_march() {
        let march = Period::new(3, 2025).unwrap();
        let stats = DashboardStats::compute(&records(), march, 160.0);

        assert_eq!(stats.clockings_this_month, 8);
        assert_eq!(stats.active_clockings, 1);
        assert_eq!(stats.total_hours, 184.0);
        assert_eq!(stats.total_exceeded_hours, 20.0);
        assert_eq!(stats.employees_exceeded, 1);
        assert_eq!(stats.average_duration, Duration::seconds(184 * 3600 / 7));
    }

    #[test]
    fn test_dashboard_recent_clockings() {
        let march = Period::new(3, 2025).unwrap();
        let stats = DashboardStats::compute(&records(), march, 160.0);

        assert_eq!(stats.recent.len(), RECENT_CLOCKINGS);
        assert_eq!(stats.recent[0].id, Some(20));
        assert!(stats.recent.windows(2).all(|pair| pair[0].start_time >= pair[1].start_time));
    }

    #[test]
    fn test_dashboard_of_an_empty_month() {
        let stats = DashboardStats::compute(&records(), Period::new(7, 2025).unwrap(), 160.0);

        assert_eq!(stats.clockings_this_month, 0);
        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(stats.average_duration, Duration::zero());
    }

    #[test]
    fn test_history_breaks_down_by_month() {
        let history = EmployeeHistory::compute(&records(), 1, None, 160.0);

        assert_eq!(history.total_clockings, 7);
        assert_eq!(history.total_hours, 190.0);
        assert_eq!(history.months.len(), 2);
        assert_eq!((history.months[0].month, history.months[0].year), (3, 2025));
        assert_eq!(history.months[0].status, EmployeeStatus::Exceeded);
        assert_eq!(history.months[1].status, EmployeeStatus::Normal);
        assert_eq!(history.months_exceeded(), 1);
        assert_eq!(history.last_activity, Some(at(3, 7, 15)));
    }

    #[test]
    fn test_history_limited_to_one_period() {
        let february = Period::new(2, 2025).unwrap();
        let history = EmployeeHistory::compute(&records(), 1, Some(february), 160.0);

        assert_eq!(history.total_clockings, 1);
        assert_eq!(history.total_hours, 10.0);
        assert_eq!(history.months.len(), 1);
    }

    #[test]
    fn test_history_with_only_open_records() {
        let history = EmployeeHistory::compute(&records(), 2, Some(Period::new(3, 2025).unwrap()), 160.0);

        assert_eq!(history.total_clockings, 2);
        assert_eq!(history.total_hours, 4.0);
        assert_eq!(history.last_activity, Some(at(3, 28, 9)));
    }
}
