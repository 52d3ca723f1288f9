#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chronos::libs::aggregate::aggregate;
    use chronos::libs::clocking::ClockingRecord;
    use chronos::libs::overtime::{apply_allowance, classify, exceeded_hours, rollup, EmployeeStatus};
    use chronos::libs::period::Period;
    use chronos::libs::report::MonthlyReport;

    fn completed(employee_id: i64, name: &str, start: DateTime<Utc>, minutes: i64) -> ClockingRecord {
        let mut record = ClockingRecord::new(employee_id, name, start, None);
        record.end_time = Some(start + Duration::minutes(minutes));
        record
    }

    /// Employee 1 works 165.5h and employee 2 works 140h in March 2025.
    fn march_records() -> Vec<ClockingRecord> {
        let day = |d| Utc.with_ymd_and_hms(2025, 3, d, 6, 0, 0).unwrap();
        vec![
            completed(1, "Ana", day(1), 60 * 60),
            completed(1, "Ana", day(10), 60 * 60),
            completed(1, "Ana", day(20), 45 * 60 + 30),
            completed(2, "Bruno", day(2), 70 * 60),
            completed(2, "Bruno", day(12), 70 * 60),
        ]
    }

    #[test]
    fn test_exceeded_hours_is_never_negative() {
        assert_eq!(exceeded_hours(165.5, 160.0), 5.5);
        assert_eq!(exceeded_hours(140.0, 160.0), 0.0);
        assert_eq!(exceeded_hours(160.0, 160.0), 0.0);
    }

    #[test]
    fn test_working_exactly_the_allowance_is_normal() {
        assert_eq!(classify(exceeded_hours(160.0, 160.0)), EmployeeStatus::Normal);
        assert_eq!(classify(0.01), EmployeeStatus::Exceeded);
    }

    #[test]
    fn test_march_rollup() {
        let march = Period::new(3, 2025).unwrap();
        let rows = apply_allowance(&aggregate(&march_records(), march, None), 160.0);

        let ana = rows.iter().find(|r| r.employee_id == 1).unwrap();
        assert_eq!(ana.total_hours, 165.5);
        assert_eq!(ana.total_clockings, 3);
        assert_eq!(ana.exceeded_hours, 5.5);
        assert_eq!(ana.status, EmployeeStatus::Exceeded);
        assert_eq!((ana.month, ana.year), (3, 2025));

        let bruno = rows.iter().find(|r| r.employee_id == 2).unwrap();
        assert_eq!(bruno.total_hours, 140.0);
        assert_eq!(bruno.status, EmployeeStatus::Normal);

        let month = rollup(&rows);
        assert_eq!(month.total_employees, 2);
        assert_eq!(month.employees_exceeded, 1);
        assert_eq!(month.total_hours, 305.5);
        assert_eq!(month.total_exceeded_hours, 5.5);
    }

    #[test]
    fn test_rollup_of_nothing_is_zero() {
        let month = rollup(&[]);
        assert_eq!(month.total_employees, 0);
        assert_eq!(month.total_hours, 0.0);
    }

    #[test]
    fn test_report_uses_the_same_numbers() {
        let march = Period::new(3, 2025).unwrap();
        let report = MonthlyReport::build(&march_records(), march, 160.0, None);

        assert_eq!(report.totals.total_hours, 305.5);
        assert_eq!(report.totals.total_exceeded_hours, 5.5);

        let rows = report.export_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].employee_name, "Ana");
        assert_eq!(rows[0].period, "2025-03");
        assert_eq!(rows[0].exceeded_hours, 5.5);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("exceeded".parse::<EmployeeStatus>().unwrap(), EmployeeStatus::Exceeded);
        assert!("late".parse::<EmployeeStatus>().is_err());
    }
}
