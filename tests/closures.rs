#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chronos::db::closures::Closures;
    use chronos::db::db::Db;
    use chronos::libs::clocking::ClockingRecord;
    use chronos::libs::closure::{generate_preview, ClosureDesk, ClosureError, ClosureFilter, ClosureSnapshot, ClosureStatus};
    use chronos::libs::employee::Employee;
    use chronos::libs::overtime::EmployeeStatus;
    use chronos::libs::period::Period;
    use chronos::libs::role::Role;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ClosureContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl ClosureContext {
        fn closures(&self) -> Closures {
            Closures::with(Db::open(&self.path).unwrap())
        }
    }

    impl TestContext for ClosureContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("chronos.db");
            ClosureContext { _temp_dir: temp_dir, path }
        }
    }

    fn march() -> Period {
        Period::new(3, 2025).unwrap()
    }

    fn completed(employee_id: i64, name: &str, start: DateTime<Utc>, minutes: i64) -> ClockingRecord {
        let mut record = ClockingRecord::new(employee_id, name, start, None);
        record.end_time = Some(start + Duration::minutes(minutes));
        record
    }

    /// 165.5h for Ana, 140h for Bruno and one open record, all in March 2025.
    fn records() -> Vec<ClockingRecord> {
        let day = |d| Utc.with_ymd_and_hms(2025, 3, d, 6, 0, 0).unwrap();
        vec![
            completed(1, "Ana", day(1), 60 * 60),
            completed(1, "Ana", day(10), 60 * 60),
            completed(1, "Ana", day(20), 45 * 60 + 30),
            completed(2, "Bruno", day(2), 70 * 60),
            completed(2, "Bruno", day(12), 70 * 60),
            ClockingRecord::new(2, "Bruno", day(28), None),
        ]
    }

    fn employees() -> Vec<Employee> {
        let mut ana = Employee::new("Ana", "ana@chronos.dev", vec![Role::Employee]);
        ana.id = Some(1);
        vec![ana]
    }

    fn snapshot(records: &[ClockingRecord], allowance: f64) -> ClosureSnapshot {
        ClosureSnapshot {
            preview: generate_preview(records, march(), allowance),
            closed_by: "Laura RRHH".to_string(),
            notes: Some("March payroll".to_string()),
        }
    }

    #[test]
    fn test_preview_matches_the_report_numbers() {
        let preview = generate_preview(&records(), march(), 160.0).with_emails(&employees());

        assert_eq!(preview.totals.total_hours, 305.5);
        assert_eq!(preview.totals.total_exceeded_hours, 5.5);
        assert_eq!(preview.totals.employees_exceeded, 1);
        assert_eq!(preview.in_progress_count, 1);
        assert!(preview.has_in_progress());
        assert_eq!(preview.details[0].employee_email.as_deref(), Some("ana@chronos.dev"));
        assert_eq!(preview.details[1].employee_email, None);
    }

    #[test]
    fn test_preview_is_idempotent() {
        let p1 = generate_preview(&records(), march(), 160.0);
        let p2 = generate_preview(&records(), march(), 160.0);
        assert_eq!(p1, p2);
        assert_eq!(p1.totals.total_hours.to_bits(), p2.totals.total_hours.to_bits());
        assert_eq!(p1.totals.total_exceeded_hours.to_bits(), p2.totals.total_exceeded_hours.to_bits());

        let mut reversed = records();
        reversed.reverse();
        let p3 = generate_preview(&reversed, march(), 160.0);
        assert_eq!(p1, p3);
        assert_eq!(p1.totals.total_hours.to_bits(), p3.totals.total_hours.to_bits());
    }

    #[test]
    fn test_desk_requires_a_preview() {
        let mut desk = ClosureDesk::new(march());
        assert_eq!(desk.ready().unwrap_err(), ClosureError::NoPreview);

        let mut committed = false;
        let result = desk.close("Laura RRHH", None, |_| {
            committed = true;
            Ok(())
        });
        assert!(result.is_err());
        assert!(!committed);
    }

    #[test]
    fn test_desk_refuses_a_stale_preview() {
        let mut desk = ClosureDesk::new(march());
        desk.refresh(&records(), 160.0, &[]);

        desk.select(march().next());
        assert_eq!(
            desk.ready().unwrap_err(),
            ClosureError::StalePreview {
                selected: march().next(),
                preview: march()
            }
        );
        assert!(desk.close("Laura RRHH", None, |_| Ok(())).is_err());

        desk.refresh(&records(), 160.0, &[]);
        assert_eq!(desk.ready().unwrap().period, march().next());
        assert!(desk.ready().unwrap().details.is_empty());
    }

    #[test]
    fn test_failed_commit_keeps_the_preview() {
        let mut desk = ClosureDesk::new(march());
        desk.refresh(&records(), 160.0, &[]);

        let failed: anyhow::Result<()> = desk.close("Laura RRHH", None, |_| Err(anyhow!("disk full")));
        assert!(failed.is_err());
        assert!(desk.preview().is_some());

        let period = desk.close("Laura RRHH", None, |snapshot| Ok(snapshot.preview.period)).unwrap();
        assert_eq!(period, march());
        assert!(desk.preview().is_none());
    }

    #[test_context(ClosureContext)]
    #[test]
    fn test_commit_freezes_totals_and_details(ctx: &mut ClosureContext) {
        let mut closures = ctx.closures();
        let id = closures.commit(&snapshot(&records(), 160.0)).unwrap();

        let stored = closures.get_with_details(id).unwrap().unwrap();
        assert_eq!(stored.closure.status, ClosureStatus::Closed);
        assert_eq!(stored.closure.total_hours, 305.5);
        assert_eq!(stored.closure.total_exceeded_hours, 5.5);
        assert_eq!(stored.closure.total_employees, 2);
        assert_eq!(stored.closure.employees_exceeded, 1);
        assert_eq!(stored.closure.allowed_monthly_hours, 160.0);
        assert_eq!(stored.closure.closed_by.as_deref(), Some("Laura RRHH"));
        assert!(stored.closure.closed_at.is_some());
        assert_eq!(stored.closure.period(), Some(march()));

        assert_eq!(stored.details.len(), 2);
        assert_eq!(stored.details[0].employee_name, "Ana");
        assert_eq!(stored.details[0].status, EmployeeStatus::Exceeded);
        assert_eq!(stored.details[0].exceeded_hours, 5.5);
        assert_eq!(stored.details[1].status, EmployeeStatus::Normal);
        assert_eq!(closures.status_for(march()).unwrap(), Some(ClosureStatus::Closed));
    }

    #[test_context(ClosureContext)]
    #[test]
    fn test_closed_month_cannot_be_closed_again(ctx: &mut ClosureContext) {
        let mut closures = ctx.closures();
        closures.commit(&snapshot(&records(), 160.0)).unwrap();

        let err = closures.commit(&snapshot(&records(), 160.0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ClosureError>(),
            Some(&ClosureError::AlreadyClosed {
                period: march(),
                status: ClosureStatus::Closed
            })
        );
        assert_eq!(closures.list(&ClosureFilter::default()).unwrap().len(), 1);
    }

    #[test_context(ClosureContext)]
    #[test]
    fn test_reopen_keeps_frozen_totals(ctx: &mut ClosureContext) {
        let mut closures = ctx.closures();
        let id = closures.commit(&snapshot(&records(), 160.0)).unwrap();

        let reopened = closures.reopen(id, "Admin Chronos").unwrap();
        assert_eq!(reopened.status, ClosureStatus::Open);
        assert_eq!(reopened.total_exceeded_hours, 5.5);
        assert_eq!(reopened.reopened_by.as_deref(), Some("Admin Chronos"));
        assert!(reopened.closed_at.is_none());
        assert_eq!(closures.get_with_details(id).unwrap().unwrap().details.len(), 2);

        let err = closures.reopen(id, "Admin Chronos").unwrap_err();
        assert!(matches!(err.downcast_ref::<ClosureError>(), Some(ClosureError::InvalidTransition { .. })));
    }

    #[test_context(ClosureContext)]
    #[test]
    fn test_closing_a_reopened_month_voids_the_old_row(ctx: &mut ClosureContext) {
        let mut closures = ctx.closures();
        let first = closures.commit(&snapshot(&records(), 160.0)).unwrap();
        closures.reopen(first, "Admin Chronos").unwrap();

        let second = closures.commit(&snapshot(&records(), 150.0)).unwrap();
        assert_ne!(first, second);

        let live = closures.live_for(march()).unwrap().unwrap();
        assert_eq!(live.id, second);
        assert_eq!(live.allowed_monthly_hours, 150.0);
        assert_eq!(live.total_exceeded_hours, 15.5);
        assert!(closures.get(first).unwrap().unwrap().is_voided());

        assert_eq!(closures.list(&ClosureFilter::default()).unwrap().len(), 1);
        let with_voided = ClosureFilter {
            include_voided: true,
            ..ClosureFilter::default()
        };
        assert_eq!(closures.list(&with_voided).unwrap().len(), 2);
    }

    #[test_context(ClosureContext)]
    #[test]
    fn test_manual_status_changes(ctx: &mut ClosureContext) {
        let mut closures = ctx.closures();
        let id = closures.commit(&snapshot(&records(), 160.0)).unwrap();

        let err = closures.set_status(id, ClosureStatus::Reviewing).unwrap_err();
        assert!(matches!(err.downcast_ref::<ClosureError>(), Some(ClosureError::InvalidTransition { .. })));

        closures.reopen(id, "Admin Chronos").unwrap();
        assert_eq!(closures.set_status(id, ClosureStatus::Reviewing).unwrap().status, ClosureStatus::Reviewing);

        assert_eq!(closures.set_status(id, ClosureStatus::Open).unwrap().status, ClosureStatus::Open);
        assert!(closures.set_status(id, ClosureStatus::Closed).is_err());
    }

    #[test_context(ClosureContext)]
    #[test]
    fn test_closing_a_month_under_review(ctx: &mut ClosureContext) {
        let mut closures = ctx.closures();
        let first = closures.commit(&snapshot(&records(), 160.0)).unwrap();
        closures.reopen(first, "Admin Chronos").unwrap();
        closures.set_status(first, ClosureStatus::Reviewing).unwrap();

        let second = closures.commit(&snapshot(&records(), 160.0)).unwrap();

        assert_ne!(first, second);
        assert!(closures.get(first).unwrap().unwrap().is_voided());
        let live = closures.live_for(march()).unwrap().unwrap();
        assert_eq!(live.id, second);
        assert_eq!(live.status, ClosureStatus::Closed);

        // Closed again, so a further commit is refused
        let err = closures.commit(&snapshot(&records(), 160.0)).unwrap_err();
        assert!(matches!(err.downcast_ref::<ClosureError>(), Some(ClosureError::AlreadyClosed { .. })));
    }

    #[test_context(ClosureContext)]
    #[test]
    fn test_notes(ctx: &mut ClosureContext) {
        let mut closures = ctx.closures();
        let id = closures.commit(&snapshot(&records(), 160.0)).unwrap();
        let detail_id = closures.get_with_details(id).unwrap().unwrap().details[0].id;

        closures.update_notes(id, Some("Checked by payroll")).unwrap();
        closures.update_detail_notes(detail_id, Some("Approved overtime")).unwrap();

        let stored = closures.get_with_details(id).unwrap().unwrap();
        assert_eq!(stored.closure.notes.as_deref(), Some("Checked by payroll"));
        assert_eq!(stored.details[0].notes.as_deref(), Some("Approved overtime"));
        assert_eq!(stored.closure.total_hours, 305.5);

        closures.update_notes(id, None).unwrap();
        assert!(closures.get(id).unwrap().unwrap().notes.is_none());

        let err = closures.update_detail_notes(9999, Some("x")).unwrap_err();
        assert_eq!(err.downcast_ref::<ClosureError>(), Some(&ClosureError::DetailNotFound(9999)));
    }

    #[test_context(ClosureContext)]
    #[test]
    fn test_summary_counts_only_closed_months(ctx: &mut ClosureContext) {
        let mut closures = ctx.closures();
        let march_id = closures.commit(&snapshot(&records(), 160.0)).unwrap();

        let april_records: Vec<ClockingRecord> = vec![completed(1, "Ana", Utc.with_ymd_and_hms(2025, 4, 3, 8, 0, 0).unwrap(), 170 * 60)];
        let april = ClosureSnapshot {
            preview: generate_preview(&april_records, march().next(), 160.0),
            closed_by: "Laura RRHH".to_string(),
            notes: None,
        };
        closures.commit(&april).unwrap();

        let summary = closures.summary().unwrap();
        assert_eq!(summary.total_closures, 2);
        assert_eq!(summary.total_hours_closed, 475.5);
        assert_eq!(summary.total_exceeded_hours_closed, 15.5);
        assert_eq!(summary.average_exceeded_per_month, 7.75);

        closures.reopen(march_id, "Admin Chronos").unwrap();
        let summary = closures.summary().unwrap();
        assert_eq!(summary.total_closures, 1);
        assert_eq!(summary.total_hours_closed, 170.0);
    }
}
