#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use chronos::libs::clocking::{ClockingError, ClockingRecord};
    use chronos::libs::period::Period;
    use chronos::libs::role::{AccessError, Actor, Role};
    use chronos::libs::store::{delete_clocking, end_clocking, start_clocking, ClockingFilter, ClockingStore, MemoryStore};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    fn juan() -> Actor {
        Actor::new(3, "Juan Empleado", vec![Role::Employee])
    }

    fn maria() -> Actor {
        Actor::new(4, "Maria Desarrolladora", vec![Role::Employee])
    }

    fn operator() -> Actor {
        Actor::new(6, "Pedro Fichador", vec![Role::Operator])
    }

    #[test]
    fn test_start_and_end_own_clocking() {
        let mut store = MemoryStore::new();

        let started = start_clocking(&mut store, &juan(), 3, "Juan Empleado", at(10, 9), Some("Development".into())).unwrap();
        let id = started.id.unwrap();
        assert!(started.is_open());

        let ended = end_clocking(&mut store, &juan(), id, at(10, 17)).unwrap();
        assert_eq!(ended.end_time, Some(at(10, 17)));
        assert_eq!(store.get(id).unwrap().unwrap().end_time, Some(at(10, 17)));
    }

    #[test]
    fn test_only_one_open_clocking_per_employee() {
        let mut store = MemoryStore::new();
        start_clocking(&mut store, &juan(), 3, "Juan Empleado", at(10, 9), None).unwrap();

        let err = start_clocking(&mut store, &juan(), 3, "Juan Empleado", at(10, 10), None).unwrap_err();
        assert_eq!(err.downcast_ref::<ClockingError>(), Some(&ClockingError::AlreadyInProgress(3)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cannot_end_twice() {
        let mut store = MemoryStore::new();
        let id = start_clocking(&mut store, &juan(), 3, "Juan Empleado", at(10, 9), None).unwrap().id.unwrap();
        end_clocking(&mut store, &juan(), id, at(10, 12)).unwrap();

        let err = end_clocking(&mut store, &juan(), id, at(10, 13)).unwrap_err();
        assert_eq!(err.downcast_ref::<ClockingError>(), Some(&ClockingError::AlreadyCompleted(id)));
    }

    #[test]
    fn test_employee_cannot_touch_other_clockings() {
        let mut store = MemoryStore::new();
        let id = start_clocking(&mut store, &juan(), 3, "Juan Empleado", at(10, 9), None).unwrap().id.unwrap();

        let err = end_clocking(&mut store, &maria(), id, at(10, 12)).unwrap_err();
        assert!(err.downcast_ref::<AccessError>().is_some());
        assert!(delete_clocking(&mut store, &maria(), id).is_err());
        assert!(start_clocking(&mut store, &maria(), 3, "Juan Empleado", at(11, 9), None).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_operator_clocks_on_behalf() {
        let mut store = MemoryStore::new();

        let id = start_clocking(&mut store, &operator(), 4, "Maria Desarrolladora", at(10, 9), None).unwrap().id.unwrap();
        end_clocking(&mut store, &operator(), id, at(10, 15)).unwrap();
        delete_clocking(&mut store, &operator(), id).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_record() {
        let mut store = MemoryStore::new();
        let err = delete_clocking(&mut store, &juan(), 99).unwrap_err();
        assert_eq!(err.downcast_ref::<ClockingError>(), Some(&ClockingError::NotFound(99)));
    }

    #[test]
    fn test_list_filters_and_orders_newest_first() {
        let mut early = ClockingRecord::new(3, "Juan Empleado", at(2, 9), None);
        early.end_time = Some(at(2, 17));
        let mut other = ClockingRecord::new(4, "Maria Desarrolladora", at(5, 9), None);
        other.end_time = Some(at(5, 17));
        let open = ClockingRecord::new(3, "Juan Empleado", at(8, 9), None);
        let mut april = ClockingRecord::new(3, "Juan Empleado", Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap(), None);
        april.end_time = Some(Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap());

        let mut store = MemoryStore::with_records(vec![early, other, open, april]);
        let march = Period::new(3, 2025).unwrap();

        let all = store.list(&ClockingFilter::all()).unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|pair| pair[0].start_time >= pair[1].start_time));

        let juan_march = store.list(&ClockingFilter::all().employee(3).period(march)).unwrap();
        assert_eq!(juan_march.len(), 2);
        assert_eq!(juan_march[0].start_time, at(8, 9));

        let open_only = store.list(&ClockingFilter::all().open()).unwrap();
        assert_eq!(open_only.len(), 1);
        assert!(open_only[0].is_open());
    }
}
