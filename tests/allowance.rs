#[cfg(test)]
mod tests {
    use chronos::libs::allowance::{effective_hours, validate_hours, AllowanceError, MonthlyAllowance, DEFAULT_MONTHLY_HOURS};

    #[test]
    fn test_range_is_inclusive() {
        assert!(validate_hours(1.0).is_ok());
        assert!(validate_hours(744.0).is_ok());
        assert!(validate_hours(0.99).is_err());
        assert!(validate_hours(744.01).is_err());
        assert!(validate_hours(f64::NAN).is_err());
    }

    #[test]
    fn test_error_names_the_bounds() {
        let err = MonthlyAllowance::new(800.0, "Laura RRHH").unwrap_err();

        assert_eq!(
            err,
            AllowanceError::OutOfRange {
                value: 800.0,
                min: 1.0,
                max: 744.0
            }
        );
        assert_eq!(err.to_string(), "monthly hours must be between 1 and 744, got 800");
    }

    #[test]
    fn test_fallback_when_nothing_is_stored() {
        assert_eq!(effective_hours(None), DEFAULT_MONTHLY_HOURS);
        assert!(MonthlyAllowance::fallback().is_fallback());

        let stored = MonthlyAllowance::new(172.5, "Laura RRHH").unwrap();
        assert!(!stored.is_fallback());
        assert_eq!(effective_hours(Some(&stored)), 172.5);
    }
}
