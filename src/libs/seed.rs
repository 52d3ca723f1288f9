//! Deterministic demo dataset.
//!
//! Generates a small company with one employee per role and a few months of
//! clockings. The same seed and anchor period always produce the same data,
//! so demos and tests are reproducible.

use crate::libs::clocking::ClockingRecord;
use crate::libs::employee::Employee;
use crate::libs::period::Period;
use crate::libs::role::Role;
use chrono::{Datelike, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 20250301;
pub const DEFAULT_MONTHS: u32 = 2;

const DESCRIPTIONS: [&str; 6] = [
    "Development",
    "Code review",
    "Customer support",
    "Planning meeting",
    "Documentation",
    "Onboarding",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DemoDataset {
    pub employees: Vec<Employee>,
    pub clockings: Vec<ClockingRecord>,
}

pub fn demo_employees() -> Vec<Employee> {
    let people = [
        ("Admin Chronos", "admin@chronos.dev", vec![Role::SystemAdmin]),
        ("Laura RRHH", "rrhh@chronos.dev", vec![Role::Hr, Role::Employee]),
        ("Juan Empleado", "juan@chronos.dev", vec![Role::Employee]),
        ("Maria Desarrolladora", "maria@chronos.dev", vec![Role::Employee]),
        ("Carlos Soporte", "carlos@chronos.dev", vec![Role::Employee, Role::ClockingAdmin]),
        ("Pedro Fichador", "fichador@chronos.dev", vec![Role::Operator]),
    ];

    people
        .into_iter()
        .enumerate()
        .map(|(i, (name, email, roles))| {
            let mut employee = Employee::new(name, email, roles);
            employee.id = Some(i as i64 + 1);
            employee
        })
        .collect()
}

/// Builds the dataset for the `months` periods ending with `anchor`.
///
/// The third employee has one clocking still in progress in the anchor month.
pub fn generate(seed: u64, anchor: Period, months: u32) -> DemoDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let employees = demo_employees();
    let mut clockings = Vec::new();

    let mut periods = vec![anchor];
    for _ in 1..months.max(1) {
        let earliest = periods[periods.len() - 1];
        periods.push(earliest.previous());
    }
    periods.reverse();

    for employee in &employees {
        let employee_id = employee.id.unwrap_or_default();
        for period in &periods {
            let days = days_in_month(*period);
            let count = rng.gen_range(8..=22);
            let mut open_left = if *period == anchor && employee_id == 3 { 1 } else { 0 };

            for _ in 0..count {
                let day = rng.gen_range(1..=days);
                let hour = rng.gen_range(7..=10);
                let minute = rng.gen_range(0..60);
                let Some(start) = Utc.with_ymd_and_hms(period.year, period.month, day, hour, minute, 0).single() else {
                    continue;
                };
                let description = DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())].to_string();
                let length = Duration::minutes(rng.gen_range(60..=540));

                let mut record = ClockingRecord::new(employee_id, &employee.name, start, Some(description));
                if open_left > 0 {
                    open_left -= 1;
                } else {
                    record.end_time = Some(start + length);
                }
                clockings.push(record);
            }
        }
    }

    clockings.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.employee_id.cmp(&b.employee_id)));
    DemoDataset { employees, clockings }
}

fn days_in_month(period: Period) -> u32 {
    period.next().first_day().pred_opt().map_or(28, |last| last.day())
}
