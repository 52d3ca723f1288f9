use crate::{
    db::{clockings::Clockings, employees::Employees},
    libs::{
        messages::Message,
        period::Period,
        seed::{generate, DemoDataset, DEFAULT_MONTHS, DEFAULT_SEED},
        store::ClockingStore,
    },
    msg_debug, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Last month of the generated data
    #[arg(short, long, default_value = "current")]
    period: Period,
    #[arg(short, long, default_value_t = DEFAULT_MONTHS)]
    months: u32,
    /// Seed even if the database already has employees
    #[arg(long)]
    force: bool,
}

pub fn cmd(args: SeedArgs) -> Result<()> {
    let mut employees = Employees::new()?;
    if employees.count()? > 0 && !args.force {
        msg_info!(Message::SeedRefused);
        return Ok(());
    }

    let dataset = generate(args.seed, args.period, args.months);
    let (created, clockings) = load(&mut employees, &mut Clockings::new()?, &dataset)?;

    msg_success!(Message::SeedCompleted(created, clockings));
    Ok(())
}

/// Stores the dataset and returns `(employees, clockings)` inserted.
///
/// Employees already present (matched by email) keep their data: their demo
/// clockings are skipped, so reseeding never duplicates records.
pub fn load(employees: &mut Employees, clockings: &mut Clockings, dataset: &DemoDataset) -> Result<(usize, usize)> {
    // Demo ids are positional; the database assigns its own
    let mut ids = HashMap::new();
    for employee in &dataset.employees {
        let demo_id = employee.id.unwrap_or_default();
        if let Some(existing) = employees.get_by_email(&employee.email)? {
            msg_debug!(format!("Demo employee {} already stored as {:?}", demo_id, existing.id));
            continue;
        }
        let id = employees.insert(employee)?;
        msg_debug!(format!("Demo employee {} stored as {}", demo_id, id));
        ids.insert(demo_id, id);
    }

    let mut inserted = 0;
    for record in &dataset.clockings {
        let Some(&employee_id) = ids.get(&record.employee_id) else {
            continue;
        };
        let mut record = record.clone();
        record.employee_id = employee_id;
        clockings.create(&record)?;
        inserted += 1;
    }

    Ok((ids.len(), inserted))
}
