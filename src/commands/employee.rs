use super::Context;
use crate::{
    db::employees::Employees,
    libs::{
        employee::{join_roles, Employee, EmployeeId},
        messages::Message,
        role::{Permission, Role},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    List,
    Add {
        name: String,
        email: String,
        /// Roles, comma separated
        #[arg(short, long, value_enum, value_delimiter = ',', default_value = "employee")]
        roles: Vec<Role>,
    },
    Delete {
        id: EmployeeId,
        #[arg(short, long)]
        yes: bool,
    },
    /// Replace an employee's roles
    Roles {
        id: EmployeeId,
        #[arg(value_enum, value_delimiter = ',', required = true)]
        roles: Vec<Role>,
    },
}

pub fn cmd(args: EmployeeArgs, ctx: &Context) -> Result<()> {
    match args.command {
        EmployeeCommand::List => handle_list(ctx),
        EmployeeCommand::Add { name, email, roles } => handle_add(ctx, name, email, roles),
        EmployeeCommand::Delete { id, yes } => handle_delete(ctx, id, yes),
        EmployeeCommand::Roles { id, roles } => handle_roles(ctx, id, roles),
    }
}

fn handle_list(ctx: &Context) -> Result<()> {
    ctx.actor()?.require(Permission::ViewAllReports)?;

    let employees = Employees::new()?.list()?;
    if employees.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(());
    }

    msg_print!(Message::EmployeesHeader, true);
    View::employees(&employees)
}

fn handle_add(ctx: &Context, name: String, email: String, roles: Vec<Role>) -> Result<()> {
    let mut employees = Employees::new()?;

    // The very first employee bootstraps an empty database
    if employees.count()? > 0 {
        ctx.actor()?.require(Permission::ManageEmployees)?;
    }

    if employees.get_by_email(&email)?.is_some() {
        msg_error!(Message::EmployeeEmailTaken(email));
        return Ok(());
    }

    let id = employees.insert(&Employee::new(&name, &email, roles))?;
    msg_success!(Message::EmployeeCreated(id, name));
    Ok(())
}

fn handle_delete(ctx: &Context, id: EmployeeId, yes: bool) -> Result<()> {
    let actor = ctx.actor()?;
    actor.require(Permission::ManageEmployees)?;

    if id == actor.employee_id {
        msg_error!(Message::CannotDeleteSelf);
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEmployee(id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    Employees::new()?.delete(id)?;
    msg_success!(Message::EmployeeDeleted(id));
    Ok(())
}

fn handle_roles(ctx: &Context, id: EmployeeId, roles: Vec<Role>) -> Result<()> {
    ctx.actor()?.require(Permission::ManageEmployees)?;

    Employees::new()?.set_roles(id, &roles)?;
    msg_success!(Message::EmployeeRolesUpdated(id, join_roles(&roles)));
    Ok(())
}
