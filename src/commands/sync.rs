use super::Context;
use crate::{
    api::{RemoteClocking, RemoteClockings},
    db::clockings::Clockings,
    libs::{config::Config, messages::Message, role::Permission},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;

pub async fn cmd(ctx: &Context) -> Result<()> {
    ctx.actor()?.require(Permission::ManageAllClockings)?;

    let Some(server) = Config::read()?.server else {
        msg_bail_anyhow!(Message::ServerNotConfigured);
    };

    let remote = RemoteClockings::new(&server).fetch_clockings().await?;
    if remote.is_empty() {
        msg_info!(Message::NoClockingsFound);
        return Ok(());
    }

    let (created, updated) = import(&mut Clockings::new()?, &remote)?;
    msg_success!(Message::SyncCompleted(created, updated));
    Ok(())
}

/// Converts the whole batch before writing any of it. Returns `(created, updated)`.
pub fn import(store: &mut Clockings, remote: &[RemoteClocking]) -> Result<(usize, usize)> {
    let batch = remote
        .iter()
        .map(|clocking| Ok((clocking.id.clone(), clocking.to_record()?)))
        .collect::<Result<Vec<_>>>()?;

    store.upsert_remote_all(&batch)
}
