use std::sync::atomic::Ordering;

use tracing::{info, warn};

use poise::serenity_prelude as serenity;

use rollcall_core::{Data, Error};
use rollcall_roster::{MemberRecord, export_document, export_roster};

/// Take the one-shot roster snapshot once the gateway reports ready: print
/// the member table to stdout and overwrite the export file.
///
/// READY is re-delivered on reconnect; only the first one in the process
/// lifetime triggers the export.
pub async fn handle_ready_roster(
    ctx: &serenity::Context,
    data: &Data,
    ready: &serenity::Ready,
) -> Result<(), Error> {
    if data.roster_exported.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let configured = data.config.guild_id.map(serenity::GuildId::new);
    let Some(guild_id) = configured.or_else(|| ready.guilds.first().map(|guild| guild.id)) else {
        warn!("No guild available for the roster snapshot.");
        return Ok(());
    };

    let guild = guild_id.to_partial_guild(&ctx.http).await?;
    let members = guild_id.members(&ctx.http, None, None).await?;
    let records = member_records(&guild, &members);

    let export = export_roster(&records);
    println!("\nServer: {} (ID: {})\n", guild.name, guild.id);
    println!("Members:");
    print!("{}", export.table);

    let document = export_document(&export.rows);
    tokio::fs::write(&data.config.export_path, document).await?;
    info!(
        path = %data.config.export_path.display(),
        members = export.rows.len(),
        "Roster export written."
    );

    Ok(())
}

/// Flatten gateway members into exporter records, resolving role ids to
/// names in each member's own role order.
fn member_records(
    guild: &serenity::PartialGuild,
    members: &[serenity::Member],
) -> Vec<MemberRecord> {
    members
        .iter()
        .map(|member| {
            let role_names = member
                .roles
                .iter()
                .filter_map(|role_id| guild.roles.get(role_id))
                .map(|role| role.name.clone())
                .collect();

            MemberRecord {
                username: member.user.name.clone(),
                nickname: member.nick.clone(),
                role_names,
            }
        })
        .collect()
}
