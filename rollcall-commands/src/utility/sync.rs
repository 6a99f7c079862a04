use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use rollcall_core::{Context, Error};
use rollcall_utils::permissions::has_guild_permission;

pub const META: CommandMeta = CommandMeta {
    name: "sync",
    desc: "Re-register application commands with Discord.",
    category: "utility",
    usage: "!sync",
};

#[poise::command(prefix_command, category = "Utility")]
pub async fn sync(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command only works inside a server.").await?;
        return Ok(());
    };

    if !has_guild_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MANAGE_GUILD,
    )
    .await?
    {
        ctx.say("You need the Manage Server permission to re-sync commands.")
            .await?;
        return Ok(());
    }

    // Without a pinned guild the commands live in the global namespace.
    let global = ctx.data().config.guild_id.is_none();
    poise::builtins::register_application_commands(ctx, global).await?;
    ctx.say("Application commands synced.").await?;

    Ok(())
}
