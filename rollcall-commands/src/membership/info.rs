use crate::CommandMeta;
use rollcall_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "info",
    desc: "Look up a member's nickname by username.",
    category: "membership",
    usage: "!info <username>",
};

const SEARCH_LIMIT: u64 = 10;

#[poise::command(prefix_command, slash_command, category = "Membership")]
pub async fn info(
    ctx: Context<'_>,
    #[description = "Username to look up"] username: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command only works inside a server.").await?;
        return Ok(());
    };

    let username = username.as_deref().map(str::trim).unwrap_or_default();
    if username.is_empty() {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    }

    // The search endpoint matches by prefix; pin it down to an exact
    // username afterwards.
    let candidates = guild_id
        .search_members(ctx.http(), username, Some(SEARCH_LIMIT))
        .await?;
    let found = candidates
        .iter()
        .find(|member| member.user.name == username);

    let reply = match found {
        Some(member) => match member.nick.as_deref() {
            Some(nick) => format!("{username} has the nickname `{nick}`."),
            None => format!("{username} has no nickname set."),
        },
        None => format!("No member named `{username}` was found."),
    };
    ctx.say(reply).await?;

    Ok(())
}
