use chrono::Utc;
use tracing::error;

use poise::serenity_prelude as serenity;
use poise::serenity_prelude::Mentionable;

use crate::CommandMeta;
use rollcall_core::{Context, Error};
use rollcall_roster::{RosterError, WEEKLY_ROLE, assign_weekly};
use rollcall_utils::discord_err::{DiscordFailure, classify};
use rollcall_utils::permissions::has_guild_permission;

pub const META: CommandMeta = CommandMeta {
    name: "weekly",
    desc: "Add a user to the weekly role for the next two weeks.",
    category: "membership",
    usage: "!weekly <user>",
};

/// Accent color applied when the managed role has to be created.
const WEEKLY_ROLE_COLOR: serenity::Colour = serenity::Colour::BLUE;

#[poise::command(prefix_command, slash_command, category = "Membership")]
pub async fn weekly(
    ctx: Context<'_>,
    #[description = "The user to add to the weekly role"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let Some(user) = user else {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    };

    add_to_weekly(ctx, user).await
}

/// Right-click variant of `weekly`.
#[poise::command(context_menu_command = "Add to Weekly", category = "Membership", ephemeral)]
pub async fn add_to_weekly_menu(
    ctx: Context<'_>,
    #[description = "The user to add to the weekly role"] user: serenity::User,
) -> Result<(), Error> {
    add_to_weekly(ctx, user).await
}

async fn add_to_weekly(ctx: Context<'_>, user: serenity::User) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command only works inside a server.").await?;
        return Ok(());
    };

    let bot_id = ctx.framework().bot_id;
    if !has_guild_permission(
        ctx.http(),
        guild_id,
        bot_id,
        serenity::Permissions::MANAGE_ROLES,
    )
    .await?
    {
        ctx.say("I don't have the Manage Roles permission in this server. Ask an admin to grant it.")
            .await?;
        return Ok(());
    }

    if !has_guild_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MANAGE_ROLES,
    )
    .await?
    {
        ctx.say("You need the Manage Roles permission to use this command.")
            .await?;
        return Ok(());
    }

    let role_id = match ensure_weekly_role(&ctx, guild_id).await {
        Ok(role_id) => role_id,
        Err(source) => {
            error!(?source, "weekly role lookup or creation failed");
            ctx.say(failure_message(&source)).await?;
            return Ok(());
        }
    };

    let member = guild_id.member(ctx.http(), user.id).await?;
    let assignment = match assign_weekly(member.display_name(), Utc::now().date_naive()) {
        Ok(assignment) => assignment,
        Err(RosterError::NicknameTooLong { limit }) => {
            ctx.say(format!(
                "That display name can't fit an expiry date within {limit} characters."
            ))
            .await?;
            return Ok(());
        }
    };

    let rename = serenity::EditMember::new().nickname(assignment.new_nickname.as_str());
    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, rename).await {
        error!(?source, "nickname write-back failed");
        ctx.say(failure_message(&source)).await?;
        return Ok(());
    }

    if let Err(source) = member.add_role(ctx.http(), role_id).await {
        error!(?source, "role grant failed");
        ctx.say(failure_message(&source)).await?;
        return Ok(());
    }

    ctx.say(format!(
        "✅ Added {} to the {} role until {}.",
        user.mention(),
        WEEKLY_ROLE,
        assignment.expiry_iso
    ))
    .await?;

    Ok(())
}

/// Find the weekly role, creating it with the standard accent if missing.
async fn ensure_weekly_role(
    ctx: &Context<'_>,
    guild_id: serenity::GuildId,
) -> Result<serenity::RoleId, serenity::Error> {
    let guild = guild_id.to_partial_guild(ctx.http()).await?;
    if let Some(role) = guild.roles.values().find(|role| role.name == WEEKLY_ROLE) {
        return Ok(role.id);
    }

    let builder = serenity::EditRole::new()
        .name(WEEKLY_ROLE)
        .colour(WEEKLY_ROLE_COLOR)
        .audit_log_reason("Created for weekly member tracking");
    let role = guild_id.create_role(ctx.http(), builder).await?;

    Ok(role.id)
}

fn failure_message(source: &serenity::Error) -> &'static str {
    match classify(source) {
        DiscordFailure::Forbidden => {
            "I'm not allowed to do that. Check the role hierarchy and my permissions."
        }
        DiscordFailure::Http => "Discord rejected the request. Try again in a moment.",
        DiscordFailure::Other => "Something unexpected went wrong while talking to Discord.",
    }
}
