use poise::serenity_prelude as serenity;

/// Resolve a member's effective guild permissions as the union of their
/// role permissions plus the everyone role.
///
/// The guild owner implicitly holds everything.
pub async fn member_permissions(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<serenity::Permissions> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild_id.member(http, user_id).await?;
    // The everyone role shares the guild's id and is absent from member.roles.
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    let mut resolved = serenity::Permissions::empty();
    for (role_id, role) in &guild.roles {
        if *role_id == everyone_role_id || member.roles.contains(role_id) {
            resolved |= role.permissions;
        }
    }

    Ok(resolved)
}

/// True when the member holds `required`, or ADMINISTRATOR, which grants
/// everything implicitly.
pub async fn has_guild_permission(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    required: serenity::Permissions,
) -> anyhow::Result<bool> {
    let permissions = member_permissions(http, guild_id, user_id).await?;

    Ok(permissions.contains(serenity::Permissions::ADMINISTRATOR) || permissions.contains(required))
}
