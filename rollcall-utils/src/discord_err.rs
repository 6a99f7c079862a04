use poise::serenity_prelude as serenity;

/// Broad failure classes for Discord HTTP operations. Command handlers
/// pattern-match on these to pick a user-facing message instead of
/// inspecting raw errors at every call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscordFailure {
    /// The API refused the request outright (403, or the missing
    /// permissions error code).
    Forbidden,
    /// Any other unsuccessful response or transport failure.
    Http,
    /// Everything else the client surfaces.
    Other,
}

/// Classify a serenity error into a coarse failure kind.
pub fn classify(source: &serenity::Error) -> DiscordFailure {
    match source {
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403 || response.error.code == 50013 =>
        {
            DiscordFailure::Forbidden
        }
        serenity::Error::Http(_) => DiscordFailure::Http,
        _ => DiscordFailure::Other,
    }
}
