/// Coarse failure kinds for Discord HTTP operations.
pub mod discord_err;
/// Guild permission resolution helpers.
pub mod permissions;

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';

/// Embed accent used for error replies.
pub const ERROR_EMBED_COLOR: u32 = 0xED_42_45;
