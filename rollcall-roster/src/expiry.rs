use chrono::{Datelike, Days, NaiveDate};

/// Name of the role granted by the weekly assignment workflow.
pub const WEEKLY_ROLE: &str = "weekly";

/// Discord caps guild nicknames at 32 characters.
pub const MAX_NICKNAME_CHARS: usize = 32;

const WEEKLY_PERIOD_DAYS: u64 = 14;

/// Everything a caller needs to apply a weekly assignment: the composed
/// nickname, the canonical expiry date, and the role to grant. Applying it
/// (nickname write-back, role grant) is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleAssignment {
    pub new_nickname: String,
    pub expiry_iso: String,
    pub role_name: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("nickname cannot fit an expiry suffix within {limit} characters")]
    NicknameTooLong { limit: usize },
}

/// Compute the weekly-role assignment for a member: expiry is a fixed two
/// weeks from `today`, embedded in the nickname as a short `m-d` suffix
/// without leading zeros.
pub fn assign_weekly(display_name: &str, today: NaiveDate) -> Result<RoleAssignment, RosterError> {
    let expiry = today
        .checked_add_days(Days::new(WEEKLY_PERIOD_DAYS))
        .unwrap_or(today);

    let suffix = format!("{}-{}", expiry.month(), expiry.day());
    let new_nickname = compose_nickname(display_name, &suffix)?;

    Ok(RoleAssignment {
        new_nickname,
        expiry_iso: expiry.format("%Y-%m-%d").to_string(),
        role_name: WEEKLY_ROLE,
    })
}

/// Append the expiry suffix, truncating from the base-name side when the
/// platform limit would be exceeded. The suffix itself is never dropped.
fn compose_nickname(base: &str, suffix: &str) -> Result<String, RosterError> {
    let composed = format!("{base} {suffix}");
    if composed.chars().count() <= MAX_NICKNAME_CHARS {
        return Ok(composed);
    }

    let reserved = suffix.chars().count() + 1;
    if reserved >= MAX_NICKNAME_CHARS {
        return Err(RosterError::NicknameTooLong {
            limit: MAX_NICKNAME_CHARS,
        });
    }

    let keep = MAX_NICKNAME_CHARS - reserved;
    let truncated: String = base.chars().take(keep).collect();
    Ok(format!("{} {}", truncated.trim_end(), suffix))
}
