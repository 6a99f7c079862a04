/// Weekly-role assignment: expiry computation and nickname composition.
pub mod expiry;
/// Roster table and delimited-export rendering.
pub mod export;
/// Trailing-date-token nickname parsing.
pub mod nickname;

pub use expiry::{RoleAssignment, RosterError, WEEKLY_ROLE, assign_weekly};
pub use export::{ExportRow, MemberRecord, RosterExport, export_document, export_roster};
pub use nickname::{ParsedNickname, parse_nickname};
