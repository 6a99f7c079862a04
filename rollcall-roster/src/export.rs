use crate::nickname::parse_nickname;

/// Placeholder the export uses for an empty note or expiry field.
pub const EMPTY_FIELD: &str = "无";
/// Placeholder for a member with no roles beyond everyone.
pub const NO_ROLES: &str = "(none)";
/// Header line of the delimited export document.
pub const EXPORT_HEADER: &str = "username,nickname,roles,note,expiry";

const RULE_WIDTH: usize = 88;

/// Snapshot of one guild member as supplied by the platform. Read-only
/// input; `role_names` keeps the platform's insertion order.
#[derive(Clone, Debug)]
pub struct MemberRecord {
    pub username: String,
    pub nickname: Option<String>,
    pub role_names: Vec<String>,
}

/// One fully rendered export line: resolved display name, joined roles, the
/// raw nickname as the note, and the parsed expiry (or placeholders).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub username: String,
    pub nickname: String,
    pub roles: String,
    pub note: String,
    pub expiry: String,
}

/// Console table plus export rows for one roster run.
#[derive(Clone, Debug)]
pub struct RosterExport {
    pub table: String,
    pub rows: Vec<ExportRow>,
}

/// Render the roster for a member snapshot, preserving iteration order.
///
/// Produces the fixed-width console table and one export row per member.
/// Printing the table and writing the rows to disk belong to the caller.
pub fn export_roster(members: &[MemberRecord]) -> RosterExport {
    let mut table = String::new();
    table.push_str(&table_line("username", "nickname", "roles", "expiry"));
    table.push_str(&"-".repeat(RULE_WIDTH));
    table.push('\n');

    let mut rows = Vec::with_capacity(members.len());
    for member in members {
        let parsed = parse_nickname(member.nickname.as_deref());
        let roles = joined_roles(&member.role_names);
        let display = if parsed.base_name.is_empty() {
            member.username.clone()
        } else {
            parsed.base_name
        };
        let expiry = match parsed.expiry {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => EMPTY_FIELD.to_owned(),
        };

        table.push_str(&table_line(&member.username, &display, &roles, &expiry));
        rows.push(ExportRow {
            username: member.username.clone(),
            nickname: display,
            roles,
            note: member
                .nickname
                .clone()
                .unwrap_or_else(|| EMPTY_FIELD.to_owned()),
            expiry,
        });
    }

    RosterExport { table, rows }
}

/// Render the full export document: header plus one quoted line per row.
/// The caller overwrites the export file with this wholesale.
pub fn export_document(rows: &[ExportRow]) -> String {
    let mut document = String::from(EXPORT_HEADER);
    document.push('\n');
    for row in rows {
        document.push_str(&row.to_line());
        document.push('\n');
    }
    document
}

impl ExportRow {
    /// One comma-separated line with every field double-quoted. Embedded
    /// quotes are doubled so odd display names stay recoverable.
    pub fn to_line(&self) -> String {
        [
            &self.username,
            &self.nickname,
            &self.roles,
            &self.note,
            &self.expiry,
        ]
        .map(|field| quoted(field))
        .join(",")
    }
}

fn table_line(username: &str, nickname: &str, roles: &str, expiry: &str) -> String {
    format!("{username:<20} {nickname:<20} {roles:<32} {expiry:<12}\n")
}

fn joined_roles(role_names: &[String]) -> String {
    let visible: Vec<&str> = role_names
        .iter()
        .map(String::as_str)
        .filter(|name| !is_everyone_role(name))
        .collect();

    if visible.is_empty() {
        NO_ROLES.to_owned()
    } else {
        visible.join(", ")
    }
}

fn is_everyone_role(name: &str) -> bool {
    matches!(name, "@everyone" | "everyone")
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::{EXPORT_HEADER, ExportRow, MemberRecord, export_document, export_roster};

    fn member(username: &str, nickname: Option<&str>, roles: &[&str]) -> MemberRecord {
        MemberRecord {
            username: username.to_owned(),
            nickname: nickname.map(str::to_owned),
            role_names: roles.iter().map(|role| (*role).to_owned()).collect(),
        }
    }

    #[test]
    fn empty_roster_is_header_and_rule_only() {
        let export = export_roster(&[]);
        assert!(export.rows.is_empty());
        assert_eq!(export.table.lines().count(), 2);
    }

    #[test]
    fn dated_nickname_produces_a_full_row() {
        let export = export_roster(&[member(
            "alice",
            Some("Alice 3-15"),
            &["everyone", "weekly"],
        )]);

        assert_eq!(
            export.rows,
            vec![ExportRow {
                username: "alice".to_owned(),
                nickname: "Alice".to_owned(),
                roles: "weekly".to_owned(),
                note: "Alice 3-15".to_owned(),
                expiry: "2025-03-15".to_owned(),
            }]
        );
        assert_eq!(
            export.rows[0].to_line(),
            r#""alice","Alice","weekly","Alice 3-15","2025-03-15""#
        );
    }

    #[test]
    fn hyphenated_nickname_fails_soft_into_the_row() {
        let export = export_roster(&[member("bob", Some("Bob-the-builder"), &[])]);

        assert_eq!(
            export.rows[0].to_line(),
            r#""bob","Bob-the-builder","(none)","Bob-the-builder","无""#
        );
    }

    #[test]
    fn missing_nickname_falls_back_to_username() {
        let export = export_roster(&[member("carla", None, &["ops"])]);

        let row = &export.rows[0];
        assert_eq!(row.nickname, "carla");
        assert_eq!(row.note, "无");
        assert_eq!(row.expiry, "无");
        assert_eq!(row.roles, "ops");
    }

    #[test]
    fn everyone_role_is_hidden_and_order_is_kept() {
        let export = export_roster(&[member(
            "dave",
            None,
            &["@everyone", "weekly", "ops"],
        )]);
        assert_eq!(export.rows[0].roles, "weekly, ops");
    }

    #[test]
    fn rows_keep_member_iteration_order() {
        let export = export_roster(&[
            member("zoe", None, &[]),
            member("adam", None, &[]),
        ]);
        let usernames: Vec<&str> = export
            .rows
            .iter()
            .map(|row| row.username.as_str())
            .collect();
        assert_eq!(usernames, ["zoe", "adam"]);
    }

    #[test]
    fn table_lists_members_after_the_rule() {
        let export = export_roster(&[member("erin", Some("Erin 5-1"), &["weekly"])]);
        let lines: Vec<&str> = export.table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("username"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].starts_with("erin"));
        assert!(lines[2].contains("2025-05-01"));
    }

    #[test]
    fn document_has_header_then_rows() {
        let export = export_roster(&[member("alice", Some("Alice 3-15"), &["weekly"])]);
        let document = export_document(&export.rows);
        let lines: Vec<&str> = document.lines().collect();
        assert_eq!(lines[0], EXPORT_HEADER);
        assert_eq!(lines.len(), 2);
        assert!(document.ends_with('\n'));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let export = export_roster(&[member(r#"jo"ker"#, None, &[])]);
        assert!(export.rows[0].to_line().starts_with(r#""jo""ker""#));
    }
}
