//! Extension extraction from directory page text.
//!
//! The published PDF is a loosely formatted table; after text extraction
//! all that is left is a newline-joined blob. Two independent pattern
//! passes pull the entries out of it:
//!
//! - user extensions: `3xx - CALLSIGN - Name`, where the name part never
//!   contains a digit
//! - node extensions: `NNNN... - Name`, where the name runs until the
//!   next node number, the end of the line, or the end of input
//!
//! The passes run over the same text without coordinating: a 3-digit
//! window inside a longer number can satisfy the user pattern, and such
//! a fragment then shows up in both categories.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Directory, NodeExtension, UserExtension};

/// User extension entries: 3-digit number in the 3xx block, a callsign
/// token, and a digit-free name terminated by the end of the line.
static USER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(3\d{2}) - ([A-Z0-9]+) - ([^0-9\n]+)").unwrap());

/// Start of a node entry: a 4-or-more-digit number followed by " - ".
static NODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4,}) - ").unwrap());

/// Where a node name ends: the next 4-or-more-digit run followed by " -".
/// Entries frequently share a physical line in the extracted text, so the
/// name must not swallow the number that starts the next entry.
static NODE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4,} -").unwrap());

/// A user entry as matched, before normalization.
#[derive(Debug, Clone, Copy)]
struct RawUser<'a> {
    extension: &'a str,
    callsign: &'a str,
    name: &'a str,
}

/// A node entry as matched, before normalization.
#[derive(Debug, Clone, Copy)]
struct RawNode<'a> {
    extension: &'a str,
    name: &'a str,
}

/// Parse the combined page text of the directory document.
///
/// This is the whole pipeline core: scan both patterns, then normalize.
/// Pure and total - empty or garbage input yields an empty [`Directory`],
/// never an error.
pub fn parse_directory(text: &str) -> Directory {
    let users = scan_users(text);
    let nodes = scan_nodes(text);
    normalize(users, nodes)
}

/// First pass: collect user extension entries.
fn scan_users(text: &str) -> Vec<RawUser<'_>> {
    USER_PATTERN
        .captures_iter(text)
        .map(|caps| RawUser {
            extension: caps.get(1).map_or("", |m| m.as_str()),
            callsign: caps.get(2).map_or("", |m| m.as_str()),
            name: caps.get(3).map_or("", |m| m.as_str()),
        })
        .collect()
}

/// Second pass: collect node extension entries of any width.
///
/// The name capture is bounded: it ends at the earliest of the next node
/// boundary, the next newline, or the end of input, and scanning resumes
/// right there so a name never consumes the start of the following
/// entry. A name can legitimately be empty when two entries abut.
fn scan_nodes(text: &str) -> Vec<RawNode<'_>> {
    let mut entries = Vec::new();
    let mut pos = 0;

    while let Some(caps) = NODE_PATTERN.captures(&text[pos..]) {
        let matched = caps.get(0).unwrap();
        let extension = caps.get(1).map_or("", |m| m.as_str());

        let name_start = pos + matched.end();
        let rest = &text[name_start..];

        let mut name_end = rest.len();
        if let Some(newline) = rest.find('\n') {
            name_end = name_end.min(newline);
        }
        if let Some(boundary) = NODE_BOUNDARY.find(rest) {
            name_end = name_end.min(boundary.start());
        }

        entries.push(RawNode {
            extension,
            name: &rest[..name_end],
        });
        pos = name_start + name_end;
    }

    entries
}

/// Normalize raw matches into the canonical directory shape.
///
/// Trims whitespace, uppercases callsigns, parses extension numbers
/// (leading zeros are not preserved), splits nodes from wide nodes by
/// the digit count of the parsed number, and sorts each collection
/// ascending by extension. The sort is stable: duplicate extensions
/// keep their order of appearance in the document.
fn normalize(raw_users: Vec<RawUser<'_>>, raw_nodes: Vec<RawNode<'_>>) -> Directory {
    let mut directory = Directory::default();

    for raw in raw_users {
        // The pattern only matches three digits, so this cannot fail.
        let Ok(extension) = raw.extension.parse::<u32>() else {
            continue;
        };
        directory.users.push(UserExtension {
            extension,
            callsign: raw.callsign.trim().to_uppercase(),
            name: raw.name.trim().to_string(),
        });
    }

    for raw in raw_nodes {
        let extension = match raw.extension.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                tracing::debug!("skipping oversized extension number: {}", raw.extension);
                continue;
            }
        };
        let entry = NodeExtension {
            extension,
            name: raw.name.trim().to_string(),
        };
        // Classified by the digit count of the parsed value, so a
        // zero-padded token counts only its significant digits.
        if (1000..=9999).contains(&extension) {
            directory.nodes.push(entry);
        } else {
            directory.wide_nodes.push(entry);
        }
    }

    directory.users.sort_by_key(|u| u.extension);
    directory.nodes.sort_by_key(|n| n.extension);
    directory.wide_nodes.sort_by_key(|n| n.extension);

    directory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_entry() {
        let dir = parse_directory("301 - AB1CD - Relay Station\n");
        assert_eq!(dir.users.len(), 1);
        assert_eq!(dir.users[0].extension, 301);
        assert_eq!(dir.users[0].callsign, "AB1CD");
        assert_eq!(dir.users[0].name, "Relay Station");
        assert!(dir.nodes.is_empty());
        assert!(dir.wide_nodes.is_empty());
    }

    #[test]
    fn parses_node_entries_in_order() {
        let dir = parse_directory("4500 - North Node\n4501 - South Node\n");
        assert_eq!(dir.nodes.len(), 2);
        assert_eq!(dir.nodes[0].extension, 4500);
        assert_eq!(dir.nodes[0].name, "North Node");
        assert_eq!(dir.nodes[1].extension, 4501);
        assert_eq!(dir.nodes[1].name, "South Node");
        assert!(dir.users.is_empty());
    }

    #[test]
    fn parses_wide_node_entry() {
        let dir = parse_directory("10023 - Remote Bridge\n");
        assert!(dir.nodes.is_empty());
        assert_eq!(dir.wide_nodes.len(), 1);
        assert_eq!(dir.wide_nodes[0].extension, 10023);
        assert_eq!(dir.wide_nodes[0].name, "Remote Bridge");
    }

    #[test]
    fn sorts_nodes_ascending() {
        let dir = parse_directory("4502 - B\n4499 - A\n");
        assert_eq!(dir.nodes[0].extension, 4499);
        assert_eq!(dir.nodes[0].name, "A");
        assert_eq!(dir.nodes[1].extension, 4502);
        assert_eq!(dir.nodes[1].name, "B");
    }

    #[test]
    fn empty_input_yields_empty_directory() {
        let dir = parse_directory("");
        assert!(dir.is_empty());
    }

    #[test]
    fn multiple_entries_on_one_line() {
        // Extracted text often packs several table cells onto one line.
        let dir = parse_directory("4500 - North Node 4501 - South Node 10023 - Remote Bridge\n");
        assert_eq!(dir.nodes.len(), 2);
        assert_eq!(dir.nodes[0].name, "North Node");
        assert_eq!(dir.nodes[1].name, "South Node");
        assert_eq!(dir.wide_nodes.len(), 1);
        assert_eq!(dir.wide_nodes[0].name, "Remote Bridge");
    }

    #[test]
    fn node_name_stops_at_end_of_line() {
        let dir = parse_directory("4500 - North Node\nstray text");
        assert_eq!(dir.nodes.len(), 1);
        assert_eq!(dir.nodes[0].name, "North Node");
    }

    #[test]
    fn truncates_name_at_embedded_node_run() {
        // A name containing a 4+ digit run followed by " -" is cut short
        // there. Known limitation of the boundary rule, kept on purpose.
        let dir = parse_directory("4500 - Hub 12345 - East Wing\n");
        assert_eq!(dir.nodes.len(), 1);
        assert_eq!(dir.nodes[0].extension, 4500);
        assert_eq!(dir.nodes[0].name, "Hub");
        assert_eq!(dir.wide_nodes.len(), 1);
        assert_eq!(dir.wide_nodes[0].extension, 12345);
        assert_eq!(dir.wide_nodes[0].name, "East Wing");
    }

    #[test]
    fn small_embedded_numbers_do_not_truncate() {
        let dir = parse_directory("4500 - Node - 5 channels\n");
        assert_eq!(dir.nodes.len(), 1);
        assert_eq!(dir.nodes[0].name, "Node - 5 channels");
    }

    #[test]
    fn abutting_entries_yield_empty_name() {
        let dir = parse_directory("12345 - 6789 - East\n");
        assert_eq!(dir.wide_nodes.len(), 1);
        assert_eq!(dir.wide_nodes[0].extension, 12345);
        assert_eq!(dir.wide_nodes[0].name, "");
        assert_eq!(dir.nodes.len(), 1);
        assert_eq!(dir.nodes[0].extension, 6789);
        assert_eq!(dir.nodes[0].name, "East");
    }

    #[test]
    fn user_window_inside_longer_number_matches_both_passes() {
        // "1303" contains the user-pattern window "303"; both passes
        // claim their piece. Accepted overlap, not guarded against.
        let dir = parse_directory("1303 - PA0XYZ - Repeater West\n");
        assert_eq!(dir.users.len(), 1);
        assert_eq!(dir.users[0].extension, 303);
        assert_eq!(dir.users[0].callsign, "PA0XYZ");
        assert_eq!(dir.nodes.len(), 1);
        assert_eq!(dir.nodes[0].extension, 1303);
    }

    #[test]
    fn user_name_stops_at_first_digit() {
        // The name part of the user pattern cannot contain digits, so
        // the capture ends right before "73".
        let dir = parse_directory("305 - PD1AAA - Club 73\n");
        assert_eq!(dir.users.len(), 1);
        assert_eq!(dir.users[0].name, "Club");
        assert!(dir.nodes.is_empty());
    }

    #[test]
    fn zero_padded_number_classified_by_significant_digits() {
        let dir = parse_directory("0042 - Padded\n04500 - Also Padded\n");
        // 0042 parses to 42: not four digits, so it lands with the wide
        // nodes; 04500 parses to 4500 and is a regular node.
        assert_eq!(dir.nodes.len(), 1);
        assert_eq!(dir.nodes[0].extension, 4500);
        assert_eq!(dir.wide_nodes.len(), 1);
        assert_eq!(dir.wide_nodes[0].extension, 42);
    }

    #[test]
    fn duplicate_extensions_keep_input_order() {
        let dir = parse_directory("4500 - First\n4499 - Middle\n4500 - Second\n");
        assert_eq!(dir.nodes.len(), 3);
        assert_eq!(dir.nodes[0].name, "Middle");
        assert_eq!(dir.nodes[1].name, "First");
        assert_eq!(dir.nodes[2].name, "Second");
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "302 - PE2BBB - Two\n301 - PA1AAA - One\n4500 - Node\n10023 - Bridge\n";
        assert_eq!(parse_directory(text), parse_directory(text));
    }

    #[test]
    fn sorted_output_is_a_fixed_point() {
        let text = "4502 - B\n4499 - A\n303 - PA0C - C\n301 - PA0A - A\n";
        let dir = parse_directory(text);
        let mut resorted = dir.clone();
        resorted.users.sort_by_key(|u| u.extension);
        resorted.nodes.sort_by_key(|n| n.extension);
        resorted.wide_nodes.sort_by_key(|n| n.extension);
        assert_eq!(dir, resorted);
    }

    #[test]
    fn callsign_stays_uppercase_and_trimmed() {
        let dir = parse_directory("310 - PD9ZZZ - Packet Gateway  \n");
        assert_eq!(dir.users[0].callsign, "PD9ZZZ");
        assert!(dir.users[0]
            .callsign
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(dir.users[0].name, "Packet Gateway");
    }

    #[test]
    fn user_extensions_stay_in_3xx_block() {
        let text = "301 - PA1AAA - One\n399 - PA9ZZZ - Last\n4500 - Node\n";
        let dir = parse_directory(text);
        assert!(dir.users.iter().all(|u| (300..=399).contains(&u.extension)));
    }

    #[test]
    fn oversized_number_is_skipped() {
        // 21 digits does not fit u64; the entry is dropped, the rest of
        // the text still parses.
        let dir = parse_directory("123456789012345678901 - Too Big\n4500 - Fine\n");
        assert_eq!(dir.nodes.len(), 1);
        assert_eq!(dir.nodes[0].extension, 4500);
        assert!(dir.wide_nodes.is_empty());
    }
}
