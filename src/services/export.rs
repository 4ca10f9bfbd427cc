//! Output format emitters.
//!
//! Each emitter turns the parsed [`Directory`] into the text of one
//! output file. The emitters are pure; writing and removing the files
//! on disk is kept in separate functions so the CLI owns all I/O.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::models::Directory;
use crate::utils::{escape_csv, quote_csv, xml_escape};

/// Generic CSV of user extensions.
pub const USERS_FILE: &str = "hamvoip_users.csv";
/// Generic CSV of node and wide-area node extensions.
pub const OTHER_FILE: &str = "hamvoip_other.csv";
/// Fanvil phone contact-import CSV.
pub const FANVIL_FILE: &str = "hamvoip_fanvil.csv";
/// Cisco IP-phone directory XML.
pub const CISCO_FILE: &str = "hamvoip_cisco.xml";

/// Which output files to generate.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputSelection {
    pub users: bool,
    pub other: bool,
    pub fanvil: bool,
    pub cisco: bool,
}

impl OutputSelection {
    /// Selection with every format enabled.
    pub fn all() -> Self {
        Self {
            users: true,
            other: true,
            fanvil: true,
            cisco: true,
        }
    }

    /// True if at least one format is selected.
    pub fn any(&self) -> bool {
        self.users || self.other || self.fanvil || self.cisco
    }
}

/// Render the user extension CSV.
pub fn users_csv(directory: &Directory) -> String {
    let mut out = String::from("extension,callsign\n");
    for user in &directory.users {
        let _ = writeln!(out, "{},{}", user.extension, escape_csv(&user.callsign));
    }
    out
}

/// Render the node extension CSV. Wide-area nodes are appended after
/// the regular nodes, not interleaved.
pub fn other_csv(directory: &Directory) -> String {
    let mut out = String::from("Extension,Name\n");
    for node in directory.nodes.iter().chain(&directory.wide_nodes) {
        let _ = writeln!(out, "{},{}", node.extension, escape_csv(&node.name));
    }
    out
}

/// A row of the combined phone-directory listing: extension plus
/// display name. Users render as "CALLSIGN - Name".
fn combined_entries(directory: &Directory) -> Vec<(u64, String)> {
    let mut entries: Vec<(u64, String)> = Vec::with_capacity(directory.len());
    for user in &directory.users {
        entries.push((
            u64::from(user.extension),
            format!("{} - {}", user.callsign, user.name),
        ));
    }
    for node in directory.nodes.iter().chain(&directory.wide_nodes) {
        entries.push((node.extension, node.name.clone()));
    }
    entries
}

/// Render the Fanvil contact-import CSV: the combined listing, sorted
/// by extension across categories, every field quoted.
pub fn fanvil_csv(directory: &Directory) -> String {
    let mut entries = combined_entries(directory);
    entries.sort_by_key(|(extension, _)| *extension);

    let mut out = String::from("\"name\",\"work\",\"mobile\",\"other\",\"ring\",\"groups\"\n");
    for (extension, name) in entries {
        let _ = writeln!(
            out,
            "{},\"{}\",\"\",\"\",\"Default\",\"\"",
            quote_csv(&name),
            extension
        );
    }
    out
}

/// Render the Cisco IP-phone directory XML: the combined listing in
/// category order (users, nodes, wide-area nodes).
pub fn cisco_xml(directory: &Directory) -> String {
    let mut out = String::from("<CiscoIPPhoneDirectory>\n");
    out.push_str("<Title>Hamvoip Directory</Title>\n");
    out.push_str("<Prompt>Please select number to dial...</Prompt>\n");
    for (extension, name) in combined_entries(directory) {
        out.push_str("<DirectoryEntry>\n");
        let _ = writeln!(out, "<Name>{}</Name>", xml_escape(&name));
        let _ = writeln!(out, "<Telephone>{}</Telephone>", extension);
        out.push_str("</DirectoryEntry>\n");
    }
    out.push_str("</CiscoIPPhoneDirectory>\n");
    out
}

/// Write the selected output files under `out_dir`.
///
/// Returns the paths written, in a fixed order.
pub fn write_outputs(
    directory: &Directory,
    selection: &OutputSelection,
    out_dir: &Path,
) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    if selection.users {
        let path = out_dir.join(USERS_FILE);
        std::fs::write(&path, users_csv(directory))?;
        written.push(path);
    }
    if selection.other {
        let path = out_dir.join(OTHER_FILE);
        std::fs::write(&path, other_csv(directory))?;
        written.push(path);
    }
    if selection.fanvil {
        let path = out_dir.join(FANVIL_FILE);
        std::fs::write(&path, fanvil_csv(directory))?;
        written.push(path);
    }
    if selection.cisco {
        let path = out_dir.join(CISCO_FILE);
        std::fs::write(&path, cisco_xml(directory))?;
        written.push(path);
    }

    tracing::info!("wrote {} output file(s) to {}", written.len(), out_dir.display());
    Ok(written)
}

/// Remove any generated output files under `out_dir`.
///
/// Returns (removed, missing) path lists.
pub fn remove_outputs(out_dir: &Path) -> std::io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut removed = Vec::new();
    let mut missing = Vec::new();

    for filename in [USERS_FILE, OTHER_FILE, FANVIL_FILE, CISCO_FILE] {
        let path = out_dir.join(filename);
        if path.exists() {
            std::fs::remove_file(&path)?;
            removed.push(path);
        } else {
            missing.push(path);
        }
    }

    Ok((removed, missing))
}
