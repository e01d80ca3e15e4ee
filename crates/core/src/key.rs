//! Remote key derivation

/// Derive the remote object key for a walked file
///
/// Removes the first occurrence of `from` from `local` and prepends `to`
/// verbatim. No separator is inserted and nothing is encoded: a `to` of
/// `"prod"` and a remainder of `"css/a.css"` join as `"prodcss/a.css"`,
/// so a prefix that should be a directory needs its own trailing slash.
pub fn remote_key(local: &str, from: &str, to: &str) -> String {
    format!("{to}{}", local.replacen(from, "", 1))
}
