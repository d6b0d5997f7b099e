//! Repository references and shorthand parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A GitHub-style repository reference, used to build raw-content URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub user: String,
    pub name: String,
}

/// Render a repository back to its `user/repo` shorthand.
pub fn get_shorthand_string(repository: &Repository) -> String {
    format!("{}/{}", repository.user, repository.name)
}

/// Parse a repository from a `user/repo` shorthand, an https GitHub URL,
/// or a git SSH remote. Returns `None` when nothing recognizable parses.
pub fn parse_repository(input: &str) -> Option<Repository> {
    let pattern = Regex::new(
        r"^(?:https?://github\.com/|git@github\.com:)?([\w.-]+)/([\w.-]+?)(?:\.git)?/?$",
    )
    .unwrap();

    let caps = pattern.captures(input.trim())?;
    Some(Repository {
        user: caps[1].to_string(),
        name: caps[2].to_string(),
    })
}
