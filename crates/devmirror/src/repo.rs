use crate::prelude::*;
use tokio::process::Command;

pub use devmirror_core::repo::{get_shorthand_string, parse_repository, Repository};

/// Resolve the branch to use in generated URLs: explicit value first,
/// then the current git branch. `None` means the caller has to ask.
pub async fn get_branch(branch: Option<String>) -> Option<String> {
    if let Some(branch) = branch {
        let branch = branch.trim().to_string();
        if !branch.is_empty() {
            return Some(branch);
        }
    }

    let output = Command::new("git")
        .args(["branch", "--show-current"])
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!name.is_empty()).then_some(name)
}

/// True when a usable git binary is on the path.
pub async fn has_git_installed() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Initialize a git repository in the current directory.
pub async fn init_git_repository() -> Result<()> {
    let status = Command::new("git")
        .arg("init")
        .status()
        .await
        .wrap_err("Failed to run git init")?;

    if status.success() {
        Ok(())
    } else {
        Err(eyre!("git init exited with {}", status))
    }
}
