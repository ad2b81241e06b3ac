pub mod init;
mod schema;

pub use schema::Profile;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Get the config directory path (~/.config/credit-sim/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("credit-sim"))
}

/// Get the default profile path (~/.config/credit-sim/profile.yaml)
pub fn get_profile_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("profile.yaml"))
}

/// Load a saved profile from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to a profile. If None, uses the default path
///   (~/.config/credit-sim/profile.yaml), and a missing default file yields an
///   empty profile so every field can come from flags instead.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given profile does not exist
/// - The profile cannot be read
/// - The YAML cannot be parsed
pub fn load_profile(path: Option<PathBuf>) -> Result<Profile> {
    let explicit = path.is_some();
    let profile_path = match path {
        Some(p) => p,
        None => get_profile_path()?,
    };

    if !profile_path.exists() {
        if explicit {
            anyhow::bail!("Profile not found at {}", profile_path.display());
        }
        debug!(path = %profile_path.display(), "no default profile, starting empty");
        return Ok(Profile::default());
    }

    let content = fs::read_to_string(&profile_path)
        .with_context(|| format!("Failed to read profile at {}", profile_path.display()))?;

    let profile: Profile = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse profile: invalid YAML in {}",
            profile_path.display()
        )
    })?;

    debug!(path = %profile_path.display(), name = ?profile.name, "loaded profile");
    Ok(profile)
}
