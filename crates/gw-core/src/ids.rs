//! Entity ID prefixes and generation.
//!
//! IDs are `{prefix}-{8 lowercase hex chars}`, drawn from the OS random source.

use sha2::{Digest, Sha256};

use crate::errors::CoreError;

pub const PREFIX_SESSION: &str = "ses";

/// Generate a fresh ID with the given prefix.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;
    Ok(format!("{prefix}-{}", hex::encode(bytes)))
}

/// Lowercase, hyphen-separated form of a skill name, used inside IDs.
///
/// `"State Management (Redux/Zustand)"` becomes `"state-management-redux-zustand"`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Skill component of a content ID: the slug followed by a short hash of the
/// trimmed, lowercased name.
///
/// Slugs alone collide (`"C++"`, `"C#"` and `"C"` all slug to `"c"`), the
/// hash keeps distinct skills apart. Names with no ASCII alphanumerics get
/// the hash only.
#[must_use]
pub fn skill_token(name: &str) -> String {
    let normalized = name.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    let tag = hex::encode(&digest[..4]);
    let slug = slugify(name);
    if slug.is_empty() {
        tag
    } else {
        format!("{slug}-{tag}")
    }
}
