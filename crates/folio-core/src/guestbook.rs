//! Guestbook data model.
//!
//! The realtime backend delivers the whole ordered collection on every
//! change; [`GuestbookFeed`] keeps the latest snapshot and tracks which ids
//! it has already seen. Draft validation lives here so both frontends share
//! the same rules.

use fnv::FnvHashSet;
use thiserror::Error;

/// Signed-in author, as reported by the auth service.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    pub uid: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

/// One guestbook document. `created_at_ms` stays `None` until the server
/// assigns the timestamp and echoes it back through the snapshot listener.
#[derive(Clone, Debug, PartialEq)]
pub struct GuestbookEntry {
    pub id: String,
    pub author_name: String,
    pub author_uid: String,
    pub photo_url: Option<String>,
    pub text: String,
    pub created_at_ms: Option<f64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuestbookError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("not signed in")]
    NotSignedIn,
}

/// Check a draft message against the write rules and return the trimmed
/// text that should actually be sent.
pub fn validate_draft(text: &str, identity: Option<&Identity>) -> Result<String, GuestbookError> {
    if identity.is_none() {
        return Err(GuestbookError::NotSignedIn);
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GuestbookError::EmptyMessage);
    }
    Ok(trimmed.to_owned())
}

/// Latest snapshot of the collection. Full-list semantics: every callback
/// replaces the previous list wholesale.
#[derive(Default)]
pub struct GuestbookFeed {
    entries: Vec<GuestbookEntry>,
    seen: FnvHashSet<String>,
    loaded: bool,
}

impl GuestbookFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current list with a fresh snapshot. Returns how many
    /// entries were not in any previous snapshot.
    pub fn apply_snapshot(&mut self, entries: Vec<GuestbookEntry>) -> usize {
        let mut fresh = 0;
        for entry in &entries {
            if self.seen.insert(entry.id.clone()) {
                fresh += 1;
            }
        }
        if self.loaded && fresh > 0 {
            log::debug!("guestbook: {} new message(s)", fresh);
        }
        self.entries = entries;
        self.loaded = true;
        fresh
    }

    pub fn entries(&self) -> &[GuestbookEntry] {
        &self.entries
    }

    /// False until the first snapshot arrives, regardless of its size.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Coarse relative age for display next to a message.
pub fn format_age(created_at_ms: Option<f64>, now_ms: f64) -> String {
    let Some(at) = created_at_ms else {
        return "just now".to_owned();
    };
    let secs = ((now_ms - at) / 1000.0).max(0.0);
    if secs < 60.0 {
        "just now".to_owned()
    } else if secs < 3600.0 {
        format!("{}m ago", (secs / 60.0) as u64)
    } else if secs < 86_400.0 {
        format!("{}h ago", (secs / 3600.0) as u64)
    } else {
        format!("{}d ago", (secs / 86_400.0) as u64)
    }
}
