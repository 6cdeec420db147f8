//! Notification content value object

use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::ActionParseError;
use crate::domain::notification::{ExpireTimeout, Urgency};

/// Identifier of the implicit action attached when the caller supplies none
pub const DEFAULT_ACTION: &str = "default";

/// An action button on a notification: a machine identifier plus the
/// label the server renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAction {
    pub id: String,
    pub label: String,
}

impl NotificationAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl FromStr for NotificationAction {
    type Err = ActionParseError;

    /// Parse an `id:label` spec. A bare label uses the label as its id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ActionParseError { input: s.to_string() });
        }

        match input.split_once(':') {
            Some((id, label)) => {
                let (id, label) = (id.trim(), label.trim());
                if id.is_empty() || label.is_empty() {
                    return Err(ActionParseError { input: s.to_string() });
                }
                Ok(Self::new(id, label))
            }
            None => Ok(Self::new(input, input)),
        }
    }
}

/// Everything needed to display one notification.
/// Immutable once built; the backend decides how to map it onto the server.
#[derive(Debug, Clone, Default)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    /// Freedesktop icon name or path
    pub icon: Option<String>,
    /// Path to an image shown in the notification body
    pub image: Option<PathBuf>,
    /// Coalescing tag: shows with the same tag replace each other
    pub tag: Option<String>,
    pub urgency: Urgency,
    pub timeout: ExpireTimeout,
    /// Ask the server not to play a sound
    pub silent: bool,
    pub actions: Vec<NotificationAction>,
}

impl NotificationContent {
    /// Create content with just a title and body
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Server-side replace id derived from the tag, if any.
    ///
    /// Repeated shows with the same tag reuse the same id, so the server
    /// replaces the earlier notification instead of stacking a new one.
    pub fn replace_id(&self) -> Option<u32> {
        self.tag.as_deref().map(tag_id)
    }
}

/// Fold a tag into a stable non-zero 32-bit id (FNV-1a).
/// Zero is reserved on the bus to mean "allocate a new notification".
fn tag_id(tag: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in tag.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    if hash == 0 {
        1
    } else {
        hash
    }
}
