//! Page render decisions

use chat_core::Presence;
use serde::Serialize;

/// Page paths known to the renderer
pub mod paths {
    pub const INDEX: &str = "/";
    pub const CHAT: &str = "/chat";
    pub const LOGIN: &str = "/login";
    pub const LOGON: &str = "/logon";

    /// `/chat/<room>`
    pub fn chat_room(room: impl std::fmt::Display) -> String {
        format!("{CHAT}/{room}")
    }
}

/// Data passed to a page alongside its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageData {
    pub online: Presence,
}

/// "Render page `path` with optional `data`".
///
/// Redirects are expressed by rendering a different path than the one that
/// was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PageData>,
}

impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: None,
        }
    }

    pub fn with_data(path: impl Into<String>, data: PageData) -> Self {
        Self {
            path: path.into(),
            data: Some(data),
        }
    }

    /// Room segment for `/chat/<room>` pages
    pub fn room(&self) -> Option<&str> {
        self.path
            .strip_prefix(paths::CHAT)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|room| !room.is_empty())
    }
}
