//! Page rendering
//!
//! Turns a `Page` decision into HTML. The rendered document names the view
//! it shows in `data-view` (and the room in `data-room`), so a render of a
//! different page than the one requested is observable by clients.

use chat_common::AppError;
use chat_core::Presence;
use chat_service::{paths, Page};
use chrono::SecondsFormat;
use minijinja::{context, Environment};

/// Renders pages to HTML
pub trait PageRenderer: Send + Sync {
    /// Render `page`
    ///
    /// # Errors
    /// Returns `AppError::Render` if the page has no template or rendering fails
    fn render(&self, page: &Page) -> Result<String, AppError>;
}

/// Views known to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    Chat,
    Room,
    Login,
    Logon,
}

impl View {
    /// View for a page path
    pub fn for_page(page: &Page) -> Option<Self> {
        match page.path.as_str() {
            paths::INDEX => Some(Self::Index),
            paths::CHAT => Some(Self::Chat),
            paths::LOGIN => Some(Self::Login),
            paths::LOGON => Some(Self::Logon),
            _ => page.room().map(|_| Self::Room),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Chat => "chat",
            Self::Room => "room",
            Self::Login => "login",
            Self::Logon => "logon",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Chat => "chat.html",
            Self::Room => "room.html",
            Self::Login => "login.html",
            Self::Logon => "logon.html",
        }
    }
}

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("chat.html", include_str!("../../templates/chat.html")),
    ("room.html", include_str!("../../templates/room.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("logon.html", include_str!("../../templates/logon.html")),
];

/// `PageRenderer` backed by minijinja templates compiled into the binary
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Load the built-in templates
    ///
    /// # Errors
    /// Returns `AppError::Render` if a template fails to parse
    pub fn new(app_name: impl Into<String>) -> Result<Self, AppError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source).map_err(render_error)?;
        }
        env.add_global("app_name", app_name.into());

        Ok(Self { env })
    }
}

impl std::fmt::Debug for MiniJinjaRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniJinjaRenderer")
            .field("templates", &TEMPLATES.len())
            .finish()
    }
}

impl PageRenderer for MiniJinjaRenderer {
    fn render(&self, page: &Page) -> Result<String, AppError> {
        let view = View::for_page(page)
            .ok_or_else(|| AppError::Render(format!("no template for {}", page.path)))?;

        let (online_state, last_seen) = match page.data.map(|data| data.online) {
            None => (None, None),
            Some(Presence::Online) => (Some("online"), None),
            Some(Presence::LastSeen(at)) => (
                Some("last_seen"),
                Some(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ),
            Some(Presence::Unknown) => (Some("unknown"), None),
        };

        self.env
            .get_template(view.template())
            .and_then(|template| {
                template.render(context! {
                    view => view.name(),
                    room => page.room(),
                    online_state => online_state,
                    last_seen => last_seen,
                })
            })
            .map_err(render_error)
    }
}

fn render_error(err: minijinja::Error) -> AppError {
    AppError::Render(err.to_string())
}
