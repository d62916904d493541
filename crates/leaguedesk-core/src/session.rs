use std::sync::Arc;

use leaguedesk_storage::Storage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::routes::Route;

pub const AUTH_KEY: &str = "football-auth";
pub const USER_KEY: &str = "football-user";
pub const REDIRECT_KEY: &str = "football-redirect";

// Demo credentials; not a security boundary
pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "12345";

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Use demo/12345 to login.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Logged in; continue to this route
    Redirect(Route),
    /// Wrong credentials; message for the login form
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect { to: Route, from: Route },
}

/// Session state plus the rules for which routes need it
pub struct AuthGate {
    storage: Arc<dyn Storage>,
    session: Option<Session>,
}

impl AuthGate {
    /// Restore the persisted session, if any
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let session = Self::restore(storage.as_ref());
        debug!("Session restored: {}", session.is_some());
        Self { storage, session }
    }

    fn restore(storage: &dyn Storage) -> Option<Session> {
        let flag = storage.get_item(AUTH_KEY).ok().flatten()?;
        if flag != "true" {
            return None;
        }

        let raw = storage.get_item(USER_KEY).ok().flatten()?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Ignoring unparsable session: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Check credentials. Success persists the session and hands back where to go next.
    pub fn login(&mut self, username: &str, password: &str) -> crate::Result<LoginOutcome> {
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            info!("Rejected login for {}", username);
            return Ok(LoginOutcome::Rejected(INVALID_CREDENTIALS.to_string()));
        }

        let session = Session {
            username: username.to_string(),
        };
        self.storage.set_item(AUTH_KEY, "true")?;
        self.storage
            .set_item(USER_KEY, &serde_json::to_string(&session)?)?;
        self.session = Some(session);
        info!("Logged in as {}", username);

        let target = self.take_pending()?.unwrap_or(Route::Home);
        Ok(LoginOutcome::Redirect(target))
    }

    pub fn logout(&mut self) -> crate::Result<()> {
        self.session = None;
        self.storage.remove_item(AUTH_KEY)?;
        self.storage.remove_item(USER_KEY)?;
        info!("Logged out");
        Ok(())
    }

    /// Admit `route`, or remember it and send the user to login
    pub fn guard(&self, route: Route) -> crate::Result<Access> {
        if route.is_public() || self.is_authenticated() {
            return Ok(Access::Granted);
        }

        self.storage.set_item(REDIRECT_KEY, &route.to_string())?;
        debug!("Redirecting {} to login", route);
        Ok(Access::Redirect {
            to: Route::Login,
            from: route,
        })
    }

    /// Route remembered by the last refused `guard`, cleared on read
    fn take_pending(&self) -> crate::Result<Option<Route>> {
        let Some(raw) = self.storage.get_item(REDIRECT_KEY)? else {
            return Ok(None);
        };
        self.storage.remove_item(REDIRECT_KEY)?;

        match raw.parse::<Route>() {
            Ok(Route::Login) => Ok(None),
            Ok(route) => Ok(Some(route)),
            Err(e) => {
                warn!("Dropping bad pending route {}: {}", raw, e);
                Ok(None)
            }
        }
    }
}
