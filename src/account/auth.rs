use super::session::{SessionFile, SessionState, SessionUser};
use super::{hash_password, verify_password};
use crate::config::AppConfig;
use crate::core::Result;
use tracing::{info, warn};

/// Single-credential login gate.
///
/// Exactly one email/password pair is recognised. A successful login sets
/// the session flag, which is written to the configured session file so it
/// survives a restart.
pub struct Authenticator {
    email: String,
    password_hash: String,
    session: SessionState,
    file: Option<SessionFile>,
}

impl Authenticator {
    /// Starts logged out, ignoring any persisted session
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            email: config.demo_email.clone(),
            password_hash: hash_password(&config.demo_password, config.password_hash_cost)?,
            session: SessionState::default(),
            file: config.session_path.as_ref().map(SessionFile::new),
        })
    }

    /// Like [`new`](Self::new), then picks up the persisted session if any
    pub fn restore(config: &AppConfig) -> Result<Self> {
        let mut auth = Self::new(config)?;
        if let Some(file) = &auth.file {
            auth.session = file.load()?;
        }
        Ok(auth)
    }

    /// Returns whether the pair matched; the session is only touched on a match
    pub fn login(&mut self, email: &str, password: &str) -> Result<bool> {
        if email != self.email || !verify_password(password, &self.password_hash) {
            warn!(email, "login rejected");
            return Ok(false);
        }

        self.session = SessionState {
            user: Some(SessionUser {
                id: "demo".to_string(),
                email: self.email.clone(),
            }),
            is_authenticated: true,
        };
        self.persist()?;
        info!(email, "logged in");
        Ok(true)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session = SessionState::default();
        self.persist()?;
        info!("logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.user.as_ref()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn persist(&self) -> Result<()> {
        match &self.file {
            Some(file) => file.save(&self.session),
            None => Ok(()),
        }
    }
}
