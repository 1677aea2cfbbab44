//! Session store

use std::{fmt, sync::Arc};

use bistro::{
    routes::{AccessDecision, Route},
    session::{Session, User},
};
use tracing::{info, instrument, warn};

use crate::auth::{AuthService, AuthenticationError, Credentials, Registration, RegistrationError};

/// Owns the current [`Session`] and drives it through the auth backend.
///
/// Login and registration take `&mut self`, so at most one attempt is in
/// flight per store. The session is only written once the backend answers;
/// dropping a pending call leaves it untouched.
pub struct SessionStore {
    auth: Arc<dyn AuthService>,
    session: Session,
}

impl SessionStore {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            auth,
            session: Session::new(),
        }
    }

    /// Current session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Authenticate against the backend.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthenticationError`] when the backend refuses the
    /// credentials or cannot be reached. The session is left as it was.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthenticationError> {
        let credentials = Credentials::new(email, password);

        match self.auth.login(&credentials).await {
            Ok(user) => {
                info!(user = %user.id, role = %user.role, "signed in");
                self.session.sign_in(user);

                Ok(())
            }
            Err(error) => {
                warn!(%error, "login failed");

                Err(error)
            }
        }
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistrationError`] when the backend refuses the account.
    /// The session is left as it was.
    #[instrument(skip_all, fields(email = %registration.email))]
    pub async fn register(&mut self, registration: &Registration) -> Result<(), RegistrationError> {
        match self.auth.register(registration).await {
            Ok(user) => {
                info!(user = %user.id, "registered and signed in");
                self.session.sign_in(user);

                Ok(())
            }
            Err(error) => {
                warn!(%error, "registration failed");

                Err(error)
            }
        }
    }

    /// Forget the signed-in user.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            info!(user = %user.id, "signed out");
        }

        self.session.sign_out();
    }

    /// Evaluate the access policy of `route` against the current session.
    #[must_use]
    pub fn guard(&self, route: &Route) -> AccessDecision {
        route.guard(&self.session)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
