//! Routes and access control
//!
//! [`authorize`] is a pure decision over the current [`Session`]. Callers run
//! it on every navigation since the session can change in between.

use std::fmt::{self, Display, Formatter};

use crate::session::Session;

/// What a view requires from the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AccessPolicy {
    /// A user must be signed in.
    pub requires_auth: bool,

    /// The signed-in user must be an admin.
    pub requires_admin: bool,
}

impl AccessPolicy {
    /// Open to everyone.
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        requires_admin: false,
    };

    /// Signed-in users only.
    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        requires_admin: false,
    };

    /// Signed-in admins only.
    pub const ADMIN: Self = Self {
        requires_auth: true,
        requires_admin: true,
    };
}

/// Outcome of [`authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    /// Show the requested view.
    Allow,

    /// Send the visitor to the login page.
    RedirectToLogin,

    /// Send the visitor to the home page.
    RedirectToHome,
}

impl AccessDecision {
    /// Where to navigate instead, if anywhere.
    pub fn redirect(self) -> Option<Route> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(Route::Login),
            Self::RedirectToHome => Some(Route::Home),
        }
    }
}

/// Decide whether the session may open a view with the given policy.
pub fn authorize(session: &Session, policy: AccessPolicy) -> AccessDecision {
    if policy.requires_auth && !session.is_authenticated() {
        return AccessDecision::RedirectToLogin;
    }

    if policy.requires_admin && !session.is_admin() {
        return AccessDecision::RedirectToHome;
    }

    AccessDecision::Allow
}

/// The application's views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/menu`
    Menu,
    /// `/restaurant/:id`
    Restaurant(String),
    /// `/about`
    About,
    /// `/contact`
    Contact,
    /// `/cart`
    Cart,
    /// `/login`
    Login,
    /// `/register`
    Register,
    /// `/profile`
    Profile,
    /// `/admin/*`, holding the remainder after `/admin`.
    Admin(String),
}

impl Route {
    /// Parse a request path. Query strings and fragments are ignored, as is a
    /// trailing slash. Returns `None` for paths with no view.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        let route = match trimmed {
            "" => Self::Home,
            "/menu" => Self::Menu,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/cart" => Self::Cart,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/profile" => Self::Profile,
            "/admin" => Self::Admin(String::new()),
            other => {
                if let Some(rest) = other.strip_prefix("/admin/") {
                    Self::Admin(rest.to_string())
                } else if let Some(id) = other.strip_prefix("/restaurant/") {
                    if id.is_empty() || id.contains('/') {
                        return None;
                    }

                    Self::Restaurant(id.to_string())
                } else {
                    return None;
                }
            }
        };

        Some(route)
    }

    /// Access requirements for the view.
    pub fn policy(&self) -> AccessPolicy {
        match self {
            Self::Profile => AccessPolicy::AUTHENTICATED,
            Self::Admin(_) => AccessPolicy::ADMIN,
            Self::Home
            | Self::Menu
            | Self::Restaurant(_)
            | Self::About
            | Self::Contact
            | Self::Cart
            | Self::Login
            | Self::Register => AccessPolicy::PUBLIC,
        }
    }

    /// Run [`authorize`] with this route's policy.
    pub fn guard(&self, session: &Session) -> AccessDecision {
        authorize(session, self.policy())
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Menu => f.write_str("/menu"),
            Self::Restaurant(id) => write!(f, "/restaurant/{id}"),
            Self::About => f.write_str("/about"),
            Self::Contact => f.write_str("/contact"),
            Self::Cart => f.write_str("/cart"),
            Self::Login => f.write_str("/login"),
            Self::Register => f.write_str("/register"),
            Self::Profile => f.write_str("/profile"),
            Self::Admin(rest) if rest.is_empty() => f.write_str("/admin"),
            Self::Admin(rest) => write!(f, "/admin/{rest}"),
        }
    }
}
