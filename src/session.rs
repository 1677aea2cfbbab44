//! Session state

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// User identifier
pub type UserId = TypedId<User>;

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer.
    Customer,

    /// Back-office administrator.
    Admin,
}

impl Role {
    /// Label shown on the profile page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Client",
            Self::Admin => "Administrateur",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Customer => "customer",
            Self::Admin => "admin",
        })
    }
}

/// An authenticated identity, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    #[serde(alias = "_id")]
    pub id: UserId,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Login email address.
    pub email: String,

    /// Contact phone number, empty when the backend has none.
    #[serde(default)]
    pub phone: String,

    /// Delivery address, empty when the backend has none.
    #[serde(default)]
    pub address: String,

    /// Access role. Required on the wire.
    pub role: Role,
}

impl User {
    /// Whether the user may open the back-office.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// `first last`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The current authenticated-identity state.
///
/// Either nobody is signed in or a complete [`User`] is; there is no state in
/// between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// An unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session for the given user.
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Replace the signed-in user.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Forget the signed-in user.
    pub fn sign_out(&mut self) {
        self.user = None;
    }
}
