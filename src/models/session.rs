use crate::routing::Role;

/// Cookie names for the persisted client state. String-serialized,
/// no schema versioning, cleared wholesale on logout.
pub const AUTH_COOKIE: &str = "isAuthenticated";
pub const ROLE_COOKIE: &str = "userRole";
pub const COLOR_COOKIE: &str = "colorMode";
pub const MODE_COOKIE: &str = "themeMode";

/// All cookies removed on logout.
pub const SESSION_COOKIES: &[&str] =
    &[AUTH_COOKIE, ROLE_COOKIE, COLOR_COOKIE, MODE_COOKIE];

/// The session context handed down to every admin page: an explicit
/// object loaded from the request at the start of each interaction,
/// not ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub role: Role,
    /// Raw role string as the backend returned it, kept for display.
    pub role_name: String,
}

impl Session {
    pub fn new(role_name: &str) -> Self {
        Self {
            authenticated: true,
            role: Role::parse(role_name),
            role_name: role_name.to_string(),
        }
    }
}
