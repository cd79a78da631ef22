//! Session value keys shared with the login flow.

/// Key holding the signed-in user's role name.
pub const USER_ROLE: &str = "UserRole";

/// Key holding the signed-in user's id.
pub const USER_ID: &str = "UserId";
