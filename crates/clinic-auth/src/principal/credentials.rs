//! The read-only credential context handed to resolvers.

/// Identity attached by the bearer-token middleware.
///
/// `authenticated` is `false` when a token was presented but failed
/// verification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimsIdentity {
    /// Whether the token verified.
    pub authenticated: bool,
    /// Subject (user id) claim.
    pub subject: Option<String>,
    /// Role claim.
    pub role: Option<String>,
}

impl ClaimsIdentity {
    /// An identity for a request whose token did not verify.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated identity with the given claims.
    pub fn authenticated(subject: Option<String>, role: Option<String>) -> Self {
        Self {
            authenticated: true,
            subject,
            role,
        }
    }
}

/// Session id attached by the session-cookie middleware.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionHandle(pub String);

impl SessionHandle {
    /// The session id.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Everything the upstream middleware learned about the caller.
///
/// Built once per request and passed by reference; resolvers never reach
/// into request state themselves.
#[derive(Debug, Clone, Default)]
pub struct CredentialContext {
    identity: Option<ClaimsIdentity>,
    session: Option<SessionHandle>,
}

impl CredentialContext {
    /// An empty context: no identity, no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a claims identity.
    pub fn with_identity(mut self, identity: ClaimsIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Attaches a session handle.
    pub fn with_session(mut self, session: SessionHandle) -> Self {
        self.session = Some(session);
        self
    }

    /// The claims identity, if any.
    pub fn identity(&self) -> Option<&ClaimsIdentity> {
        self.identity.as_ref()
    }

    /// The session handle, if any.
    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }
}
