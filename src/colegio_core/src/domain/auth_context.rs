/// Identity of the caller, as established by the authentication layer.
///
/// Passed explicitly into every operation that needs to know who is acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    principal: String,
}

impl AuthContext {
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
        }
    }

    /// Name of the authenticated principal; the account email in this system.
    pub fn principal_name(&self) -> &str {
        &self.principal
    }
}
