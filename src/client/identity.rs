// ==========================================
// Snackhouse POS - Acting-user identity
// ==========================================
// The bulk-import schema requires a user/cashier
// reference. The orchestrator resolves one through this
// injected capability; core parsing never reads stored
// session state directly.
// ==========================================

use serde_json::Value;

/// Placeholder acting-user id substituted when no stored
/// admin identity can be resolved (a valid 24-char hex
/// object id, accepted by the backend schema).
pub const FALLBACK_ADMIN_ID: &str = "000000000000000000000000";

/// Capability that locates the acting administrator id.
pub trait IdentityProvider: Send + Sync {
    fn acting_user_id(&self) -> Option<String>;
}

/// Identity read from the session blob the login flow
/// stores client-side. The id has historically lived at
/// several paths, so all of them are searched.
pub struct StoredSessionIdentity {
    blob: Value,
}

impl StoredSessionIdentity {
    /// Invalid JSON is tolerated and simply resolves to no
    /// identity.
    pub fn from_json(raw: &str) -> Self {
        Self {
            blob: serde_json::from_str(raw).unwrap_or(Value::Null),
        }
    }
}

impl IdentityProvider for StoredSessionIdentity {
    fn acting_user_id(&self) -> Option<String> {
        let candidates = [
            self.blob.get("_id"),
            self.blob.get("id"),
            self.blob.get("user").and_then(|u| u.get("_id")),
            self.blob.get("user").and_then(|u| u.get("id")),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(String::from)
    }
}

/// Resolves the id to attribute imported orders to,
/// falling back to the documented placeholder.
pub fn resolve_acting_user(provider: &dyn IdentityProvider) -> String {
    match provider.acting_user_id() {
        Some(id) => id,
        None => {
            tracing::warn!("no admin identity found, using fallback import user id");
            FALLBACK_ADMIN_ID.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_id_paths() {
        let identity = StoredSessionIdentity::from_json(r#"{"_id":"abc123"}"#);
        assert_eq!(identity.acting_user_id().as_deref(), Some("abc123"));

        let identity = StoredSessionIdentity::from_json(r#"{"id":"xyz789"}"#);
        assert_eq!(identity.acting_user_id().as_deref(), Some("xyz789"));
    }

    #[test]
    fn test_nested_user_paths() {
        let identity = StoredSessionIdentity::from_json(r#"{"user":{"_id":"nested1"}}"#);
        assert_eq!(identity.acting_user_id().as_deref(), Some("nested1"));

        let identity = StoredSessionIdentity::from_json(r#"{"user":{"id":"nested2"}}"#);
        assert_eq!(identity.acting_user_id().as_deref(), Some("nested2"));
    }

    #[test]
    fn test_precedence_prefers_top_level() {
        let identity = StoredSessionIdentity::from_json(
            r#"{"_id":"top","user":{"_id":"nested"}}"#,
        );
        assert_eq!(identity.acting_user_id().as_deref(), Some("top"));
    }

    #[test]
    fn test_fallback_on_garbage() {
        let identity = StoredSessionIdentity::from_json("not json at all");
        assert_eq!(identity.acting_user_id(), None);
        assert_eq!(resolve_acting_user(&identity), FALLBACK_ADMIN_ID);
    }

    #[test]
    fn test_blank_id_is_ignored() {
        let identity = StoredSessionIdentity::from_json(r#"{"_id":"  ","id":"real"}"#);
        assert_eq!(identity.acting_user_id().as_deref(), Some("real"));
    }
}
