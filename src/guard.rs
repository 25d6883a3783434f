//! Route protection: which paths need a logged-in session.

use tracing::debug;

use crate::config::RoutesConfig;
use crate::session::Authenticated;

/// Outcome of a navigation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(String),
}

pub struct RouteGuard {
    login_path: String,
    protected: Vec<String>,
}

impl RouteGuard {
    pub fn new(config: &RoutesConfig) -> Self {
        RouteGuard {
            login_path: config.login_path.clone(),
            protected: config.protected.clone(),
        }
    }

    /// `/todos` protects `/todos` and `/todos/...`, not `/todos-archive`.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected.iter().any(|prefix| {
            let prefix = prefix.trim_end_matches('/');
            path == prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    pub fn check(&self, path: &str, session: &impl Authenticated) -> Access {
        if self.is_protected(path) && !session.is_authenticated() {
            debug!("Redirecting '{}' to '{}'", path, self.login_path);
            Access::Redirect(self.login_path.clone())
        } else {
            Access::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flag(bool);

    impl Authenticated for Flag {
        fn is_authenticated(&self) -> bool {
            self.0
        }
    }

    fn guard() -> RouteGuard {
        RouteGuard::new(&RoutesConfig {
            login_path: "/login".to_string(),
            protected: vec!["/todos".to_string(), "/settings/".to_string()],
        })
    }

    #[test]
    fn test_protected_paths() {
        let guard = guard();
        assert!(guard.is_protected("/todos"));
        assert!(guard.is_protected("/todos/42"));
        assert!(guard.is_protected("/settings"));
        assert!(!guard.is_protected("/todos-archive"));
        assert!(!guard.is_protected("/"));
        assert!(!guard.is_protected("/login"));
    }

    #[test]
    fn test_unauthenticated_is_redirected() {
        assert_eq!(
            guard().check("/todos", &Flag(false)),
            Access::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_authenticated_is_allowed() {
        assert_eq!(guard().check("/todos", &Flag(true)), Access::Allow);
    }

    #[test]
    fn test_public_paths_are_always_allowed() {
        assert_eq!(guard().check("/login", &Flag(false)), Access::Allow);
        assert_eq!(guard().check("/about", &Flag(false)), Access::Allow);
    }
}
