use super::*;

/// Client-held identity claim issued at login.
///
/// The token is the bare username. It is not signed and not checked against
/// the store on later requests; holding a non-empty value is all that
/// [`Session::parse`] asks for. Swapping this for a signed, server-validated
/// token would not change any caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Session(String);

impl Session {
    pub fn issue(user: &User) -> Self {
        Self(user.username().to_string())
    }
    /// Presence check on a raw cookie value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            value => Some(Self(value.to_string())),
        }
    }
    /// Whether a username can ride as a bare cookie value and come back
    /// unchanged: cookie-octets only, without `%`.
    pub fn admits(username: &str) -> bool {
        !username.is_empty()
            && username.bytes().all(|b| {
                matches!(b, 0x21 | 0x23..=0x24 | 0x26..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
            })
    }
    pub fn username(&self) -> &str {
        &self.0
    }
    pub fn token(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "server")]
impl Session {
    /// `Set-Cookie` value: `<name>=<token>; Path=/`.
    pub fn cookie(&self, name: &str) -> actix_web::cookie::Cookie<'static> {
        actix_web::cookie::Cookie::build(name.to_string(), self.0.clone())
            .path(kw_core::SESSION_COOKIE_PATH)
            .finish()
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_username() {
        let session = Session::issue(&User::new("alice".into(), "hash".into()));
        assert_eq!(session.token(), "alice");
        assert_eq!(session.username(), "alice");
    }

    #[test]
    fn parse_needs_a_value() {
        assert_eq!(Session::parse(""), None);
        assert_eq!(Session::parse("alice").unwrap().username(), "alice");
    }

    #[test]
    fn admits_cookie_safe_names() {
        for name in ["alice", "bob.smith", "user_42", "a-b", "x@example.com"] {
            assert!(Session::admits(name), "{}", name);
        }
        for name in ["", " ", "a b", "a\nb", "a;b", "a,b", "a\"b", "a\\b", "50%", "caf\u{e9}", "\t"] {
            assert!(!Session::admits(name), "{:?}", name);
        }
    }

    #[test]
    fn parse_does_not_consult_the_store() {
        assert!(Session::parse("nobody-registered-this").is_some());
    }

    #[cfg(feature = "server")]
    #[test]
    fn cookie_carries_name_value_and_path() {
        let cookie = Session::parse("alice").unwrap().cookie("session");
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "alice");
        assert_eq!(cookie.path(), Some("/"));
    }
}
