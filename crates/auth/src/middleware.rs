use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Ready;
use std::future::ready;

/// Name of the cookie that carries the session token.
/// Registered as app data; both issuing and reading use it.
#[derive(Debug, Clone)]
pub struct SessionCookie(String);

impl SessionCookie {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new(kw_core::SESSION_COOKIE)
    }
}

/// Extractor for requests carrying a non-empty session cookie.
/// Presence is the whole check; see [`Session`].
pub struct Auth(pub Session);

impl Auth {
    pub fn session(&self) -> &Session {
        &self.0
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let name = req
            .app_data::<web::Data<SessionCookie>>()
            .map(|jar| jar.name().to_string())
            .unwrap_or_else(|| kw_core::SESSION_COOKIE.to_string());
        ready(
            req.cookie(&name)
                .and_then(|cookie| Session::parse(cookie.value()))
                .map(Auth)
                .ok_or_else(|| AuthError::Unauthenticated.into()),
        )
    }
}
