/// Failure signals of the authentication core.
///
/// The `Display` text of each variant is safe to hand back to a client.
/// Anything internal rides along in fields and goes to the log instead.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Request body could not be read as credentials, or the username is not cookie-safe.
    #[error("Invalid request body")]
    MalformedInput,
    /// Registration for a username that is already taken.
    #[error("Username already exists")]
    DuplicateUser,
    /// Unknown username or wrong password. The two are deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// No usable session cookie on a request that needs one.
    #[error("Unauthorized")]
    Unauthenticated,
    /// The hasher itself failed (bad parameters, worker panic).
    #[error("Error hashing password")]
    HashingFailure { reason: String },
}

impl AuthError {
    pub fn hashing(reason: impl std::fmt::Display) -> Self {
        Self::HashingFailure {
            reason: reason.to_string(),
        }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::AuthError;
    use actix_web::HttpResponse;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    impl ResponseError for AuthError {
        fn status_code(&self) -> StatusCode {
            match self {
                AuthError::MalformedInput => StatusCode::BAD_REQUEST,
                AuthError::DuplicateUser => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
                AuthError::HashingFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        fn error_response(&self) -> HttpResponse {
            if let AuthError::HashingFailure { reason } = self {
                log::error!("[auth] hashing failed: {}", reason);
            }
            HttpResponse::build(self.status_code()).body(self.to_string())
        }
    }
}
