use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn register<S>(
    auth: web::Data<Authenticator<S>>,
    body: web::Bytes,
) -> Result<HttpResponse, AuthError>
where
    S: UserStore + 'static,
{
    let credentials = Credentials::try_from(&body[..])?;
    auth.register(credentials).await?;
    Ok(HttpResponse::Created().body("User registered successfully"))
}

pub async fn login<S>(
    auth: web::Data<Authenticator<S>>,
    jar: web::Data<SessionCookie>,
    body: web::Bytes,
) -> Result<HttpResponse, AuthError>
where
    S: UserStore + 'static,
{
    let credentials = Credentials::try_from(&body[..])?;
    let session = auth.login(credentials).await?;
    Ok(HttpResponse::Ok()
        .cookie(session.cookie(jar.name()))
        .body("Login successful"))
}

pub async fn change_password<S>(
    auth: web::Data<Authenticator<S>>,
    user: Auth,
    body: web::Bytes,
) -> Result<HttpResponse, AuthError>
where
    S: UserStore + 'static,
{
    let change = PasswordChange::try_from(&body[..])?;
    auth.change_password(user.session(), change).await?;
    Ok(HttpResponse::Ok().body("Password updated successfully"))
}

pub async fn welcome(user: Auth) -> impl Responder {
    HttpResponse::Ok().body(format!("Welcome, {}", user.session().username()))
}

pub async fn not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().body("Only POST method is allowed")
}
