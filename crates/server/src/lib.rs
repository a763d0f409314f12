//! Keyward HTTP server
//!
//! Mounts the registration, login, password-change, and welcome routes
//! over an in-memory user store on an actix-web server.
//!
//! ## Submodules
//!
//! - [`settings`] — Environment-driven startup configuration

pub mod settings;

pub use settings::Settings;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use kw_auth::Authenticator;
use kw_auth::Memory;
use kw_auth::SessionCookie;
use kw_auth::UserStore;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Route table. Expects `web::Data<Authenticator<S>>` and
/// `web::Data<SessionCookie>` to be registered on the app.
#[rustfmt::skip]
pub fn routes<S>(cfg: &mut web::ServiceConfig)
where
    S: UserStore + 'static,
{
    cfg
        .route("/health", web::get().to(health))
        .route("/welcome", web::route().to(kw_auth::welcome))
        .service(
            web::resource("/register")
                .route(web::post().to(kw_auth::register::<S>))
                .default_service(web::route().to(kw_auth::not_allowed)),
        )
        .service(
            web::resource("/login")
                .route(web::post().to(kw_auth::login::<S>))
                .default_service(web::route().to(kw_auth::not_allowed)),
        )
        .service(
            web::resource("/change-password")
                .route(web::post().to(kw_auth::change_password::<S>))
                .default_service(web::route().to(kw_auth::not_allowed)),
        );
}

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let auth = web::Data::new(Authenticator::new(Memory::new(), settings.hasher.clone()));
    let jar = web::Data::new(SessionCookie::new(settings.cookie.clone()));
    log::info!("starting keyward server on {}", settings.bind);
    log::info!("session cookie {:?}", settings.cookie);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(auth.clone())
            .app_data(jar.clone())
            .configure(routes::<Memory>)
    })
    .workers(settings.workers)
    .bind(&settings.bind)?
    .run()
    .await?;
    log::info!("keyward server stopped");
    Ok(())
}
