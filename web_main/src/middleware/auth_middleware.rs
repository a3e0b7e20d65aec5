use actix_service::{Service, Transform};

use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ok};
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::handlers::auth_handler::SESSION_LOGIN_KEY;
use crate::result::result_error_msg;

/// Prefixes reachable without an admin session: the public intake form,
/// login/logout, static assets and the API document.
const PUBLIC_PREFIXES: [&str; 4] = ["/iscrivi", "/auth", "/openapi.json", "/static"];

/// Session gate for the internal routes.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService { service: Rc::new(service) })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;
    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }
    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = Rc::clone(&self.service);
        if PUBLIC_PREFIXES.iter().any(|prefix| req.uri().path().starts_with(prefix)) {
            return Box::pin(async move {
                let res = srv.call(req).await?;
                return Ok(res.map_body(|_, body| EitherBody::new(body)));
            });
        }
        // the session cookie has already been decoded by SessionMiddleware
        let logged_in = req.get_session().get::<String>(SESSION_LOGIN_KEY).ok().flatten().is_some();
        Box::pin(async move {
            if logged_in {
                let res = srv.call(req).await?;
                return Ok(res.map_body(|_, body| EitherBody::new(body)));
            }
            return Ok(req.into_response(
                HttpResponse::Unauthorized().json(result_error_msg("Unauthorized")).map_into_right_body(),
            ));
        })
    }
}
