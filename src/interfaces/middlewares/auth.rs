use std::{
    rc::Rc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};

use crate::{entities::token::Claims, AppState};

/// Resolves the caller from the `Authorization: Bearer` header and stores
/// the decoded claims in the request extensions. A missing or invalid
/// token simply resolves to "no caller" and the request continues; the
/// `AuthClaims` extractor is what rejects mutating requests.
pub struct AuthResolver;

impl<S, B> Transform<S, ServiceRequest> for AuthResolver
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthResolverService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthResolverService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthResolverService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthResolverService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if let Some(claims) = resolve_claims(&req) {
                req.extensions_mut().insert(claims);
            }

            service.call(req).await
        })
    }
}

fn resolve_claims(req: &ServiceRequest) -> Option<Claims> {
    let state = req.app_data::<web::Data<AppState>>()?;
    let token = extract_token(req)?;

    match state.auth_handler.token_service.decode_access_token(&token) {
        Ok(decoded) => Some(decoded.claims),
        Err(e) => {
            tracing::warn!("Discarding unresolvable bearer token: {}", e);
            None
        }
    }
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}
