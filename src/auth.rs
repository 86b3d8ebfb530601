//! auth.rs
//! Middleware de autenticación por API key compartida (`X-API-Key`) para las
//! rutas del dashboard. Solo se aplica cuando hay una key configurada; el
//! preflight CORS se resuelve antes, en el middleware de CORS.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::errors::ApiError;

pub struct ApiKeyAuth {
    api_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: Option<String>) -> Self {
        ApiKeyAuth { api_key }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthMiddleware {
            service: Rc::new(service),
            api_key: self.api_key.clone(),
        }))
    }
}

pub struct ApiKeyAuthMiddleware<S> {
    service: Rc<S>,
    api_key: Option<String>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let expected = self.api_key.clone();
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if let Some(expected) = expected.as_deref() {
                let provided = req
                    .headers()
                    .get("X-API-Key")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("");
                if provided != expected {
                    // 401 antes de resolver la ruta, como el chequeo único
                    // al tope del router original
                    let (request, _) = req.into_parts();
                    let response = ApiError::Auth("Unauthorized".to_string())
                        .error_response()
                        .map_into_right_body();
                    return Ok(ServiceResponse::new(request, response));
                }
            }
            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}
