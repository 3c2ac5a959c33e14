//! HTTP timing middleware
//!
//! Logs each request's status and latency at `debug` level. Runs inside the
//! request span, so the line carries the request id.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

/// 超过该阈值的请求以 warn 级别记录
const SLOW_REQUEST_MS: u128 = 1000;

#[derive(Clone, Default)]
pub struct TimingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TimingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingService {
            service: Rc::new(service),
        }))
    }
}

pub struct TimingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TimingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();

        Box::pin(async move {
            let result = srv.call(req).await;

            let elapsed = start.elapsed();
            let status = match &result {
                Ok(response) => response.status().as_u16(),
                Err(_) => 500,
            };

            if elapsed.as_millis() >= SLOW_REQUEST_MS {
                warn!(status, elapsed_ms = elapsed.as_millis() as u64, "slow request");
            } else {
                debug!(status, elapsed_us = elapsed.as_micros() as u64, "request completed");
            }

            result
        })
    }
}
