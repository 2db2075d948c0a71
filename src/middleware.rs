use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error,
};
use futures::future::LocalBoxFuture;

use crate::{app_state::AppState, identity::user_id_from_request};

/// Per-request activity side effects: every identified request advances the
/// daily streak, and a first-time user gets the starter library. Both are
/// best-effort; a store fault here never fails the request itself.
pub struct ActivityTracker;

impl<S, B> Transform<S, ServiceRequest> for ActivityTracker
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ActivityTrackerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ActivityTrackerService {
            service: Rc::new(service),
        }))
    }
}

pub struct ActivityTrackerService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ActivityTrackerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let state = req.app_data::<web::Data<AppState>>().cloned();
        let user_id = user_id_from_request(req.request());

        Box::pin(async move {
            if let (Some(state), Some(user_id)) = (state, user_id) {
                if let Err(err) = state.stats_service.update_streak(&user_id).await {
                    log::debug!("streak update skipped for {}: {}", user_id, err);
                }
                if let Err(err) = state.book_service.seed_starter_library(&user_id).await {
                    log::debug!("starter library seed skipped for {}: {}", user_id, err);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
