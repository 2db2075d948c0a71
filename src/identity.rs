use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::errors::AppError;

/// Header carrying the caller's identity. Session handling lives outside
/// this service; upstream is trusted to have authenticated the value.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the identified user in handlers.
pub struct CurrentUser(pub String);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::Unauthorized("Missing x-user-id header".to_string()));

        ready(user_id.map(CurrentUser))
    }
}

/// Header lookup shared with middleware, which runs before extractors.
pub fn user_id_from_request(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn extracts_the_user_id_header() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "user-1"))
            .to_http_request();

        let user = CurrentUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(user.id(), "user-1");
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let result = CurrentUser::from_request(&req, &mut Payload::None).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn blank_header_is_unauthorized() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "   "))
            .to_http_request();

        let result = CurrentUser::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }
}
