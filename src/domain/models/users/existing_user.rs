use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;
use crate::domain::entities::users::User;

/// 존재 확인 미들웨어가 조회해 둔 사용자
///
/// [`UserExists`](crate::middlewares::UserExists) 미들웨어가 `{user_id}` 경로의 사용자를
/// 조회한 뒤 Request Extensions에 저장하며, 핸들러는 이 추출자로 다시 조회하지 않고 사용합니다.
#[derive(Debug, Clone)]
pub struct ExistingUser(pub User);

impl ExistingUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn into_inner(self) -> User {
        self.0
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for ExistingUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<ExistingUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::InternalError(
                "사용자 존재 확인 미들웨어가 적용되지 않은 경로입니다".to_string(),
            ))),
        }
    }
}
