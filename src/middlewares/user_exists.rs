//! # 사용자 존재 확인 미들웨어
//!
//! `{user_id}` 경로 파라미터를 가진 스코프에 적용되어, 핸들러 실행 전에
//! 해당 사용자가 존재하는지 확인합니다.
//!
//! - 존재하면 조회한 사용자를 [`ExistingUser`](crate::domain::models::ExistingUser)로
//!   Request Extensions에 저장하고 다음 서비스로 진행
//! - 존재하지 않으면 핸들러를 호출하지 않고 `404 Not Found`로 응답
//! - 저장소 오류는 `500`으로 응답
//!
//! 요청 본문 검증보다 먼저 실행되므로, 없는 사용자에 대한 잘못된 본문은 400이 아니라 404입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! web::scope("/users/{user_id}")
//!     .wrap(UserExists::new("user_id"))
//!     .service(
//!         web::resource("")
//!             .route(web::get().to(get_user))
//!             .route(web::delete().to(delete_user)),
//!     )
//! ```

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::user_exists_inner::UserExistsService;

/// 사용자 존재 확인 미들웨어 팩토리
pub struct UserExists {
    /// 사용자 ID를 담은 경로 파라미터 이름
    param: &'static str,
}

impl UserExists {
    pub fn new(param: &'static str) -> Self {
        Self { param }
    }
}

impl Default for UserExists {
    fn default() -> Self {
        Self::new("user_id")
    }
}

impl<S, B> Transform<S, ServiceRequest> for UserExists
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = UserExistsService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(UserExistsService {
            service: Rc::new(service),
            param: self.param,
        }))
    }
}
