use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::core::AppError;
use crate::domain::models::ExistingUser;
use crate::state::AppState;

pub struct UserExistsService<S> {
    pub service: Rc<S>,
    pub param: &'static str,
}

impl<S, B> Service<ServiceRequest> for UserExistsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let param = self.param;

        Box::pin(async move {
            match lookup_user(&req, param).await {
                Ok(user) => {
                    log::debug!("사용자 존재 확인: {}", user.id);
                    req.extensions_mut().insert(ExistingUser(user));
                }
                Err(err) => {
                    match &err {
                        AppError::NotFound(msg) => log::debug!("{}", msg),
                        other => log::error!("사용자 존재 확인 실패: {}", other),
                    }
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn lookup_user(
    req: &ServiceRequest,
    param: &str,
) -> Result<crate::domain::entities::users::User, AppError> {
    let user_id = req
        .match_info()
        .get(param)
        .map(str::to_string)
        .ok_or_else(|| AppError::InternalError(format!("경로 파라미터 '{}'가 없습니다", param)))?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("AppState가 등록되지 않았습니다".to_string()))?;

    state
        .user_service
        .read_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}
