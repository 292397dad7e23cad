//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs    # POST  /users
//! │   ├── put_user.rs       # PUT   /users/{userId}
//! │   ├── patch_user.rs     # PATCH /users/{userId}
//! │   └── list_users.rs     # GET   /users?limit&offset
//! └── response/
//!     └── user_response.rs  # UserResponse, CreateUserResponse
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! pub async fn create_user(
//!     state: web::Data<AppState>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let request = payload.into_inner().normalized();
//!     request.validate()?;
//!     // ...
//!     Ok(HttpResponse::Created().json(CreateUserResponse { id }))
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
