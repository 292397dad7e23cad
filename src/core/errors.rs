//! # Application Error Handling System
//!
//! 사용자 관리 백엔드를 위한 통합 에러 처리 시스템입니다.
//! 모든 계층(미들웨어, 핸들러, 서비스, 리포지토리)이 동일한 [`AppError`]를 반환하며,
//! `actix_web::ResponseError` 구현을 통해 HTTP 상태 코드와 JSON 본문으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | JSON 파싱 실패, 잘못된 쿼리 문자열 |
//! | `InvalidFields` | 400 Bad Request | 필드 단위 검증 실패 (필드 목록 포함) |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 |
//! | `ConflictError` | 409 Conflict | 이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 연결/쿼리 실패 |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패 등 예상치 못한 오류 |
//!
//! ## 응답 본문
//!
//! ```json
//! {
//!   "error": "Validation failed: email, password",
//!   "fields": [
//!     { "field": "email", "message": "Must be a valid email address" },
//!     { "field": "password", "message": "Must include password (5+ characters)" }
//!   ]
//! }
//! ```
//!
//! `fields`는 `InvalidFields` 에러에서만 포함됩니다.

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// 검증에 실패한 단일 필드 정보
///
/// `field`는 요청 본문에서 사용되는 camelCase 이름입니다 (`firstName`, `permissionFlags`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러와 미들웨어에서 `?` 연산자만으로 HTTP 응답까지 전파됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(doc! { "_id": id }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // validator 검증 결과 변환 (From 구현)
/// request.validate()?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연결 실패, 쿼리 실행 실패 등 저장소 계층의 오류입니다.
    /// 요청 단위 재시도는 하지 않으며 500으로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 필드 단위로 표현할 수 없는 요청 오류(깨진 JSON, 타입 불일치, 잘못된 쿼리)입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 에러
    ///
    /// 위반된 필드 목록을 응답 본문의 `fields` 배열로 전달합니다.
    #[error("Validation failed: {}", field_names(.0))]
    InvalidFields(Vec<FieldViolation>),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 다른 사용자가 이미 사용 중인 이메일로 생성/수정하려는 경우입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn field_names(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// 누락된 필수 필드 하나에 대한 `InvalidFields` 에러를 생성합니다.
    pub fn missing_field(field: &str) -> Self {
        AppError::InvalidFields(vec![FieldViolation::new(field, "Field is required")])
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::InvalidFields(fields) => serde_json::json!({
                "error": self.to_string(),
                "fields": fields,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ValidationErrors> for AppError {
    /// `validator` 검증 결과를 필드 목록 에러로 변환합니다.
    ///
    /// 필드 이름은 요청 본문 기준(camelCase)으로 바꾸고, 응답이 항상 같은 순서를
    /// 갖도록 필드 이름순으로 정렬합니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = to_camel_case(&field.to_string());
                errs.iter()
                    .map(|err| {
                        let message = err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string());
                        FieldViolation::new(field.clone(), message)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::InvalidFields(violations)
    }
}

/// `first_name` → `firstName`
fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;

    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Must be a valid email address"))]
        email: String,
        #[validate(length(min = 5))]
        first_name: String,
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Malformed JSON".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email already in use".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        assert_eq!(
            error.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_invalid_fields_body_lists_fields() {
        let error = AppError::InvalidFields(vec![
            FieldViolation::new("email", "Must be a valid email address"),
            FieldViolation::new("password", "Too short"),
        ]);
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Validation failed: email, password");
        assert_eq!(body["fields"][0]["field"], "email");
        assert_eq!(body["fields"][1]["message"], "Too short");
    }

    #[test]
    fn test_validation_errors_conversion_uses_camel_case() {
        let probe = Probe {
            email: "not-an-email".to_string(),
            first_name: "Al".to_string(),
        };
        let error: AppError = probe.validate().unwrap_err().into();

        match error {
            AppError::InvalidFields(fields) => {
                let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["email", "firstName"]);
                assert_eq!(fields[0].message, "Must be a valid email address");
                assert_eq!(fields[1].message, "length");
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field() {
        match AppError::missing_field("lastName") {
            AppError::InvalidFields(fields) => assert_eq!(fields[0].field, "lastName"),
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
