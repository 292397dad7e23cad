//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 문자열을 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 검증합니다.
//!
//! | 라우트 | DTO |
//! |--------|-----|
//! | `POST /users` | [`CreateUserRequest`] |
//! | `PUT /users/{userId}` | [`PutUserRequest`] |
//! | `PATCH /users/{userId}` | [`PatchUserRequest`] |
//! | `GET /users?limit&offset` | [`ListUsersQuery`] |
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: 깨진 JSON (`JsonConfig` 에러 핸들러 → 400),
//!    필드 타입 불일치 ([`parse_body`] → 400 + `fields`)
//! 2. **형식 검증**: 필수 여부, 이메일, 길이, 범위 (`validate()` → 400 + `fields`)
//! 3. **비즈니스 검증**: 이메일 중복 (이메일 가드 → 409)
//!
//! 요청 본문에 알 수 없는 필드가 있으면 조용히 무시됩니다.
//! `id` 필드를 보내도 저장된 사용자의 ID는 바뀌지 않습니다.

pub mod create_user;
pub mod list_users;
pub mod patch_user;
pub mod put_user;

pub use create_user::CreateUserRequest;
pub use list_users::ListUsersQuery;
pub use patch_user::PatchUserRequest;
pub use put_user::PutUserRequest;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::ValidationError;

use crate::core::errors::{AppError, AppResult, FieldViolation};

/// bcrypt가 사용하는 비밀번호 최대 길이 (바이트). 초과분은 해싱 시 잘려 나갑니다.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// 비밀번호가 bcrypt 입력 한도 안에 들어오는지 검증 (문자 수가 아닌 UTF-8 바이트 기준)
pub(crate) fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("Password must be at most 72 bytes".into()));
    }
    Ok(())
}

/// JSON 본문을 요청 DTO로 변환합니다.
///
/// 타입이 맞지 않는 필드가 있으면 해당 필드들을 `fields` 목록으로 보고합니다.
/// 요청 DTO의 모든 필드가 `Option`이므로 키 하나만 담은 객체로 다시 역직렬화해 보면
/// 어느 필드가 실패했는지 알 수 있습니다.
pub fn parse_body<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    let Value::Object(fields) = body else {
        return Err(AppError::ValidationError(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let error = match T::deserialize(&Value::Object(fields.clone())) {
        Ok(request) => return Ok(request),
        Err(error) => error,
    };

    let mut violations: Vec<FieldViolation> = fields
        .into_iter()
        .filter_map(|(key, value)| {
            let single = Value::Object(Map::from_iter([(key.clone(), value)]));
            T::deserialize(&single)
                .err()
                .map(|e| FieldViolation::new(key, e.to_string()))
        })
        .collect();

    if violations.is_empty() {
        return Err(AppError::ValidationError(error.to_string()));
    }

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    Err(AppError::InvalidFields(violations))
}

/// 검증을 통과한 필수 필드를 꺼냅니다.
///
/// `validate()` 이후에는 항상 `Some`이지만, 누락 시에도 패닉 대신 필드 에러를 반환합니다.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_byte_limit() {
        assert!(validate_password_bytes(&"x".repeat(72)).is_ok());
        assert!(validate_password_bytes(&"x".repeat(73)).is_err());
        // 20자라도 4바이트 문자면 80바이트
        assert!(validate_password_bytes(&"😀".repeat(20)).is_err());
    }

    fn field_names(error: AppError) -> Vec<String> {
        match error {
            AppError::InvalidFields(fields) => fields.into_iter().map(|f| f.field).collect(),
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_body_accepts_well_typed_object() {
        let request: PatchUserRequest =
            parse_body(serde_json::json!({ "firstName": "Ana", "unknown": [1, 2] })).unwrap();

        assert_eq!(request.first_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_parse_body_names_mistyped_fields() {
        let error = parse_body::<PutUserRequest>(serde_json::json!({
            "email": "ana@example.com",
            "password": "secret1",
            "firstName": 5,
            "lastName": "Silva",
            "permissionFlags": "3"
        }))
        .unwrap_err();

        assert_eq!(field_names(error), vec!["firstName", "permissionFlags"]);
    }

    #[test]
    fn test_parse_body_rejects_non_object() {
        let result = parse_body::<CreateUserRequest>(serde_json::json!(["ana@example.com"]));

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
