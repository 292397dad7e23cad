//! # 문자열 유틸리티
//!
//! 요청 값 정규화에 쓰이는 문자열 함수들입니다.

/// 이메일 정규화
///
/// 앞뒤 공백을 제거하고 ASCII 소문자로 변환합니다.
/// 저장과 중복 검사는 항상 정규화된 값으로 수행되므로,
/// `Ana@Example.com`과 `ana@example.com`은 같은 이메일로 취급됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_email;
///
/// assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
/// ```
pub fn normalize_email(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("user@example.com"), "user@example.com");
        assert_eq!(normalize_email("  User@Example.COM  "), "user@example.com");
        assert_eq!(normalize_email("\tana@example.com\n"), "ana@example.com");
    }

    #[test]
    fn test_normalize_email_keeps_non_ascii() {
        // 비 ASCII 문자는 변환하지 않음
        assert_eq!(normalize_email("Ünïcode@Example.com"), "Ünïcode@example.com");
    }
}
