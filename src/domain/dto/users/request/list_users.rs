//! `GET /users` 쿼리 문자열

use serde::Deserialize;
use validator::Validate;

use crate::config::PaginationConfig;

/// 목록 조회 페이지네이션 파라미터
///
/// `limit`은 1..=[`PaginationConfig::MAX_LIMIT`], 생략 시 `DEFAULT_PAGE_LIMIT`(기본 100).
/// `offset`은 0..=[`MAX_OFFSET`], 생략 시 0.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListUsersQuery {
    #[validate(range(
        min = 1,
        max = PaginationConfig::MAX_LIMIT,
        message = "Must be between 1 and 1000"
    ))]
    pub limit: Option<u64>,

    #[validate(range(max = MAX_OFFSET, message = "Offset is too large"))]
    pub offset: Option<u64>,
}

/// MongoDB `skip`이 받을 수 있는 최대값 (BSON int64)
pub const MAX_OFFSET: u64 = i64::MAX as u64;

impl ListUsersQuery {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or_else(PaginationConfig::default_limit)
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = ListUsersQuery::default();

        assert!(query.validate().is_ok());
        assert_eq!(query.offset(), 0);
        assert!(query.limit() >= 1);
    }

    #[test]
    fn test_limit_bounds() {
        let zero = ListUsersQuery {
            limit: Some(0),
            offset: None,
        };
        let too_large = ListUsersQuery {
            limit: Some(1001),
            offset: None,
        };
        let max = ListUsersQuery {
            limit: Some(1000),
            offset: Some(20),
        };

        assert!(zero.validate().is_err());
        assert!(too_large.validate().is_err());
        assert!(max.validate().is_ok());
        assert_eq!(max.limit(), 1000);
        assert_eq!(max.offset(), 20);
    }

    #[test]
    fn test_offset_upper_bound() {
        let at_max = ListUsersQuery {
            limit: None,
            offset: Some(MAX_OFFSET),
        };
        let beyond = ListUsersQuery {
            limit: None,
            offset: Some(MAX_OFFSET + 1),
        };

        assert!(at_max.validate().is_ok());
        assert!(beyond.validate().is_err());
    }
}
