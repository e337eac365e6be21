//! # 에러 처리 모듈
//!
//! 연습 일지(journal)에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `to_body()`: 에러를 UI 계층에 넘길 JSON 본문으로 변환
//!
//! ## 없는 ID에 대한 변경 요청
//! 저장소(store/)는 DB 계층처럼 `Option`/`bool`로 "없음"을 알리고,
//! `Journal` 파사드가 이를 `AppError::NotFound`로 바꿉니다.
//! 조용히 무시(no-op)하지 않고 항상 에러로 알립니다.

use serde_json::{json, Value}; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// `Journal`의 변경 연산은 `Result<T, AppError>`를 반환합니다.
/// 통계 계산 함수들은 실패하지 않으므로 에러를 반환하지 않습니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 레코드를 찾을 수 없음
    /// `entity`는 "practice" 또는 "challenge"처럼 어떤 컬렉션인지 나타냅니다.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// 입력값 검증 실패
    /// `field`는 문제가 된 필드 이름입니다 (예: "title", "intensity").
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// 레코드 충돌 (같은 ID가 두 번 들어온 경우)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 타임스탬프 파싱 실패
    /// #[from]: chrono::ParseError → AppError::Timestamp 자동 변환.
    /// 덕분에 `DateTime::parse_from_rfc3339(..)?`를 바로 쓸 수 있습니다.
    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// 설정값 오류 (환경변수 형식이 잘못된 경우)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// 검증 에러를 만드는 단축 함수
    ///
    /// `impl Into<String>`: &str과 String 모두 받을 수 있게 합니다.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    /// UI 계층이 분기할 때 쓰는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "not_found",
            AppError::Validation { .. } => "validation_error",
            AppError::Conflict(_) => "conflict",
            AppError::Timestamp(_) => "invalid_timestamp",
            AppError::Config(_) => "config_error",
        }
    }

    /// 에러를 UI에 전달할 JSON 본문으로 변환합니다.
    ///
    /// 결과: `{ "error": { "code": "not_found", "message": "...", "field": null } }`
    ///
    /// 설정 에러는 사용자에게 보여줄 내용이 아니므로 로그에만 자세히 남기고
    /// 본문에는 일반적인 메시지만 담습니다.
    pub fn to_body(&self) -> Value {
        let field = match self {
            AppError::Validation { field, .. } => Some(*field),
            _ => None,
        };

        let message = match self {
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "A configuration error occurred".to_string()
            }
            other => other.to_string(),
        };

        json!({
            "error": {
                "code": self.code(),
                "message": message,
                "field": field
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_found_body_names_entity_and_id() {
        let err = AppError::NotFound {
            entity: "challenge",
            id: "abc".to_string(),
        };
        assert_eq!(
            err.to_body(),
            json!({
                "error": {
                    "code": "not_found",
                    "message": "challenge not found: abc",
                    "field": null
                }
            })
        );
    }

    #[test]
    fn validation_body_carries_field() {
        let err = AppError::validation("intensity", "must be between 1 and 5");
        let body = err.to_body();
        assert_eq!(body["error"]["code"], "validation_error");
        assert_eq!(body["error"]["field"], "intensity");
        assert_eq!(
            body["error"]["message"],
            "Invalid intensity: must be between 1 and 5"
        );
    }

    #[test]
    fn config_errors_are_not_leaked() {
        let err = AppError::Config("KEIKO_UTC_OFFSET_MINUTES=abc".to_string());
        assert_eq!(
            err.to_body()["error"]["message"],
            "A configuration error occurred"
        );
    }

    #[test]
    fn parse_errors_convert_with_question_mark() {
        fn parse(s: &str) -> Result<(), AppError> {
            chrono::DateTime::parse_from_rfc3339(s)?;
            Ok(())
        }
        let err = parse("not a date").unwrap_err();
        assert_eq!(err.code(), "invalid_timestamp");
    }
}
