//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `KEIKO_UTC_OFFSET_MINUTES`: "오늘"을 계산할 때 쓰는 UTC 오프셋(분). 예: 일본은 540
//! - `KEIKO_SEED_FIXTURES`: 시작할 때 샘플 데이터를 채울지 여부 (기본값: true)

use crate::error::AppError;
use chrono::{FixedOffset, Offset, Utc};
use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 시작 시 환경변수에서 한 번 읽어온 후 `Journal`을 만들 때 사용됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 시계(Clock)의 UTC 시각을 현지 날짜로 바꿀 때 쓰는 오프셋
    /// FixedOffset: "+09:00"처럼 고정된 시차를 나타내는 chrono 타입
    pub utc_offset: FixedOffset,
    /// true면 샘플 연습 기록과 과제로 저장소를 채웁니다
    pub seed_fixtures: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Utc.fix(): UTC를 +00:00 FixedOffset으로 변환
            utc_offset: Utc.fix(),
            seed_fixtures: true,
        }
    }
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    ///
    /// 모든 항목에 기본값이 있으므로 변수가 없어도 실패하지 않습니다.
    /// 값이 있는데 형식이 잘못된 경우에만 `AppError::Config`를 반환합니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 읽습니다.
    ///
    /// `lookup`: 키를 받아 값(Option<String>)을 돌려주는 클로저.
    /// 테스트에서는 HashMap을, 실제 실행에서는 `env::var`를 넘깁니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let utc_offset = match lookup("KEIKO_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let minutes: i32 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("KEIKO_UTC_OFFSET_MINUTES is not a number: {raw}"))
                })?;
                // east_opt: 범위(-24h ~ +24h)를 벗어나면 None
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| {
                        AppError::Config(format!(
                            "KEIKO_UTC_OFFSET_MINUTES out of range: {minutes}"
                        ))
                    })?
            }
            None => defaults.utc_offset,
        };

        let seed_fixtures = match lookup("KEIKO_SEED_FIXTURES") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("KEIKO_SEED_FIXTURES is not a boolean: {raw}"))
            })?,
            None => defaults.seed_fixtures,
        };

        Ok(Self {
            utc_offset,
            seed_fixtures,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
