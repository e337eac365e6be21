//! # 시계(Clock) 추상화
//!
//! "지금"과 "오늘"은 모두 이 트레이트를 통해 읽습니다.
//! 테스트에서는 `FixedClock`으로 시각을 고정하여 결과를 재현합니다.

use chrono::{DateTime, Utc};

/// 현재 시각을 알려주는 시간 소스
///
/// `Send + Sync`: 여러 스레드에서 공유해도 안전한 타입만 구현할 수 있습니다.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계 (실제 실행용)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 항상 같은 시각을 돌려주는 시계 (테스트용)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
