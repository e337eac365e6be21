//! # 통계 뷰 모델 정의
//!
//! 대시보드에 표시하는 파생(derived) 값들입니다.
//! 저장하지 않고 요청할 때마다 다시 계산합니다.

use crate::models::DayMarker;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 대시보드 상단 통계
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeStats {
    /// 이번 달 연습 횟수
    pub monthly_count: usize,
    /// 전체 연습 시간 (시간 단위, 소수 첫째 자리까지)
    pub total_hours: f64,
    /// 연속 연습일
    pub current_streak: u32,
    /// 월 목표 대비 진행률 (0~100)
    pub weekly_goal_progress: u32,
}

/// 대시보드에 미리 보여주는 진행 중 과제
///
/// 과제와 연습 기록 사이의 실제 연결은 아직 계산하지 않으므로
/// `progress`와 `practice_sessions`는 항상 0입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengePreview {
    pub id: String,
    pub title: String,
    pub progress: u32,
    pub practice_sessions: u32,
    /// 지금은 과제 시작 시각을 그대로 씁니다
    pub last_practiced: DateTime<Utc>,
}

/// 대시보드 한 화면에 필요한 값 묶음
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub stats: PracticeStats,
    pub week: Vec<DayMarker>,
    pub active_challenges: Vec<ChallengePreview>,
}
