//! # 통계 계산 서비스
//!
//! 연습 기록 목록에서 대시보드 통계를 계산하는 순수 함수들입니다.
//! 캐시하지 않고 호출할 때마다 다시 계산합니다.
//!
//! 이 모듈의 함수들:
//! - `monthly_count()`: 이번 달 연습 횟수
//! - `total_hours()`: 전체 연습 시간(시간 단위)
//! - `current_streak()`: 연속 연습일
//! - `weekly_goal_progress()`: 월 목표 대비 진행률
//! - `compute_stats()`: 위 값들을 한 번에
//! - `active_challenge_preview()`, `partition_challenges()`: 과제 목록 뷰
//!
//! "오늘"은 인자로 받습니다. 시계를 직접 읽지 않으므로
//! 같은 입력이면 언제 호출해도 같은 결과가 나옵니다.

use crate::models::{Challenge, ChallengePreview, PracticeSession, PracticeStats, YearMonth};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// 한 달 목표 연습 횟수 (주 3회 정도)
pub const MONTHLY_SESSION_TARGET: usize = 12;

/// 대시보드에 미리 보여줄 진행 중 과제 수
pub const ACTIVE_PREVIEW_LIMIT: usize = 3;

/// `today`와 같은 연-월에 속한 연습 횟수
pub fn monthly_count(practices: &[PracticeSession], today: NaiveDate) -> usize {
    let month = YearMonth::from_date(today);
    practices.iter().filter(|p| month.contains(p.day())).count()
}

/// 전체 연습 시간 — 분 합계 / 60, 소수 첫째 자리에서 반올림
///
/// 예: [90, 120, 90]분 → 300분 → 5.0시간
///
/// 분 합계는 `i64` 범위에서 포화(saturating)하므로 아주 큰 값이 들어와도 패닉하지 않습니다.
pub fn total_hours(practices: &[PracticeSession]) -> f64 {
    let minutes = practices
        .iter()
        .fold(0i64, |acc, p| acc.saturating_add(p.duration));
    (minutes as f64 / 60.0 * 10.0).round() / 10.0
}

/// 연속 연습일을 계산합니다.
///
/// ## 규칙
/// 1. 모든 기록을 날짜 단위로 줄이고 중복을 없앱니다
/// 2. 가장 최근 날짜가 오늘도 어제도 아니면 0
/// 3. 아니면 1부터 시작해, 하루 전 날짜가 있을 때마다 1씩 늘립니다.
///    빠진 날을 만나면 멈춥니다.
///
/// "어제"까지 인정하는 것은 시작점에서만입니다. 오늘 아직 연습하지 않았어도
/// 연속 기록이 끊기지 않게 하기 위함이고, 중간에 빠진 날은 허용하지 않습니다.
///
/// 미래 날짜 기록이 가장 최근이면 (오늘/어제가 아니므로) 0입니다.
pub fn current_streak(practices: &[PracticeSession], today: NaiveDate) -> u32 {
    // BTreeSet: 정렬된 집합. 중복 제거와 정렬을 한 번에 처리합니다
    let days: BTreeSet<NaiveDate> = practices.iter().map(PracticeSession::day).collect();

    // let-else: 패턴이 맞지 않으면 else 블록을 실행하고 빠져나갑니다
    let Some(&latest) = days.last() else {
        return 0;
    };

    if latest != today && Some(latest) != today.pred_opt() {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = latest;
    // pred_opt(): 하루 전 날짜 (표현 범위를 넘으면 None)
    while let Some(prev) = cursor.pred_opt() {
        if !days.contains(&prev) {
            break;
        }
        streak += 1;
        cursor = prev;
    }
    streak
}

/// 월 목표 대비 진행률 — `min(100, round(count / 12 * 100))`
pub fn weekly_goal_progress(monthly_count: usize) -> u32 {
    let percent = (monthly_count as f64 / MONTHLY_SESSION_TARGET as f64 * 100.0).round();
    percent.min(100.0) as u32
}

/// 대시보드 통계를 한 번에 계산합니다.
pub fn compute_stats(practices: &[PracticeSession], today: NaiveDate) -> PracticeStats {
    let monthly_count = monthly_count(practices, today);
    PracticeStats {
        monthly_count,
        total_hours: total_hours(practices),
        current_streak: current_streak(practices, today),
        weekly_goal_progress: weekly_goal_progress(monthly_count),
    }
}

/// 진행 중인 과제를 앞에서부터 최대 3개까지 미리보기로 만듭니다.
///
/// 저장소는 새 과제를 앞에 넣으므로 가장 최근에 만든 과제부터 나옵니다.
pub fn active_challenge_preview(challenges: &[Challenge]) -> Vec<ChallengePreview> {
    challenges
        .iter()
        .filter(|c| c.is_active())
        .take(ACTIVE_PREVIEW_LIMIT)
        .map(|c| ChallengePreview {
            id: c.id.clone(),
            title: c.title.clone(),
            progress: 0,
            practice_sessions: 0,
            last_practiced: c.start_date,
        })
        .collect()
}

/// 과제를 (진행 중, 완료) 두 목록으로 나눕니다. 순서는 유지됩니다.
pub fn partition_challenges(challenges: &[Challenge]) -> (Vec<&Challenge>, Vec<&Challenge>) {
    challenges.iter().partition(|c| c.is_active())
}
