//! # 연습 일지(Journal) 파사드
//!
//! UI 계층이 사용하는 유일한 진입점입니다.
//! 두 저장소(연습 기록, 과제)와 시계를 한곳에 모아
//! 변경 연산에는 검증/에러 변환/로깅을, 조회 연산에는 통계 계산을 붙입니다.
//!
//! ## 연산 목록
//! | 연산 | 설명 |
//! |------|------|
//! | `create_practice` | 새 연습 기록 (맨 앞에 추가) |
//! | `update_practice` | 같은 ID의 기록을 통째로 교체 |
//! | `create_challenge` | 새 과제 (Active) |
//! | `toggle_challenge_status` | Active ⇄ Completed |
//! | `delete_challenge` | 과제 삭제 |
//! | `stats` / `week_view` / `calendar_grid` / `history` | 파생 뷰 계산 |
//!
//! ## 에러 규칙
//! - 없는 ID로 변경하면 항상 `AppError::NotFound`
//! - 잘못된 입력은 저장소에 닿기 전에 `AppError::Validation`
//!
//! 모든 연산은 동기(sync)이며, 한 번에 하나의 호출자만 변경한다고 가정합니다.
//! `&mut self`를 요구하므로 컴파일러가 이를 보장합니다.

use crate::config::Config;
use crate::error::AppError;
use crate::models::*;
use crate::services::{calendar, catalog, fixtures, stats, Clock, SystemClock};
use crate::store::{ChallengeStore, PracticeStore};
use chrono::{FixedOffset, NaiveDate};

/// 연습 일지 — 저장소 두 개와 시계를 소유합니다.
pub struct Journal {
    practices: PracticeStore,
    challenges: ChallengeStore,
    /// Box<dyn Clock>: 실행 중에는 SystemClock, 테스트에서는 FixedClock
    clock: Box<dyn Clock>,
    /// 시계의 UTC 시각을 "오늘" 날짜로 바꿀 때 쓰는 오프셋
    utc_offset: FixedOffset,
}

impl Journal {
    /// 빈 일지를 만듭니다.
    pub fn new(clock: Box<dyn Clock>, utc_offset: FixedOffset) -> Self {
        Self {
            practices: PracticeStore::new(),
            challenges: ChallengeStore::new(),
            clock,
            utc_offset,
        }
    }

    /// 이미 있는 저장소로 일지를 만듭니다.
    pub fn with_stores(
        practices: PracticeStore,
        challenges: ChallengeStore,
        clock: Box<dyn Clock>,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            practices,
            challenges,
            clock,
            utc_offset,
        }
    }

    /// 샘플 데이터가 채워진 일지를 만듭니다.
    pub fn with_fixtures(clock: Box<dyn Clock>, utc_offset: FixedOffset) -> Result<Self, AppError> {
        let practices = PracticeStore::from_records(fixtures::seed_practices()?)?;
        let challenges = ChallengeStore::from_records(fixtures::seed_challenges()?)?;
        tracing::debug!(
            practices = practices.len(),
            challenges = challenges.len(),
            "Seeded journal with fixtures"
        );
        Ok(Self::with_stores(practices, challenges, clock, utc_offset))
    }

    /// 설정에 따라 시스템 시계로 일지를 만듭니다.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        if config.seed_fixtures {
            Self::with_fixtures(clock, config.utc_offset)
        } else {
            Ok(Self::new(clock, config.utc_offset))
        }
    }

    /// 설정된 오프셋 기준의 오늘 날짜
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.utc_offset).date_naive()
    }

    // ── 연습 기록 ──

    /// 새 연습 기록을 만듭니다.
    ///
    /// 입력을 검증한 뒤 빈 값을 정리(장소 → "未設定" 등)하고 저장합니다.
    pub fn create_practice(&mut self, input: PracticeInput) -> Result<PracticeSession, AppError> {
        input.validate()?;
        let practice = self.practices.create(input.normalized());
        tracing::info!(id = %practice.id, date = %practice.date, "Created practice");
        Ok(practice)
    }

    /// 기존 기록의 모든 필드를 교체합니다 (ID는 유지).
    pub fn update_practice(
        &mut self,
        id: &str,
        input: PracticeInput,
    ) -> Result<PracticeSession, AppError> {
        input.validate()?;
        let Some(practice) = self.practices.update(id, input.normalized()) else {
            tracing::warn!(id, "Tried to update unknown practice");
            return Err(not_found("practice", id));
        };
        tracing::info!(id = %practice.id, "Updated practice");
        Ok(practice)
    }

    pub fn get_practice(&self, id: &str) -> Result<&PracticeSession, AppError> {
        self.practices.get(id).ok_or_else(|| not_found("practice", id))
    }

    /// 전체 기록 (삽입 기준 최신순)
    pub fn list_practices(&self) -> &[PracticeSession] {
        self.practices.list()
    }

    // ── 과제 ──

    /// 새 과제를 만듭니다. 제목이 비어 있으면 `AppError::Validation`.
    pub fn create_challenge(&mut self, req: CreateChallengeRequest) -> Result<Challenge, AppError> {
        req.validate()?;
        let description = req.description.filter(|d| !d.trim().is_empty());
        let challenge = self
            .challenges
            .create(req.title, description, self.clock.now());
        tracing::info!(id = %challenge.id, title = %challenge.title, "Created challenge");
        Ok(challenge)
    }

    /// 과제 상태를 Active ⇄ Completed로 바꿉니다.
    pub fn toggle_challenge_status(&mut self, id: &str) -> Result<Challenge, AppError> {
        let now = self.clock.now();
        let Some(challenge) = self.challenges.toggle_status(id, now) else {
            tracing::warn!(id, "Tried to toggle unknown challenge");
            return Err(not_found("challenge", id));
        };
        tracing::info!(id = %challenge.id, status = ?challenge.status, "Toggled challenge");
        Ok(challenge)
    }

    /// 과제를 삭제합니다.
    ///
    /// 연습 기록 쪽의 과제 제목(`PracticeSession::challenges`)은 그대로 남습니다.
    pub fn delete_challenge(&mut self, id: &str) -> Result<(), AppError> {
        if !self.challenges.delete(id) {
            tracing::warn!(id, "Tried to delete unknown challenge");
            return Err(not_found("challenge", id));
        }
        tracing::info!(id, "Deleted challenge");
        Ok(())
    }

    pub fn list_challenges(&self) -> &[Challenge] {
        self.challenges.list()
    }

    // ── 파생 뷰 ──

    /// 오늘 기준 대시보드 통계
    pub fn stats(&self) -> PracticeStats {
        stats::compute_stats(self.practices.list(), self.today())
    }

    /// 이번 주(일~토) 표시
    pub fn week_view(&self) -> Vec<DayMarker> {
        calendar::week_view(self.practices.list(), self.today())
    }

    /// 월간 달력 그리드
    pub fn calendar_grid(&self, month: YearMonth, selected: Option<NaiveDate>) -> Vec<CalendarCell> {
        calendar::calendar_grid(self.practices.list(), month, self.today(), selected)
    }

    /// 선택한 날의 기록
    pub fn practices_on(&self, date: NaiveDate) -> Vec<PracticeSession> {
        calendar::practices_on(self.practices.list(), date)
    }

    /// 한 달 기록 (날짜 내림차순)
    pub fn practices_in_month(&self, month: YearMonth) -> Vec<PracticeSession> {
        calendar::practices_in_month(self.practices.list(), month)
    }

    /// 이력 화면용 월별 묶음
    pub fn history(&self) -> Vec<MonthGroup> {
        calendar::group_by_month(self.practices.list())
    }

    /// 진행 중 과제 미리보기 (최대 3개)
    pub fn active_challenge_preview(&self) -> Vec<ChallengePreview> {
        stats::active_challenge_preview(self.challenges.list())
    }

    /// 대시보드 한 화면 분량의 값
    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            stats: self.stats(),
            week: self.week_view(),
            active_challenges: self.active_challenge_preview(),
        }
    }

    /// 날짜를 오늘 기준 상대 표현으로 바꿉니다.
    pub fn relative_day(&self, date: NaiveDate) -> RelativeDay {
        RelativeDay::between(date, self.today())
    }

    // ── 선택 목록 ──

    pub fn locations(&self) -> Vec<String> {
        catalog::locations(self.practices.list())
    }

    pub fn instructors(&self) -> Vec<String> {
        catalog::instructors(self.practices.list())
    }

    pub fn techniques(&self) -> Vec<String> {
        catalog::techniques(self.practices.list())
    }
}

fn not_found(entity: &'static str, id: &str) -> AppError {
    AppError::NotFound {
        entity,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedClock;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn journal_at(y: i32, m: u32, d: u32) -> Journal {
        let now = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        Journal::new(Box::new(FixedClock::new(now)), FixedOffset::east_opt(0).unwrap())
    }

    fn input(date: &str) -> PracticeInput {
        PracticeInput::new(DateTime::parse_from_rfc3339(date).unwrap(), 90)
    }

    #[test]
    fn today_respects_offset() {
        // UTC 11-23 20:00 → +09:00에서는 11-24
        let now = Utc.with_ymd_and_hms(2024, 11, 23, 20, 0, 0).unwrap();
        let journal = Journal::new(
            Box::new(FixedClock::new(now)),
            FixedOffset::east_opt(9 * 3600).unwrap(),
        );
        assert_eq!(journal.today(), NaiveDate::from_ymd_opt(2024, 11, 24).unwrap());
    }

    #[test]
    fn create_practice_normalizes_location() {
        let mut journal = journal_at(2024, 11, 23);
        let practice = journal.create_practice(input("2024-11-23T10:00:00Z")).unwrap();
        assert_eq!(practice.location, UNSET_LOCATION);
        assert_eq!(journal.get_practice(&practice.id).unwrap(), &practice);
    }

    #[test]
    fn invalid_practice_never_reaches_store() {
        let mut journal = journal_at(2024, 11, 23);
        let mut bad = input("2024-11-23T10:00:00Z");
        bad.intensity = 6;
        let err = journal.create_practice(bad).unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "intensity", .. }));
        assert!(journal.list_practices().is_empty());
    }

    #[test]
    fn missing_ids_are_not_found() {
        let mut journal = journal_at(2024, 11, 23);
        let err = journal
            .update_practice("nope", input("2024-11-23T10:00:00Z"))
            .unwrap_err();
        assert_eq!(err.code(), "not_found");
        assert!(journal.list_practices().is_empty());

        assert!(matches!(
            journal.toggle_challenge_status("nope"),
            Err(AppError::NotFound { entity: "challenge", .. })
        ));
        assert!(journal.delete_challenge("nope").is_err());
    }

    #[test]
    fn challenge_uses_clock_for_dates() {
        let mut journal = journal_at(2024, 11, 23);
        let created = journal
            .create_challenge(CreateChallengeRequest::new("スイープ", Some(" ".into())))
            .unwrap();
        let noon = Utc.with_ymd_and_hms(2024, 11, 23, 12, 0, 0).unwrap();
        assert_eq!(created.start_date, noon);
        assert_eq!(created.description, None);

        let toggled = journal.toggle_challenge_status(&created.id).unwrap();
        assert_eq!(toggled.completed_date, Some(noon));
    }

    #[test]
    fn dashboard_from_fixtures() {
        let now = Utc.with_ymd_and_hms(2024, 11, 23, 21, 0, 0).unwrap();
        let journal = Journal::with_fixtures(
            Box::new(FixedClock::new(now)),
            FixedOffset::east_opt(0).unwrap(),
        )
        .unwrap();

        let dashboard = journal.dashboard();
        assert_eq!(dashboard.stats.monthly_count, 3);
        assert_eq!(dashboard.stats.total_hours, 5.0);
        assert_eq!(dashboard.stats.current_streak, 1);
        assert_eq!(dashboard.stats.weekly_goal_progress, 25);
        assert_eq!(dashboard.week.len(), 7);
        assert_eq!(dashboard.active_challenges.len(), 2);

        assert_eq!(journal.locations(), vec!["道場A", "オープンマット"]);
        assert_eq!(journal.instructors(), vec!["山田先生", "鈴木先生"]);
        assert_eq!(journal.techniques().len(), 6);
    }
}
