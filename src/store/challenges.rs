//! # 과제 저장소
//!
//! ## 과제 라이프사이클
//! ```text
//! [생성] create() → Active ⇄ Completed (toggle_status()) → delete() → [삭제]
//! ```

use super::{ensure_unique_ids, new_id};
use crate::error::AppError;
use crate::models::Challenge;
use chrono::{DateTime, Utc};

/// 메모리 내 과제 컬렉션
#[derive(Debug, Clone, Default)]
pub struct ChallengeStore {
    challenges: Vec<Challenge>,
}

impl ChallengeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 과제들로 저장소를 채웁니다.
    ///
    /// - ID가 겹치면 `AppError::Conflict`
    /// - 제목이 비었거나 상태와 `completed_date`가 어긋나면 `AppError::Validation`
    pub fn from_records(challenges: Vec<Challenge>) -> Result<Self, AppError> {
        ensure_unique_ids("challenge", challenges.iter().map(|c| c.id.as_str()))?;
        challenges.iter().try_for_each(Challenge::validate)?;
        Ok(Self { challenges })
    }

    /// Active 상태의 새 과제를 맨 앞에 추가합니다.
    ///
    /// 제목 검증은 호출하는 쪽에서 합니다.
    pub fn create(
        &mut self,
        title: String,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Challenge {
        let challenge = Challenge::new(new_id(), title, description, now);
        self.challenges.insert(0, challenge.clone());
        challenge
    }

    pub fn get(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// 과제 상태를 뒤집습니다. 해당 ID가 없으면 None.
    pub fn toggle_status(&mut self, id: &str, now: DateTime<Utc>) -> Option<Challenge> {
        let challenge = self.challenges.iter_mut().find(|c| c.id == id)?;
        challenge.toggle(now);
        Some(challenge.clone())
    }

    /// ID로 과제를 삭제합니다.
    ///
    /// ## 반환값
    /// - `true`: 삭제 성공
    /// - `false`: 해당 ID의 과제가 없음
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.challenges.len();
        // retain(): 조건이 true인 항목만 남깁니다
        self.challenges.retain(|c| c.id != id);
        self.challenges.len() < before
    }

    /// 전체 과제 (삽입 기준 최신순)
    pub fn list(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}
