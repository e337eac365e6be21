//! # 과제(Challenge) 모델 정의
//!
//! 스스로 정한 개선 목표("가드 패스 정확도 올리기" 등)를 표현합니다.
//!
//! ## 상태 전이
//! ```text
//! [생성] → Active ⇄ Completed → [삭제]
//!           toggle()
//! ```
//! `completed_date`는 상태가 Completed일 때만 값이 있습니다.
//! 이 불변식은 `Challenge::toggle()`만 상태를 바꾸게 하여 지키고,
//! 외부에서 불러온 과제는 `Challenge::validate()`로 확인합니다.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 과제 상태
///
/// #[serde(rename_all = "lowercase")]: JSON에서는 "active" / "completed"로 표현
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Active,
    Completed,
}

/// 과제 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    /// 과제 고유 식별자 (UUIDv7)
    pub id: String,
    /// 과제 제목 (필수, 공백만으로는 불가)
    pub title: String,
    /// 자세한 설명 (선택)
    pub description: Option<String>,
    pub status: ChallengeStatus,
    /// 과제를 만든 시각
    pub start_date: DateTime<Utc>,
    /// 완료한 시각 — Completed일 때만 Some
    pub completed_date: Option<DateTime<Utc>>,
}

impl Challenge {
    /// 새 과제를 Active 상태로 만듭니다.
    pub fn new(id: String, title: String, description: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description,
            status: ChallengeStatus::Active,
            start_date: now,
            completed_date: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ChallengeStatus::Active
    }

    /// Active ⇄ Completed 를 뒤집습니다.
    ///
    /// - Completed가 되면 `completed_date = now`
    /// - Active로 돌아가면 `completed_date = None`
    ///
    /// 두 번 호출하면 상태는 원래대로 돌아오지만,
    /// 중간에 기록된 완료 시각은 남지 않습니다.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        match self.status {
            ChallengeStatus::Active => {
                self.status = ChallengeStatus::Completed;
                self.completed_date = Some(now);
            }
            ChallengeStatus::Completed => {
                self.status = ChallengeStatus::Active;
                self.completed_date = None;
            }
        }
    }

    /// 불러온 과제가 제목 규칙과 `completed_date` 불변식을 지키는지 확인합니다.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_title(&self.title)?;
        let completed = self.status == ChallengeStatus::Completed;
        if self.completed_date.is_some() != completed {
            return Err(AppError::validation(
                "completed_date",
                format!("must be set exactly when status is completed (status: {:?})", self.status),
            ));
        }
        Ok(())
    }
}

/// 과제 생성 요청
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChallengeRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateChallengeRequest {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// 제목이 비어 있거나 공백뿐이면 거부합니다.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_title(&self.title)
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation("title", "must not be empty"));
    }
    Ok(())
}
