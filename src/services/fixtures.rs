//! # 샘플 데이터
//!
//! 처음 실행할 때 화면이 비어 보이지 않도록 채워 넣는 예시 기록과 과제입니다.
//! 순서는 저장소와 같습니다 (최신 기록이 앞).

use crate::error::AppError;
use crate::models::{Challenge, PracticeInput, PracticeSession};
use crate::store::new_id;
use chrono::{DateTime, Utc};

/// 샘플 연습 기록 3건 (2024-11-23, 21, 20)
pub fn seed_practices() -> Result<Vec<PracticeSession>, AppError> {
    let rows = [
        (
            "2024-11-23T19:00:00.000Z",
            90,
            "道場A",
            3,
            "山田先生",
            &["腕十字", "三角絞め"][..],
            &["ガードパス"][..],
            "調子が良かった",
        ),
        (
            "2024-11-21T18:30:00.000Z",
            120,
            "道場A",
            4,
            "鈴木先生",
            &["バックテイク", "絞め技"][..],
            &["スイープ"][..],
            "スパーリング多め",
        ),
        (
            "2024-11-20T10:00:00.000Z",
            90,
            "オープンマット",
            3,
            "山田先生",
            &["デラヒーバ", "ベリンボロ"][..],
            &["ガードパス", "スイープ"][..],
            "新しい技を試した",
        ),
    ];

    rows.into_iter()
        .map(
            |(date, duration, location, intensity, instructor, techniques, challenges, notes)|
             -> Result<PracticeSession, AppError> {
                // `?`: 파싱 실패 시 chrono::ParseError → AppError::Timestamp로 변환
                let date = DateTime::parse_from_rfc3339(date)?;
                let input = PracticeInput {
                    location: location.to_string(),
                    intensity,
                    instructor: Some(instructor.to_string()),
                    notes: Some(notes.to_string()),
                    techniques: to_strings(techniques),
                    challenges: to_strings(challenges),
                    ..PracticeInput::new(date, duration)
                };
                Ok(PracticeSession::from_input(new_id(), input))
            },
        )
        .collect()
}

/// 샘플 과제 2건 (둘 다 진행 중)
pub fn seed_challenges() -> Result<Vec<Challenge>, AppError> {
    let first = Challenge::new(
        new_id(),
        "ガードパスの精度向上".to_string(),
        Some("特にニースライスパスのタイミングを掴む".to_string()),
        parse_utc("2024-11-24T10:00:00.000Z")?,
    );
    let second = Challenge::new(
        new_id(),
        "腕十字のエントリー改善".to_string(),
        None,
        parse_utc("2024-11-20T10:00:00.000Z")?,
    );
    Ok(vec![first, second])
}

fn parse_utc(raw: &str) -> Result<DateTime<Utc>, AppError> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
