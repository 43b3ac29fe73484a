//! Urgency scoring for relief requests.
//!
//! Produces a total order over requests (higher score = handle first) from
//! priority, aid type, and request age, plus a coarse severity category for
//! display. Scores are derived fresh on every call and never persisted.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

use crate::request::{AidRequest, AidType, Priority};

// Hand-tuned relief-operations policy constants. Kept verbatim from the
// operations team's tables; owners of relief policy may retune them.
const AGE_BONUS_PER_HOUR: f64 = 0.5;
const AGE_BONUS_CAP: f64 = 5.0;
const VULNERABILITY_TERM: f64 = 1.0;

fn priority_weight(priority: Priority) -> f64 {
    match priority {
        Priority::Urgent => 10.0,
        Priority::High => 7.0,
        Priority::Medium => 4.0,
        Priority::Low => 1.0,
    }
}

fn aid_type_weight(aid_type: AidType) -> f64 {
    match aid_type {
        AidType::Medicine => 3.0,
        AidType::Shelter => 2.5,
        AidType::Food => 2.0,
        AidType::Transportation => 1.5,
        AidType::Clothing => 1.0,
        AidType::Other => 1.0,
    }
}

/// A request annotated with its derived urgency score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRequest {
    pub request: AidRequest,
    pub triage_score: f64,
}

/// Urgency score against an explicit clock, rounded to 2 decimals.
///
/// `(priority_weight * aid_type_weight) + age_bonus + vulnerability`, where
/// the age bonus grows at 0.5 per hour and saturates at 5 (10 hours).
/// Missing, unparseable, or future-dated creation times contribute 0.
pub fn triage_score_at(request: &AidRequest, now: DateTime<Utc>) -> f64 {
    let base = priority_weight(request.priority) * aid_type_weight(request.aid_type);
    round2(base + age_bonus(request, now) + VULNERABILITY_TERM)
}

/// Urgency score against the current wall clock.
pub fn triage_score(request: &AidRequest) -> f64 {
    triage_score_at(request, Utc::now())
}

/// Scores every request against a single `now` snapshot and returns them
/// sorted by score descending. The sort is stable: equal scores keep their
/// input order.
pub fn sort_by_triage_score_at(requests: &[AidRequest], now: DateTime<Utc>) -> Vec<ScoredRequest> {
    let mut scored: Vec<ScoredRequest> = requests
        .par_iter()
        .map(|request| ScoredRequest {
            triage_score: triage_score_at(request, now),
            request: request.clone(),
        })
        .collect();
    scored.sort_by(|a, b| b.triage_score.total_cmp(&a.triage_score));
    scored
}

/// [`sort_by_triage_score_at`] with one wall-clock snapshot for the batch.
pub fn sort_by_triage_score(requests: &[AidRequest]) -> Vec<ScoredRequest> {
    sort_by_triage_score_at(requests, Utc::now())
}

fn age_bonus(request: &AidRequest, now: DateTime<Utc>) -> f64 {
    let Some(created) = request.created_instant() else {
        return 0.0;
    };
    let age_hours = (now - created).num_milliseconds() as f64 / 3_600_000.0;
    // clamp also floors future-dated records at zero
    (age_hours * AGE_BONUS_PER_HOUR).clamp(0.0, AGE_BONUS_CAP)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Coarse severity bucket for a triage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageCategory {
    Critical,
    High,
    Medium,
    Low,
}

impl TriageCategory {
    pub fn for_score(score: f64) -> Self {
        if score >= 20.0 {
            Self::Critical
        } else if score >= 15.0 {
            Self::High
        } else if score >= 10.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
