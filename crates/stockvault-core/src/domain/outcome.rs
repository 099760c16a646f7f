//! 심볼별 수집 결과.
//!
//! 수집 워커는 모든 호출에서 정확히 하나의 `FetchOutcome`을 반환합니다.
//! 실패는 예외가 아닌 값으로 전달되므로 한 심볼의 실패가 배치를 중단시키지 않습니다.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Symbol;

/// 심볼 하나의 수집 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// 아티팩트 저장 완료
    Written { symbol: Symbol, rows: usize },
    /// 조회는 성공했지만 데이터 없음 (아티팩트 미생성)
    EmptyResult { symbol: Symbol },
    /// 조회 또는 저장 실패 (아티팩트 미생성)
    Failed { symbol: Symbol, error: String },
}

/// 결과 종류 (집계용).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Written,
    EmptyResult,
    Failed,
}

impl FetchOutcome {
    pub fn written(symbol: Symbol, rows: usize) -> Self {
        Self::Written { symbol, rows }
    }

    pub fn empty(symbol: Symbol) -> Self {
        Self::EmptyResult { symbol }
    }

    pub fn failed(symbol: Symbol, error: impl fmt::Display) -> Self {
        Self::Failed {
            symbol,
            error: error.to_string(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        match self {
            Self::Written { symbol, .. }
            | Self::EmptyResult { symbol }
            | Self::Failed { symbol, .. } => symbol,
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Written { .. } => OutcomeKind::Written,
            Self::EmptyResult { .. } => OutcomeKind::EmptyResult,
            Self::Failed { .. } => OutcomeKind::Failed,
        }
    }

    /// 저장된 행 수 (Written 외에는 0).
    pub fn rows(&self) -> usize {
        match self {
            Self::Written { rows, .. } => *rows,
            _ => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { symbol, rows } => write!(f, "{}: {} rows written", symbol, rows),
            Self::EmptyResult { symbol } => write!(f, "{}: no data", symbol),
            Self::Failed { symbol, error } => write!(f, "{}: failed ({})", symbol, error),
        }
    }
}
