//! 조회 파라미터 (기간, 간격).
//!
//! 한 번의 실행 동안 변하지 않으며 그룹별로 결정됩니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// 캔들 간격.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// 1분봉
    M1,
    /// 2분봉
    M2,
    /// 5분봉
    M5,
    /// 15분봉
    M15,
    /// 30분봉
    M30,
    /// 1시간봉
    H1,
    /// 일봉
    D1,
    /// 주봉
    W1,
    /// 월봉
    Mo1,
}

impl Interval {
    /// Yahoo Finance 간격 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M2 => "2m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::H1 => "1h",
            Self::D1 => "1d",
            Self::W1 => "1wk",
            Self::Mo1 => "1mo",
        }
    }

    /// 일봉 미만 간격인지 확인.
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            Self::M1 | Self::M2 | Self::M5 | Self::M15 | Self::M30 | Self::H1
        )
    }

    /// 이 간격으로 조회 가능한 최대 range 토큰.
    ///
    /// Yahoo는 분봉/시간봉에 대해 `max` 조회를 거부하므로 허용 한도로 제한합니다.
    pub fn max_range(&self) -> &'static str {
        match self {
            Self::M1 => "7d",
            Self::M2 | Self::M5 | Self::M15 | Self::M30 => "60d",
            Self::H1 => "730d",
            Self::D1 | Self::W1 | Self::Mo1 => "max",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" => Ok(Self::M1),
            "2m" => Ok(Self::M2),
            "5m" => Ok(Self::M5),
            "15m" => Ok(Self::M15),
            "30m" => Ok(Self::M30),
            "1h" | "60m" => Ok(Self::H1),
            "1d" => Ok(Self::D1),
            "1wk" | "1w" => Ok(Self::W1),
            "1mo" => Ok(Self::Mo1),
            _ => Err(CoreError::UnknownInterval(s.to_string())),
        }
    }
}

/// 조회 기간.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    /// 가능한 전체 기간
    Max,
    /// Yahoo range 토큰 (예: "5d", "1y", "10y", "ytd")
    Range(String),
    /// 명시적 날짜 구간 (양 끝 포함)
    Between { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// 날짜 구간 기간을 생성합니다.
    pub fn between(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::InvalidPeriod(format!("{} > {}", start, end)));
        }
        Ok(Self::Between { start, end })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => f.write_str("max"),
            Self::Range(token) => f.write_str(token),
            Self::Between { start, end } => write!(f, "{}..{}", start, end),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = CoreError;

    /// "max", range 토큰("1y"), 또는 "YYYY-MM-DD..YYYY-MM-DD" 형식을 파싱합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("max") {
            return Ok(Self::Max);
        }

        if let Some((start, end)) = s.split_once("..") {
            let parse = |d: &str| {
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                    .map_err(|e| CoreError::InvalidPeriod(format!("{}: {}", s, e)))
            };
            return Self::between(parse(start)?, parse(end)?);
        }

        // 숫자 + 단위 (예: 5d, 6mo, 10y)
        let digits = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        let valid_token = s.eq_ignore_ascii_case("ytd")
            || (!digits.is_empty()
                && digits.len() < s.len()
                && digits.chars().all(|c| c.is_ascii_digit()));

        if valid_token {
            Ok(Self::Range(s.to_lowercase()))
        } else {
            Err(CoreError::InvalidPeriod(s.to_string()))
        }
    }
}

/// 한 번의 실행에 적용되는 조회 파라미터.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchParameters {
    /// 조회 기간
    pub period: Period,
    /// 캔들 간격
    pub interval: Interval,
}

impl FetchParameters {
    pub fn new(period: Period, interval: Interval) -> Self {
        Self { period, interval }
    }

    /// 전체 기간 조회.
    pub fn max(interval: Interval) -> Self {
        Self::new(Period::Max, interval)
    }
}

impl fmt::Display for FetchParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "period={}, interval={}", self.period, self.interval)
    }
}
