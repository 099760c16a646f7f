//! 종목 그룹 정의.
//!
//! 그룹은 닫힌 열거형이며, 각 그룹은 하나의 심볼 소스, 출력 폴더,
//! 조회 파라미터에 대응합니다. 그룹별 심볼 목록은 데이터로 제공되고
//! 수집 흐름은 모든 그룹이 공유합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::params::{FetchParameters, Interval};
use crate::error::CoreError;

/// 수집 대상 종목 그룹.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// S&P 500 구성 종목
    Sp500,
    /// 항셍 테크 지수 구성 종목
    HangSengTech,
    /// Magnificent 7 빅테크
    Mag7,
    /// Nasdaq-100 구성 종목
    Nasdaq100,
}

impl Group {
    /// 모든 그룹 (보고서 출력 순서).
    pub const ALL: [Group; 4] = [Group::Sp500, Group::HangSengTech, Group::Mag7, Group::Nasdaq100];

    /// CLI에서 사용하는 이름.
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Sp500 => "sp500",
            Self::HangSengTech => "hangseng",
            Self::Mag7 => "mag7",
            Self::Nasdaq100 => "nasdaq100",
        }
    }

    /// 데이터 디렉토리 아래 출력 폴더 이름.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Self::Sp500 => "SP500",
            Self::HangSengTech => "HangSengTech",
            Self::Mag7 => "MAG7",
            Self::Nasdaq100 => "Nasdaq100",
        }
    }

    /// 보고서 표시 이름.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sp500 => "S&P 500",
            Self::HangSengTech => "Hang Seng Tech Index",
            Self::Mag7 => "MAG7",
            Self::Nasdaq100 => "Nasdaq-100",
        }
    }

    /// 보고서용 그룹 설명.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sp500 => "All companies in the Standard & Poor's 500 Index",
            Self::HangSengTech => {
                "Technology companies listed on the Hong Kong Stock Exchange"
            }
            Self::Mag7 => {
                "The \"Magnificent Seven\" tech giants (Apple, Amazon, Google, Meta, Microsoft, Netflix, Tesla)"
            }
            Self::Nasdaq100 => "The 100 largest non-financial companies listed on the Nasdaq",
        }
    }

    /// 그룹별 조회 파라미터.
    ///
    /// 대형 지수는 일봉, 소규모 큐레이션 그룹은 시간봉을 사용합니다.
    pub fn fetch_parameters(&self) -> FetchParameters {
        match self {
            Self::Sp500 | Self::HangSengTech | Self::Nasdaq100 => FetchParameters::max(Interval::D1),
            Self::Mag7 => FetchParameters::max(Interval::H1),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl std::str::FromStr for Group {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sp500" | "s&p500" => Ok(Self::Sp500),
            "hangseng" | "hangsengtech" | "hstech" => Ok(Self::HangSengTech),
            "mag7" => Ok(Self::Mag7),
            "nasdaq100" | "ndx" => Ok(Self::Nasdaq100),
            _ => Err(CoreError::UnknownGroup(s.to_string())),
        }
    }
}
