//! 티커 심볼 정의.
//!
//! `Symbol`은 데이터 제공자(Yahoo Finance)에 그대로 전달되는 티커 문자열입니다.
//! 대소문자를 구분하며 빈 문자열은 허용하지 않습니다.
//! 심볼은 요청 URL 경로와 CSV 파일명에 그대로 쓰이므로
//! 경로/쿼리 구분자와 공백은 거부합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Yahoo Finance 거래소 접미사.
///
/// 마지막 `.` 뒤가 이 목록에 있으면 구분자가 아닌 거래소 표기로 보고 유지합니다.
pub const EXCHANGE_SUFFIXES: &[&str] = &[
    "AS", "AX", "BO", "DE", "HK", "KQ", "KS", "L", "MI", "NS", "PA", "SI", "SS", "SW", "SZ", "T",
    "TO", "TW", "V",
];

/// 거래 가능한 상품의 티커 심볼.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// 심볼을 그대로 생성합니다 (앞뒤 공백만 제거).
    pub fn new(raw: impl AsRef<str>) -> CoreResult<Self> {
        let trimmed = validate(raw.as_ref())?;
        Ok(Self(trimmed.to_string()))
    }

    /// 데이터 제공자 형식으로 정규화된 심볼을 생성합니다.
    ///
    /// 거래소 접미사가 아닌 `.`은 `-`로 바꿉니다.
    ///
    /// ```
    /// use stockvault_core::Symbol;
    ///
    /// assert_eq!(Symbol::normalized("BRK.B").unwrap().as_str(), "BRK-B");
    /// assert_eq!(Symbol::normalized("0700.HK").unwrap().as_str(), "0700.HK");
    /// ```
    pub fn normalized(raw: impl AsRef<str>) -> CoreResult<Self> {
        let trimmed = validate(raw.as_ref())?;

        let normalized = match trimmed.rsplit_once('.') {
            Some((head, suffix)) if EXCHANGE_SUFFIXES.contains(&suffix) => {
                format!("{}.{}", head.replace('.', "-"), suffix)
            }
            _ => trimmed.replace('.', "-"),
        };

        Ok(Self(normalized))
    }

    /// 심볼 문자열을 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// URL 세그먼트나 파일명을 깨뜨리는 문자.
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '?', '#', '%'];

fn validate(raw: &str) -> CoreResult<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptySymbol);
    }
    if trimmed
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN_CHARS.contains(&c))
    {
        return Err(CoreError::InvalidSymbol(trimmed.to_string()));
    }
    Ok(trimmed)
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::str::FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
