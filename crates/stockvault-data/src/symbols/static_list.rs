//! 고정 심볼 목록.

use async_trait::async_trait;

use super::SymbolSource;
use crate::error::DataResult;

/// 항셍 테크 지수 구성 종목.
///
/// 공식 구성 종목 API가 없어 수동으로 관리합니다. 원본 목록에는
/// "2382.HK"가 두 번 들어 있으며 중복은 리졸버에서 제거됩니다.
pub const HANG_SENG_TECH: &[&str] = &[
    "0700.HK", "9988.HK", "3690.HK", "9999.HK", "1810.HK", "0981.HK", "1024.HK", "9618.HK",
    "2382.HK", "6618.HK", "0268.HK", "9888.HK", "1797.HK", "9626.HK", "2015.HK", "0992.HK",
    "9866.HK", "6690.HK", "0241.HK", "9961.HK", "0772.HK", "2382.HK", "9868.HK", "0285.HK",
    "0522.HK", "1347.HK", "0780.HK", "6060.HK", "0302.HK", "2269.HK",
];

/// Magnificent 7.
pub const MAG7: &[&str] = &["AAPL", "AMZN", "GOOGL", "META", "MSFT", "NFLX", "TSLA"];

/// 코드에 고정된 심볼 목록 소스.
#[derive(Debug, Clone)]
pub struct StaticSymbolSource {
    name: String,
    symbols: Vec<String>,
}

impl StaticSymbolSource {
    pub fn new(name: impl Into<String>, symbols: &[&str]) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn hang_seng_tech() -> Self {
        Self::new("Hang Seng Tech (static)", HANG_SENG_TECH)
    }

    pub fn mag7() -> Self {
        Self::new("MAG7 (static)", MAG7)
    }
}

#[async_trait]
impl SymbolSource for StaticSymbolSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_raw(&self) -> DataResult<Vec<String>> {
        Ok(self.symbols.clone())
    }
}
