//! 가격 시계열 제공자.
//!
//! 수집 워커가 의존하는 유일한 외부 기능은
//! `fetch(symbol, params) -> TimeSeries | 빈 시계열 | 에러` 입니다.

pub mod yahoo;

use async_trait::async_trait;
use stockvault_core::{FetchParameters, Symbol, TimeSeries};

use crate::error::DataResult;

pub use yahoo::YahooChartProvider;

/// 과거 가격 시계열 제공자 trait.
#[async_trait]
pub trait TimeSeriesProvider: Send + Sync {
    /// 제공자 이름.
    fn name(&self) -> &str;

    /// 심볼의 전체 시계열을 조회합니다.
    ///
    /// 데이터가 없으면 에러가 아닌 빈 시계열을 반환합니다.
    async fn fetch(&self, symbol: &Symbol, params: &FetchParameters) -> DataResult<TimeSeries>;
}
