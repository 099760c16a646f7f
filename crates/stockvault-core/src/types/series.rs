//! 가격 시계열 데이터.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::params::Interval;
use super::symbol::Symbol;

/// 하나의 OHLCV 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// 캔들 시작 시각 (거래소 현지 오프셋)
    pub timestamp: DateTime<FixedOffset>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    /// 배당/분할 조정 종가 (제공자가 주지 않으면 None)
    pub adj_close: Option<Decimal>,
    pub volume: u64,
}

/// 심볼 하나의 시계열. 행은 항상 시간 오름차순입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub symbol: Symbol,
    pub interval: Interval,
    bars: Vec<Bar>,
}

impl TimeSeries {
    /// 시계열을 생성합니다. 행은 시간순으로 정렬됩니다.
    pub fn new(symbol: Symbol, interval: Interval, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        Self {
            symbol,
            interval,
            bars,
        }
    }

    /// 행이 없는 시계열.
    pub fn empty(symbol: Symbol, interval: Interval) -> Self {
        Self::new(symbol, interval, Vec::new())
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// 시간 표기 형식.
    ///
    /// 일봉 이상은 날짜만, 분봉/시간봉은 오프셋을 포함한 시각을 사용합니다.
    pub fn timestamp_format(&self) -> &'static str {
        if self.interval.is_intraday() {
            "%Y-%m-%d %H:%M:%S%:z"
        } else {
            "%Y-%m-%d"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn bar(day: u32) -> Bar {
        let ts = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, day, 0, 0, 0)
            .unwrap();
        Bar {
            timestamp: ts,
            open: dec!(100),
            high: dec!(110),
            low: dec!(95),
            close: dec!(105),
            adj_close: None,
            volume: 1_000,
        }
    }

    #[test]
    fn test_series_sorted_ascending() {
        let series = TimeSeries::new(
            Symbol::new("AAPL").unwrap(),
            Interval::D1,
            vec![bar(3), bar(1), bar(2)],
        );
        let days: Vec<u32> = series
            .bars()
            .iter()
            .map(|b| chrono::Datelike::day(&b.timestamp))
            .collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_empty_series() {
        let series = TimeSeries::empty(Symbol::new("AAPL").unwrap(), Interval::D1);
        assert!(series.is_empty());
    }

    #[test]
    fn test_timestamp_format() {
        let daily = TimeSeries::empty(Symbol::new("AAPL").unwrap(), Interval::D1);
        let hourly = TimeSeries::empty(Symbol::new("AAPL").unwrap(), Interval::H1);
        assert_eq!(daily.timestamp_format(), "%Y-%m-%d");
        assert_eq!(hourly.timestamp_format(), "%Y-%m-%d %H:%M:%S%:z");
    }
}
