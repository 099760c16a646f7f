//! 수집기 테스트용 모의 제공자/소스.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, FixedOffset, TimeZone};
use rust_decimal_macros::dec;
use stockvault_core::{Bar, FetchParameters, Symbol, TimeSeries};
use stockvault_data::{DataError, DataResult, SymbolSource, TimeSeriesProvider};

/// 심볼별 모의 응답.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    Rows(usize),
    Empty,
    Fail,
    Panic,
}

/// 응답을 심볼별로 지정할 수 있는 모의 제공자.
///
/// 동시에 실행 중인 호출 수의 최댓값을 기록합니다.
pub struct MockProvider {
    default: Behavior,
    overrides: HashMap<String, Behavior>,
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(default: Behavior) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
            delay: Duration::ZERO,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with(mut self, symbol: &str, behavior: Behavior) -> Self {
        self.overrides.insert(symbol.to_string(), behavior);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TimeSeriesProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, symbol: &Symbol, params: &FetchParameters) -> DataResult<TimeSeries> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let behavior = self
            .overrides
            .get(symbol.as_str())
            .copied()
            .unwrap_or(self.default);

        match behavior {
            Behavior::Rows(n) => Ok(daily_series(symbol, params, n)),
            Behavior::Empty => Ok(TimeSeries::empty(symbol.clone(), params.interval)),
            Behavior::Fail => Err(DataError::Api {
                code: "Not Found".to_string(),
                description: format!("No data found for {}", symbol),
            }),
            Behavior::Panic => panic!("provider crashed on {}", symbol),
        }
    }
}

/// 2024-01-02부터 하루 간격의 시계열.
pub fn daily_series(symbol: &Symbol, params: &FetchParameters, rows: usize) -> TimeSeries {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let first = offset.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let bars = (0..rows)
        .map(|i| Bar {
            timestamp: first + ChronoDuration::days(i as i64),
            open: dec!(100),
            high: dec!(110),
            low: dec!(95),
            close: dec!(105),
            adj_close: Some(dec!(104.5)),
            volume: 1_000 + i as u64,
        })
        .collect();

    TimeSeries::new(symbol.clone(), params.interval, bars)
}

/// 항상 실패하는 심볼 소스 (접속 불가 상황).
pub struct UnreachableSource;

#[async_trait]
impl SymbolSource for UnreachableSource {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn fetch_raw(&self) -> DataResult<Vec<String>> {
        Err(DataError::Network("connection refused".to_string()))
    }
}

/// 주어진 목록을 그대로 반환하는 심볼 소스.
pub struct ListSource(pub Vec<String>);

#[async_trait]
impl SymbolSource for ListSource {
    fn name(&self) -> &str {
        "list"
    }

    async fn fetch_raw(&self) -> DataResult<Vec<String>> {
        Ok(self.0.clone())
    }
}

pub fn symbols(names: &[&str]) -> Vec<Symbol> {
    names.iter().map(|s| Symbol::new(s).unwrap()).collect()
}
