//! Yahoo Finance chart API(v8) 제공자.
//!
//! `https://query1.finance.yahoo.com/v8/finance/chart/{symbol}`를 직접 호출합니다.
//!
//! # 기간 처리
//!
//! - `Period::Max` → 간격별 최대 range (일봉 이상 `max`, 시간봉 `730d`, 분봉 `60d`/`7d`)
//! - `Period::Range` → range 토큰 그대로 전달
//! - `Period::Between` → `period1`/`period2` UNIX 타임스탬프
//!
//! # 응답 처리
//!
//! - `chart.error`가 있으면 제공자 오류 (HTTP 404 본문에도 포함됨)
//! - 타임스탬프가 없거나 결과가 비어 있으면 빈 시계열
//! - OHLC 중 하나라도 비어 있는 행은 건너뜀
//! - 시각은 거래소 시간대(`exchangeTimezoneName`)로 변환

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use stockvault_core::{Bar, FetchParameters, Interval, Period, Symbol, TimeSeries};

use super::TimeSeriesProvider;
use crate::error::{DataError, DataResult};

/// 기본 API 주소.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// 가격 소수점 자릿수.
const PRICE_DP: u32 = 6;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance v8 응답 구조
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i32,
    exchange_timezone_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
    adjclose: Option<Vec<AdjClose>>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<i64>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// Yahoo Finance chart API 제공자.
#[derive(Debug, Clone)]
pub struct YahooChartProvider {
    client: Client,
    base_url: String,
}

impl YahooChartProvider {
    /// 요청 타임아웃을 지정해 제공자를 생성합니다.
    pub fn new(timeout: Duration) -> DataResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// API 주소를 변경합니다 (테스트/프록시용).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// 조회 파라미터를 쿼리 문자열 쌍으로 변환.
    fn query_params(params: &FetchParameters) -> Vec<(&'static str, String)> {
        let mut query = vec![("interval", params.interval.as_str().to_string())];

        match &params.period {
            Period::Max => query.push(("range", params.interval.max_range().to_string())),
            Period::Range(token) => query.push(("range", token.clone())),
            Period::Between { start, end } => {
                let period1 = start.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp());
                let period2 = end
                    .and_hms_opt(23, 59, 59)
                    .map(|dt| dt.and_utc().timestamp());
                if let (Some(p1), Some(p2)) = (period1, period2) {
                    query.push(("period1", p1.to_string()));
                    query.push(("period2", p2.to_string()));
                }
            }
        }

        query.push(("events", "div,splits".to_string()));
        query.push(("includeAdjustedClose", "true".to_string()));
        query
    }
}

#[async_trait]
impl TimeSeriesProvider for YahooChartProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn fetch(&self, symbol: &Symbol, params: &FetchParameters) -> DataResult<TimeSeries> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        debug!(symbol = %symbol, %params, "Yahoo Finance 요청");

        let response = self
            .client
            .get(&url)
            .query(&Self::query_params(params))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(symbol = %symbol, status, bytes = body.len(), "Yahoo Finance 응답 수신");

        parse_chart(symbol, params.interval, status, &body)
    }
}

/// chart 응답 본문을 시계열로 변환.
fn parse_chart(
    symbol: &Symbol,
    interval: Interval,
    status: u16,
    body: &str,
) -> DataResult<TimeSeries> {
    let response: ChartResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => {
            return Err(DataError::Http {
                status,
                body: body.chars().take(200).collect(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(error) = response.chart.error {
        return Err(DataError::Api {
            code: error.code,
            description: error.description,
        });
    }

    if !(200..300).contains(&status) {
        return Err(DataError::Http {
            status,
            body: body.chars().take(200).collect(),
        });
    }

    let Some(result) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(TimeSeries::empty(symbol.clone(), interval));
    };

    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adj_closes = result
        .indicators
        .adjclose
        .and_then(|ac| ac.into_iter().next())
        .map(|ac| ac.adjclose)
        .unwrap_or_default();

    let tz = result
        .meta
        .exchange_timezone_name
        .as_deref()
        .and_then(|name| name.parse::<Tz>().ok());
    let fallback_offset =
        FixedOffset::east_opt(result.meta.gmtoffset).unwrap_or_else(|| Utc.fix());

    let bars: Vec<Bar> = timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let utc = DateTime::<Utc>::from_timestamp(ts, 0)?;
            let timestamp = match tz {
                Some(tz) => utc.with_timezone(&tz).fixed_offset(),
                None => utc.with_timezone(&fallback_offset),
            };

            Some(Bar {
                timestamp,
                open: value_at(&quote.open, i)?,
                high: value_at(&quote.high, i)?,
                low: value_at(&quote.low, i)?,
                close: value_at(&quote.close, i)?,
                adj_close: value_at(&adj_closes, i),
                volume: quote
                    .volume
                    .get(i)
                    .copied()
                    .flatten()
                    .map(|v| v.max(0) as u64)
                    .unwrap_or(0),
            })
        })
        .collect();

    Ok(TimeSeries::new(symbol.clone(), interval, bars))
}

fn value_at(series: &[Option<f64>], i: usize) -> Option<Decimal> {
    series.get(i).copied().flatten().and_then(to_decimal)
}

fn to_decimal(v: f64) -> Option<Decimal> {
    if !v.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(v).map(|d| d.round_dp(PRICE_DP).normalize())
}
