//! 위키피디아 구성 종목 표 스크래핑.
//!
//! 페이지의 `wikitable` 중 지정한 헤더 컬럼(예: "Symbol", "Ticker")을 가진
//! 첫 번째 표에서 해당 컬럼 값을 순서대로 추출합니다.
//! `id="constituents"` 표가 있으면 우선 사용합니다.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::SymbolSource;
use crate::error::{DataError, DataResult};

pub const SP500_URL: &str = "https://en.wikipedia.org/wiki/List_of_S%26P_500_companies";
pub const NASDAQ100_URL: &str = "https://en.wikipedia.org/wiki/Nasdaq-100";

const USER_AGENT: &str = "stockvault/0.1 (historical price archiver)";

/// 위키피디아 표 기반 심볼 소스.
#[derive(Debug, Clone)]
pub struct WikipediaTableSource {
    name: String,
    url: String,
    column: String,
    client: Client,
}

impl WikipediaTableSource {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        column: impl Into<String>,
        timeout: Duration,
    ) -> DataResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            name: name.into(),
            url: url.into(),
            column: column.into(),
            client,
        })
    }

    /// S&P 500 구성 종목 ("Symbol" 컬럼).
    pub fn sp500(timeout: Duration) -> DataResult<Self> {
        Self::new("Wikipedia S&P 500", SP500_URL, "Symbol", timeout)
    }

    /// Nasdaq-100 구성 종목 ("Ticker" 컬럼).
    pub fn nasdaq100(timeout: Duration) -> DataResult<Self> {
        Self::new("Wikipedia Nasdaq-100", NASDAQ100_URL, "Ticker", timeout)
    }
}

#[async_trait]
impl SymbolSource for WikipediaTableSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_raw(&self) -> DataResult<Vec<String>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Http {
                status: status.as_u16(),
                body: self.url.clone(),
            });
        }

        let html = response.text().await?;
        debug!(source = %self.name, bytes = html.len(), "페이지 수신");

        // Html은 Send가 아니므로 await 이후 동기 함수에서만 파싱
        extract_column(&html, &self.column)
    }
}

fn selector(css: &str) -> DataResult<Selector> {
    Selector::parse(css).map_err(|e| DataError::Parse(format!("selector {}: {}", css, e)))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// HTML 문서에서 `column` 헤더를 가진 표의 값을 추출합니다.
pub fn extract_column(html: &str, column: &str) -> DataResult<Vec<String>> {
    let document = Html::parse_document(html);
    let constituents = selector("table#constituents")?;
    let wikitables = selector("table.wikitable")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("th, td")?;
    let td_sel = selector("td")?;

    let tables = document
        .select(&constituents)
        .chain(document.select(&wikitables));

    for table in tables {
        let mut rows = table.select(&row_sel);

        // 헤더: td가 없는 첫 행
        let Some(header) = rows.by_ref().find(|row| row.select(&td_sel).next().is_none()) else {
            continue;
        };

        let Some(index) = header
            .select(&cell_sel)
            .map(cell_text)
            .position(|h| header_matches(&h, column))
        else {
            continue;
        };

        let values: Vec<String> = rows
            .filter(|row| row.select(&td_sel).next().is_some())
            .filter_map(|row| row.select(&cell_sel).nth(index).map(cell_text))
            .filter(|v| !v.is_empty())
            .collect();

        if !values.is_empty() {
            return Ok(values);
        }
    }

    Err(DataError::TableNotFound(format!(
        "'{}' 컬럼을 가진 표가 없습니다",
        column
    )))
}

/// "Symbol", "Symbol[1]", "symbol " 등을 같은 헤더로 취급.
fn header_matches(header: &str, column: &str) -> bool {
    let base = header.split('[').next().unwrap_or(header).trim();
    base.eq_ignore_ascii_case(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SP500_HTML: &str = r#"
        <html><body>
        <table class="wikitable sortable" id="constituents">
          <tbody>
            <tr><th>Symbol</th><th>Security</th><th>GICS Sector</th></tr>
            <tr><td><a href="/x">MMM</a></td><td>3M</td><td>Industrials</td></tr>
            <tr><td><a href="/x">BRK.B</a></td><td>Berkshire Hathaway</td><td>Financials</td></tr>
            <tr><td> AAPL </td><td>Apple Inc.</td><td>Information Technology</td></tr>
          </tbody>
        </table>
        <table class="wikitable" id="changes">
          <tr><th>Date</th><th>Added</th></tr>
          <tr><td>2024-01-01</td><td>XYZ</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extract_symbol_column() {
        let symbols = extract_column(SP500_HTML, "Symbol").unwrap();
        assert_eq!(symbols, vec!["MMM", "BRK.B", "AAPL"]);
    }

    #[test]
    fn test_extract_column_not_first() {
        let html = r#"
            <table class="wikitable">
              <tr><th>Company</th><th>Ticker[2]</th></tr>
              <tr><td>Adobe Inc.</td><td>ADBE</td></tr>
              <tr><td>AMD</td><td>AMD</td></tr>
            </table>
        "#;
        let symbols = extract_column(html, "Ticker").unwrap();
        assert_eq!(symbols, vec!["ADBE", "AMD"]);
    }

    #[test]
    fn test_missing_table() {
        let err = extract_column("<html><p>maintenance</p></html>", "Symbol").unwrap_err();
        assert!(matches!(err, DataError::TableNotFound(_)));
    }

    #[test]
    fn test_header_matches() {
        assert!(header_matches("Symbol", "symbol"));
        assert!(header_matches("Ticker[2]", "Ticker"));
        assert!(!header_matches("Security", "Symbol"));
    }
}
