//! 그룹 → 심볼 목록 리졸버.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use stockvault_core::{CoreError, Group, Symbol};
use tracing::{error, info, warn};

use super::{StaticSymbolSource, SymbolSource, WikipediaTableSource};
use crate::error::DataResult;

/// 그룹별 심볼 소스를 보관하고 정규화된 목록을 만듭니다.
#[derive(Clone, Default)]
pub struct GroupResolver {
    sources: HashMap<Group, Arc<dyn SymbolSource>>,
}

impl GroupResolver {
    /// 소스가 없는 빈 리졸버.
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본 소스 구성 (위키피디아 + 고정 목록).
    pub fn standard(timeout: Duration) -> DataResult<Self> {
        Ok(Self::new()
            .with_source(Group::Sp500, WikipediaTableSource::sp500(timeout)?)
            .with_source(Group::Nasdaq100, WikipediaTableSource::nasdaq100(timeout)?)
            .with_source(Group::HangSengTech, StaticSymbolSource::hang_seng_tech())
            .with_source(Group::Mag7, StaticSymbolSource::mag7()))
    }

    /// 그룹의 소스를 등록(교체)합니다.
    pub fn with_source(mut self, group: Group, source: impl SymbolSource + 'static) -> Self {
        self.sources.insert(group, Arc::new(source));
        self
    }

    /// 그룹의 심볼 목록을 반환합니다.
    ///
    /// 모든 심볼은 정규화되고, 첫 등장 순서를 유지한 채 중복이 제거됩니다.
    /// 소스 조회가 실패하면 에러를 로그로 남기고 빈 목록을 반환합니다.
    /// 호출자는 빈 목록을 "할 일 없음"으로 취급해야 합니다.
    pub async fn resolve(&self, group: Group) -> Vec<Symbol> {
        let Some(source) = self.sources.get(&group) else {
            error!(group = %group, "심볼 소스가 등록되지 않은 그룹");
            return Vec::new();
        };

        info!(group = %group, source = source.name(), "심볼 목록 조회");

        match source.fetch_raw().await {
            Ok(raw) => {
                let raw_count = raw.len();
                let symbols = normalize_unique(raw);
                if symbols.len() != raw_count {
                    warn!(
                        group = %group,
                        raw = raw_count,
                        unique = symbols.len(),
                        "중복 또는 잘못된 심볼 제거"
                    );
                }
                info!(group = %group, count = symbols.len(), "심볼 목록 확보");
                symbols
            }
            Err(e) => {
                error!(group = %group, source = source.name(), error = %e, "심볼 목록 조회 실패");
                Vec::new()
            }
        }
    }
}

/// 정규화 후 첫 등장 순서대로 중복을 제거합니다.
///
/// 빈 항목과 URL/파일명에 쓸 수 없는 항목은 버립니다.
pub fn normalize_unique<I, S>(raw: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|s| match Symbol::normalized(s) {
            Ok(symbol) => Some(symbol),
            Err(CoreError::EmptySymbol) => None,
            Err(e) => {
                warn!(error = %e, "심볼 항목 제외");
                None
            }
        })
        .filter(|symbol| seen.insert(symbol.clone()))
        .collect()
}
