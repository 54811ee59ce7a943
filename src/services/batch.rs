//! 多只股票批量行情服务
//!
//! 按输入顺序逐只顺序抓取；同一代码（规范化后）只保留第一次出现

use std::collections::HashMap;

use crate::config::QuoteConfig;
use crate::error::QuoteError;
use crate::models::quote::normalize_symbol;
use crate::models::{QuoteQuery, StockQuote, StockQuotes};
use crate::services::yahoo::fetch_history;

/// 批量获取多只股票的历史行情
///
/// 查询参数中省略的字段按 [`QuoteQuery`] 的默认规则补全；
/// 任一只股票抓取失败则整批失败，不返回部分结果
pub fn get_stock_quotes(
    symbols: &[String],
    query: &QuoteQuery,
    config: &QuoteConfig,
) -> Result<StockQuotes, QuoteError> {
    let (from_date, to_date, resolution) = query.resolve()?;

    collect_quotes(symbols, |symbol| {
        fetch_history(symbol, from_date, to_date, resolution, config)
    })
}

/// 顺序遍历代码列表，规范化去重后逐只调用 fetch 并汇总
///
/// 请求使用原始代码文本，结果以规范化代码为键
fn collect_quotes<F>(symbols: &[String], mut fetch: F) -> Result<StockQuotes, QuoteError>
where
    F: FnMut(&str) -> Result<StockQuote, QuoteError>,
{
    let mut quotes = HashMap::new();

    for symbol in symbols {
        let key = normalize_symbol(symbol);
        if quotes.contains_key(&key) {
            continue;
        }
        let quote = fetch(symbol)?;
        quotes.insert(key, quote);
    }

    Ok(StockQuotes { quotes })
}
