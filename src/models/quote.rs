//! 行情查询结果模型

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Resolution, Series};

/// 规范化股票代码：去空白并转小写，作为去重与查找的键
pub(crate) fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_lowercase()
}

/// 单只股票一次查询的完整结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    /// 股票代码（请求时的原始文本）
    pub symbol: String,
    /// 开始日期
    pub from_date: NaiveDate,
    /// 结束日期
    pub to_date: NaiveDate,
    /// 数据粒度
    pub resolution: Resolution,
    /// 实际请求的 URL
    pub url: String,
    /// 行情序列
    pub series: Series,
}

/// 多只股票的行情查询结果
///
/// 以规范化代码为键；同一代码只保留第一次出现的查询结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockQuotes {
    /// 规范化代码 -> 行情
    pub quotes: HashMap<String, StockQuote>,
}

impl StockQuotes {
    /// 按代码查找行情（查找前先做同样的规范化）
    pub fn get(&self, symbol: &str) -> Option<&StockQuote> {
        self.quotes.get(&normalize_symbol(symbol))
    }

    /// 结果条数
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// 结果是否为空
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
