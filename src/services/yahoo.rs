//! 历史行情 CSV 接口实现
//!
//! 按股票代码与日期区间构造请求 URL，单次阻塞抓取并解析为行情序列
//! 默认接口地址见 config 模块，可通过配置替换

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;
use url::Url;

use crate::config::QuoteConfig;
use crate::error::QuoteError;
use crate::models::{PriceRecord, Resolution, Series, StockQuote};

/// 请求使用的 User-Agent
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// 获取单只股票的历史行情
///
/// 粒度字符串（"d"/"w"）在发起任何网络请求之前校验
pub fn get_stock_quote(
    symbol: &str,
    from_date: NaiveDate,
    to_date: NaiveDate,
    resolution: &str,
    config: &QuoteConfig,
) -> Result<StockQuote, QuoteError> {
    let resolution: Resolution = resolution.parse()?;
    fetch_history(symbol, from_date, to_date, resolution, config)
}

/// 构造请求 URL，执行一次阻塞 GET 并解析响应
///
/// 网络失败与非 2xx 状态直接向上传播，不重试
pub(crate) fn fetch_history(
    symbol: &str,
    from_date: NaiveDate,
    to_date: NaiveDate,
    resolution: Resolution,
    config: &QuoteConfig,
) -> Result<StockQuote, QuoteError> {
    let url = build_history_url(&config.base_url, symbol, from_date, to_date, resolution)?;
    log::debug!("请求历史行情: {}", url);

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()?;

    let response = client
        .get(url.as_str())
        .header("User-Agent", USER_AGENT)
        .send()?
        .error_for_status()?;

    let body = response.text()?;
    let series = parse_history_csv(&body)?;

    Ok(StockQuote {
        symbol: symbol.to_string(),
        from_date,
        to_date,
        resolution,
        url: url.to_string(),
        series,
    })
}

/// 构造历史行情请求 URL
///
/// 查询参数: s=代码, a/b/c=起始月(0 起)/日/年, d/e/f=结束月(0 起)/日/年,
/// g=粒度代码, ignore=.csv
fn build_history_url(
    base_url: &str,
    symbol: &str,
    from_date: NaiveDate,
    to_date: NaiveDate,
    resolution: Resolution,
) -> Result<Url, QuoteError> {
    let mut url = Url::parse(base_url).map_err(|e| {
        QuoteError::InvalidArgument(format!("接口地址不合法 \"{}\": {}", base_url, e))
    })?;

    url.query_pairs_mut()
        .append_pair("s", symbol)
        .append_pair("a", &from_date.month0().to_string())
        .append_pair("b", &from_date.day().to_string())
        .append_pair("c", &from_date.year().to_string())
        .append_pair("d", &to_date.month0().to_string())
        .append_pair("e", &to_date.day().to_string())
        .append_pair("f", &to_date.year().to_string())
        .append_pair("g", resolution.code())
        .append_pair("ignore", ".csv");

    Ok(url)
}

/// 解析历史行情 CSV 文本
///
/// 第 0 行为表头，丢弃；其余非空行按逗号切分为 7 列:
/// Date,Open,High,Low,Close,Volume,Adj Close，日期格式 yyyy-MM-dd
/// 任一行转换失败则整体返回解析错误，不保留部分结果
pub(crate) fn parse_history_csv(body: &str) -> Result<Series, QuoteError> {
    let mut records = Vec::new();

    for line in body.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 7 {
            return Err(QuoteError::Parse(format!(
                "数据列不足（需要 7 列，实际 {} 列）: {}",
                fields.len(),
                line
            )));
        }

        let date = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d").map_err(|e| {
            QuoteError::Parse(format!("日期格式不合法 \"{}\": {}", fields[0], e))
        })?;
        let volume = fields[5].parse::<u64>().map_err(|e| {
            QuoteError::Parse(format!("成交量不合法 \"{}\": {}", fields[5], e))
        })?;

        records.push(PriceRecord {
            date,
            open: parse_price(fields[1], "开盘价")?,
            high: parse_price(fields[2], "最高价")?,
            low: parse_price(fields[3], "最低价")?,
            close: parse_price(fields[4], "收盘价")?,
            volume,
            adj_close: parse_price(fields[6], "复权收盘价")?,
        });
    }

    Series::from_records(records)
}

/// 解析单个价格字段
fn parse_price(field: &str, name: &str) -> Result<f64, QuoteError> {
    field
        .parse::<f64>()
        .map_err(|e| QuoteError::Parse(format!("{}不合法 \"{}\": {}", name, field, e)))
}

// ==================== 测试模块 ====================
