//! 行情数据模型
//!
//! 定义单条行情记录与时间序列结构

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// 单个交易日（或交易周）的行情记录
///
/// 包含 OHLCV 与复权收盘价
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PriceRecord {
    /// 日期
    pub date: NaiveDate,
    /// 开盘价
    pub open: f64,
    /// 最高价
    pub high: f64,
    /// 最低价
    pub low: f64,
    /// 收盘价
    pub close: f64,
    /// 成交量
    pub volume: u64,
    /// 复权收盘价
    pub adj_close: f64,
}

impl PriceRecord {
    /// 渲染回接口的 7 列 CSV 数据行格式
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.date.format("%Y-%m-%d"),
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.adj_close
        )
    }
}

/// 单只股票一次查询的行情序列
///
/// 记录按解析顺序保存，日期唯一；构造完成后只读
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Series {
    records: Vec<PriceRecord>,
}

impl Series {
    /// 由记录列表构造序列
    ///
    /// 出现重复日期时返回解析错误
    pub fn from_records(records: Vec<PriceRecord>) -> Result<Self, QuoteError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.date) {
                return Err(QuoteError::Parse(format!("日期重复: {}", record.date)));
            }
        }
        Ok(Self { records })
    }

    /// 记录条数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 序列是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 按解析顺序迭代记录
    pub fn iter(&self) -> impl Iterator<Item = &PriceRecord> {
        self.records.iter()
    }

    /// 全部记录（解析顺序）
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// 按日期查找记录
    pub fn get(&self, date: NaiveDate) -> Option<&PriceRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    // ==================== 最高/最低查询 ====================

    /// 极值扫描：按 field 取值，返回解析顺序中第一条达到极值的记录
    fn scan_extremum(
        &self,
        field: fn(&PriceRecord) -> f64,
        want: Ordering,
    ) -> Result<&PriceRecord, QuoteError> {
        let mut best: Option<&PriceRecord> = None;
        for record in &self.records {
            let better = match best {
                None => true,
                Some(b) => field(record).partial_cmp(&field(b)) == Some(want),
            };
            if better {
                best = Some(record);
            }
        }
        best.ok_or(QuoteError::EmptySeries)
    }

    /// 极值查询结果统一格式化为 "YYYY-MM-DD: 值"
    fn format_extremum(
        &self,
        field: fn(&PriceRecord) -> f64,
        want: Ordering,
    ) -> Result<String, QuoteError> {
        let record = self.scan_extremum(field, want)?;
        Ok(format!("{}: {}", record.date.format("%Y-%m-%d"), field(record)))
    }

    /// 区间内最高的最高价及其日期
    pub fn highest_high(&self) -> Result<String, QuoteError> {
        self.format_extremum(|r| r.high, Ordering::Greater)
    }

    /// 区间内最低的最高价及其日期
    pub fn lowest_high(&self) -> Result<String, QuoteError> {
        self.format_extremum(|r| r.high, Ordering::Less)
    }

    /// 区间内最高的最低价及其日期
    pub fn highest_low(&self) -> Result<String, QuoteError> {
        self.format_extremum(|r| r.low, Ordering::Greater)
    }

    /// 区间内最低的最低价及其日期
    pub fn lowest_low(&self) -> Result<String, QuoteError> {
        self.format_extremum(|r| r.low, Ordering::Less)
    }

    /// 区间内最高收盘价及其日期
    pub fn highest_close(&self) -> Result<String, QuoteError> {
        self.format_extremum(|r| r.close, Ordering::Greater)
    }

    /// 区间内最低收盘价及其日期
    pub fn lowest_close(&self) -> Result<String, QuoteError> {
        self.format_extremum(|r| r.close, Ordering::Less)
    }

    /// 区间内最高复权收盘价及其日期
    pub fn highest_adj_close(&self) -> Result<String, QuoteError> {
        self.format_extremum(|r| r.adj_close, Ordering::Greater)
    }

    /// 区间内最低复权收盘价及其日期
    pub fn lowest_adj_close(&self) -> Result<String, QuoteError> {
        self.format_extremum(|r| r.adj_close, Ordering::Less)
    }
}
