//! 查询参数模型
//!
//! 数据粒度与可选查询参数的默认值处理

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// 行情数据粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// 日线
    #[serde(rename = "d")]
    Daily,
    /// 周线
    #[serde(rename = "w")]
    Weekly,
}

impl Resolution {
    /// 接口使用的单字符代码
    pub fn code(&self) -> &'static str {
        match self {
            Resolution::Daily => "d",
            Resolution::Weekly => "w",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Resolution {
    type Err = QuoteError;

    /// 输入先去空白并转小写，仅接受 "d" 与 "w"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" => Ok(Resolution::Daily),
            "w" => Ok(Resolution::Weekly),
            other => Err(QuoteError::InvalidArgument(format!(
                "数据粒度必须为 日线=\"d\" 或 周线=\"w\"，收到: \"{}\"",
                other
            ))),
        }
    }
}

/// 行情查询参数
///
/// 三个字段均可单独省略：
/// - to_date 缺省为当天
/// - from_date 缺省为 to_date 前 30 天
/// - resolution 缺省为日线
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteQuery {
    /// 开始日期
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    /// 结束日期
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    /// 数据粒度（"d" 或 "w"）
    #[serde(default)]
    pub resolution: Option<String>,
}

impl QuoteQuery {
    /// 应用默认值，返回（开始日期, 结束日期, 粒度）
    ///
    /// 粒度校验在任何网络请求之前完成
    pub fn resolve(&self) -> Result<(NaiveDate, NaiveDate, Resolution), QuoteError> {
        let resolution = match &self.resolution {
            Some(code) => code.parse()?,
            None => Resolution::Daily,
        };
        let to_date = self.to_date.unwrap_or_else(|| Local::now().date_naive());
        let from_date = self.from_date.unwrap_or_else(|| to_date - Duration::days(30));
        Ok((from_date, to_date, resolution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// 测试粒度代码解析
    #[test]
    fn test_resolution_from_str() {
        let cases = vec![
            ("d", Resolution::Daily),
            ("w", Resolution::Weekly),
            ("D", Resolution::Daily),
            (" W ", Resolution::Weekly),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Resolution>().unwrap(), expected);
        }

        assert!(matches!(
            "x".parse::<Resolution>(),
            Err(QuoteError::InvalidArgument(_))
        ));
        assert!(matches!(
            "".parse::<Resolution>(),
            Err(QuoteError::InvalidArgument(_))
        ));
    }

    /// 测试全部省略时的默认值
    #[test]
    fn test_resolve_all_defaults() {
        let (from, to, resolution) = QuoteQuery::default().resolve().unwrap();

        assert_eq!(to, Local::now().date_naive());
        assert_eq!(from, to - Duration::days(30));
        assert_eq!(resolution, Resolution::Daily);
    }

    /// 测试各字段可单独省略
    #[test]
    fn test_resolve_independent_defaults() {
        // 只给粒度
        let query = QuoteQuery {
            resolution: Some("w".to_string()),
            ..Default::default()
        };
        let (from, to, resolution) = query.resolve().unwrap();
        assert_eq!(resolution, Resolution::Weekly);
        assert_eq!(from, to - Duration::days(30));

        // 只给开始日期，结束日期缺省为当天
        let query = QuoteQuery {
            from_date: Some(date("2020-01-02")),
            ..Default::default()
        };
        let (from, to, resolution) = query.resolve().unwrap();
        assert_eq!(from, date("2020-01-02"));
        assert_eq!(to, Local::now().date_naive());
        assert_eq!(resolution, Resolution::Daily);

        // 只给结束日期，开始日期跟随结束日期前移 30 天
        let query = QuoteQuery {
            to_date: Some(date("2020-03-01")),
            ..Default::default()
        };
        let (from, to, _) = query.resolve().unwrap();
        assert_eq!(to, date("2020-03-01"));
        assert_eq!(from, date("2020-01-31"));
    }

    /// 测试非法粒度在解析阶段报错
    #[test]
    fn test_resolve_invalid_resolution() {
        let query = QuoteQuery {
            resolution: Some("x".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            query.resolve(),
            Err(QuoteError::InvalidArgument(_))
        ));
    }
}
