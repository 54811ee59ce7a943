//! 股票历史行情客户端库
//!
//! 按股票代码与日期区间从远程 CSV 接口抓取历史行情（日线/周线），
//! 解析为结构化的时间序列，并提供最高/最低价等汇总查询
//! 接口地址可通过配置替换，默认对接历史行情 CSV 接口

pub mod config;   // 配置
pub mod error;    // 错误类型
pub mod models;   // 数据模型定义
pub mod services; // 业务逻辑服务

pub use config::QuoteConfig;
pub use error::QuoteError;
pub use models::{PriceRecord, QuoteQuery, Resolution, Series, StockQuote, StockQuotes};
pub use services::{get_stock_quote, get_stock_quotes};
