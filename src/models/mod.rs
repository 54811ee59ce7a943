//! 数据模型定义
//!
//! 行情记录、时间序列、查询参数与查询结果

pub mod price;
pub mod query;
pub mod quote;

pub use price::*;
pub use query::*;
pub use quote::*;
