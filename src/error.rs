//! 错误类型定义
//!
//! 整个 crate 共用一个错误枚举，按失败类别区分：
//! 参数校验、网络传输、数据解析、空序列查询

use thiserror::Error;

/// 行情抓取与查询的统一错误类型
#[derive(Error, Debug)]
pub enum QuoteError {
    /// 参数不合法（在发起任何网络请求之前返回）
    #[error("参数不合法: {0}")]
    InvalidArgument(String),

    /// 网络请求失败（连接失败、超时、非 2xx 状态码）
    #[error("网络请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    /// 响应数据解析失败（日期或数值字段无法转换）
    #[error("数据解析失败: {0}")]
    Parse(String),

    /// 对空序列执行最高/最低价查询
    #[error("数据序列为空")]
    EmptySeries,
}
