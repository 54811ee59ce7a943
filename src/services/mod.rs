//! 业务逻辑服务模块
//!
//! 封装行情抓取与批量查询逻辑

pub mod batch; // 批量查询
pub mod yahoo; // 历史行情 CSV 接口

pub use batch::*;
pub use yahoo::*;
