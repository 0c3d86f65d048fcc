//! 对象缓存层
//!
//! 通过插件注册表在启动时选择后端（Moka 内存缓存或 Redis），
//! Redis 不可用时自动回退到 Moka。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};
