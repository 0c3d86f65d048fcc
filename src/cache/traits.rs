use async_trait::async_trait;

/// 缓存读取结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    // 后端暂时不可用等情况，调用方按未命中处理
    ExistsButNoValue,
}

/// 对象缓存统一接口
///
/// 值以 JSON 字符串存取，序列化由调用方负责。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明一个缓存插件并在进程启动时注册到全局注册表
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_plugin_ $ty:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        let fut: $crate::cache::register::BoxedObjectCacheFuture =
                            Box::pin(async {
                                let cache = $ty::new()
                                    .map_err($crate::errors::SRSystemError::cache_connection)?;
                                Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                            });
                        fut
                    }),
                );
            }
        }
    };
}
