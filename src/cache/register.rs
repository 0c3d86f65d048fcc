//! 缓存插件注册表
//!
//! 各后端文件通过 `declare_object_cache_plugin!` 在进程启动时
//! 把构造函数登记到这里，启动流程再按配置取用。

use crate::cache::traits::ObjectCache;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 注册缓存插件（同名覆盖）
pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    OBJECT_CACHE_REGISTRY
        .write()
        .expect("Object cache registry lock poisoned")
        .insert(name.into(), constructor);
}

/// 按名称取插件构造函数
pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .expect("Object cache registry lock poisoned")
        .get(name)
        .cloned()
}

/// 已注册的插件名列表（按字典序）
pub fn registered_plugin_names() -> Vec<String> {
    let mut names: Vec<String> = OBJECT_CACHE_REGISTRY
        .read()
        .expect("Object cache registry lock poisoned")
        .keys()
        .cloned()
        .collect();
    names.sort();
    names
}

/// 调试输出当前注册表内容
pub fn debug_object_cache_registry() {
    let names = registered_plugin_names();
    if names.is_empty() {
        tracing::debug!("No object cache plugins registered.");
    } else {
        tracing::debug!("Registered object cache plugins: {}", names.join(", "));
    }
}
