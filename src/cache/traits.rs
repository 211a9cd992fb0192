use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 找到缓存值
    Found(T),
    /// 键不存在
    NotFound,
    /// 键存在但取值失败（连接错误等）
    ExistsButNoValue,
}

/// 对象缓存抽象，后端可插拔（Moka / Redis）
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}
