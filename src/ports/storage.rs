/// Durable string key-value store backing the in-memory state. A missing
/// key is `Ok(None)`, not an error.
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    fn get(&self, key: &str) -> std::io::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> std::io::Result<()>;
}
