//! Pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::pattern::Pattern;

/// Global cache for parsed patterns.
static CACHE: Mutex<Option<LruCache<String, Pattern>>> = Mutex::new(None);

const CACHE_SIZE: usize = 100;

/// Get or parse a pattern, using the cache. Parsing is lossy: malformed
/// sources become literal patterns.
pub fn get_or_parse(source: &str) -> Pattern {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache =
        cache_guard.get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(pattern) = cache.get(source) {
        return pattern.clone();
    }

    let pattern = Pattern::parse_lossy(source);
    cache.put(source.to_string(), pattern.clone());
    pattern
}
