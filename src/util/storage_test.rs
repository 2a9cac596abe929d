use super::*;

#[test]
fn memory_store_misses_unknown_key() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_overwrites_in_place() {
    let store = MemoryStore::new();
    store.set("theme", "dark");
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    other.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_browser() {
    BrowserStorage.set("theme", "dark");
    assert_eq!(BrowserStorage.get("theme"), None);
}
