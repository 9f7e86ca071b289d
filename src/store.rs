use crate::ports::storage::KeyValueStore;
use crate::types::subscription::Subscription;
use crate::types::theme::Theme;

/// The full collection is the unit of persistence: every save rewrites the
/// whole serialized sequence, never a diff.
pub(crate) const STORAGE_KEY: &str = "subscriptions.json";
pub(crate) const THEME_KEY: &str = "theme";

/// Missing or corrupt data degrades to the empty collection. The store must
/// never block startup, so problems are reported on stderr and absorbed.
pub(crate) fn load_subscriptions<K: KeyValueStore>(store: &K) -> Vec<Subscription> {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            eprintln!("storage warning: failed to read {STORAGE_KEY}: {err}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(subscriptions) => subscriptions,
        Err(err) => {
            eprintln!("storage warning: corrupt subscription data, starting empty: {err}");
            Vec::new()
        }
    }
}

pub(crate) fn save_subscriptions<K: KeyValueStore>(
    store: &K,
    subscriptions: &[Subscription],
) -> std::io::Result<()> {
    let raw = serde_json::to_string(subscriptions).map_err(std::io::Error::other)?;
    store.set(STORAGE_KEY, &raw)
}

pub(crate) fn load_theme<K: KeyValueStore>(store: &K) -> Theme {
    let raw = match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Theme::default(),
        Err(err) => {
            eprintln!("storage warning: failed to read {THEME_KEY}: {err}");
            return Theme::default();
        }
    };
    match Theme::parse(raw.trim()) {
        Some(theme) => theme,
        None => {
            eprintln!(
                "storage warning: unknown theme token '{}', using default",
                raw.trim()
            );
            Theme::default()
        }
    }
}

pub(crate) fn save_theme<K: KeyValueStore>(store: &K, theme: Theme) -> std::io::Result<()> {
    store.set(THEME_KEY, theme.as_token())
}
