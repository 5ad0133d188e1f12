//! Runtime theme engine

use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Arc,
};

use empire_storage::{FilePreferenceStore, PreferenceStore};
use parking_lot::{Mutex, RwLock};

use crate::{
    config::ThemeEngineConfig,
    error::{Result, ThemeError},
    registry::ThemeRegistry,
    target::{theme_tokens, StyleTarget},
    types::{Theme, ThemeOverrides},
    variant::derive_variant,
};

/// Preference store key holding the active theme id
pub const THEME_PREFERENCE_KEY: &str = "empire-theme";

type ThemeListener = Arc<dyn Fn(&Theme) + Send + Sync>;

/// Holds the active theme and pushes it to the style target.
///
/// Cloning is cheap and every clone shares the same state, so one engine
/// built at startup can be handed to every consumer.
#[derive(Clone)]
pub struct ThemeEngine {
    /// Current active theme
    current_theme: Arc<RwLock<Theme>>,
    /// Theme change listeners
    listeners: Arc<Mutex<Vec<ThemeListener>>>,
    /// Held while a switch updates the theme, the target and the store
    switch_lock: Arc<Mutex<()>>,
    registry: ThemeRegistry,
    target: Arc<dyn StyleTarget>,
    store: Arc<dyn PreferenceStore>,
    preference_key: Arc<str>,
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("current_theme", &self.current_theme.read().id)
            .field("registry", &self.registry)
            .field("preference_key", &self.preference_key)
            .finish()
    }
}

impl ThemeEngine {
    /// Create an engine on the default theme, then restore any saved preference
    pub fn new(target: Arc<dyn StyleTarget>, store: Arc<dyn PreferenceStore>) -> Self {
        Self::from_config(&ThemeEngineConfig::default(), target, store)
    }

    /// Create an engine starting on `initial` if it names a built-in theme
    pub fn with_initial_theme(
        initial: &str,
        target: Arc<dyn StyleTarget>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self::from_config(
            &ThemeEngineConfig::default().with_initial_theme(initial),
            target,
            store,
        )
    }

    pub fn from_config(
        config: &ThemeEngineConfig,
        target: Arc<dyn StyleTarget>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        let registry = ThemeRegistry::new();
        let initial = config
            .initial_theme
            .as_deref()
            .and_then(|id| {
                let builtin = registry.get_builtin(id);
                if builtin.is_none() {
                    tracing::warn!("Unknown initial theme '{}', using default", id);
                }
                builtin
            })
            .unwrap_or_else(|| registry.default_theme());

        let engine = Self {
            current_theme: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            switch_lock: Arc::new(Mutex::new(())),
            registry,
            target,
            store,
            preference_key: Arc::from(config.preference_key.as_str()),
        };

        let theme = engine.get_current_theme();
        engine.apply_tokens(&theme);
        engine.notify_listeners(&theme);
        if config.load_preference_on_start {
            engine.load_theme_preference();
        }
        engine
    }

    /// Build from config with a file-backed preference store at
    /// `config.preference_file`, or `~/.empire/preferences.json` when unset
    pub fn from_config_with_file_store(
        config: &ThemeEngineConfig,
        target: Arc<dyn StyleTarget>,
    ) -> Result<Self> {
        let store = match &config.preference_file {
            Some(path) => FilePreferenceStore::new(path),
            None => FilePreferenceStore::with_default_location()?,
        };
        Ok(Self::from_config(config, target, Arc::new(store)))
    }

    /// Activate, apply and persist a theme. Unknown ids change nothing.
    ///
    /// Returns whether the id resolved to a theme. Concurrent switches from
    /// different clones are serialized, so the persisted id always matches
    /// the active theme. Listeners run after the switch has completed.
    pub fn set_theme(&self, id: &str) -> bool {
        let Some(theme) = self.registry.get(id) else {
            tracing::debug!("Ignoring switch to unknown theme '{}'", id);
            return false;
        };

        {
            let _switching = self.switch_lock.lock();
            *self.current_theme.write() = theme.clone();
            self.apply_tokens(&theme);
            self.save_theme_preference(&theme.id);
        }
        tracing::info!("Switched theme to '{}'", theme.id);

        self.notify_listeners(&theme);
        true
    }

    /// Snapshot of the active theme
    pub fn get_current_theme(&self) -> Theme {
        self.current_theme.read().clone()
    }

    pub fn current_id(&self) -> String {
        self.current_theme.read().id.clone()
    }

    /// Register or replace a custom theme. The active theme is not touched.
    pub fn register_custom_theme(&self, theme: Theme) {
        tracing::info!("Registered custom theme '{}'", theme.id);
        self.registry.register(theme);
    }

    /// Built-in themes followed by custom themes
    pub fn get_all_themes(&self) -> Vec<Theme> {
        self.registry.all()
    }

    pub fn get_theme(&self, id: &str) -> Option<Theme> {
        self.registry.get(id)
    }

    pub fn is_builtin(&self, id: &str) -> bool {
        self.registry.is_builtin(id)
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Restore the persisted theme, if any
    pub fn load_theme_preference(&self) {
        match self.store.get(&self.preference_key) {
            Ok(Some(id)) => {
                tracing::debug!("Restoring saved theme '{}'", id);
                self.set_theme(&id);
            }
            Ok(None) => tracing::debug!("No saved theme preference"),
            Err(e) => tracing::warn!("Failed to load theme preference: {}", e),
        }
    }

    /// Derive a new theme from a built-in or custom base.
    ///
    /// The result is neither registered nor activated.
    pub fn create_theme_variant(&self, base_id: &str, overrides: ThemeOverrides) -> Result<Theme> {
        let base = self
            .registry
            .get(base_id)
            .ok_or_else(|| ThemeError::NotFound(base_id.to_string()))?;
        Ok(derive_variant(&base, overrides))
    }

    /// Register a listener for theme changes.
    ///
    /// Listeners run synchronously after the style target has been updated.
    /// A panicking listener is logged and skipped.
    pub fn on_theme_changed<F>(&self, listener: F)
    where
        F: Fn(&Theme) + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(listener));
    }

    fn apply_tokens(&self, theme: &Theme) {
        for (name, value) in theme_tokens(theme) {
            self.target.set_property(&name, &value);
        }
        tracing::debug!("Applied theme '{}' to style target", theme.id);
    }

    fn notify_listeners(&self, theme: &Theme) {
        // Snapshot so listeners may call back into the engine.
        let listeners: Vec<ThemeListener> = self.listeners.lock().clone();
        for listener in listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(theme))).is_err() {
                tracing::warn!("Theme change listener panicked for '{}'", theme.id);
            }
        }
    }

    fn save_theme_preference(&self, id: &str) {
        if let Err(e) = self.store.set(&self.preference_key, id) {
            tracing::warn!("Failed to save theme preference '{}': {}", id, e);
        }
    }
}
