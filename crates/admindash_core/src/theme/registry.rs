//! In-process theme registry and default selection.
//!
//! # Invariants
//! - A registry always holds at least one theme, so lookups never fail.
//! - Registering an existing name replaces the previous entry.
//! - The first registered theme is the default until `set_default` changes it.
//! - Empty or unknown names resolve to the default theme.

use crate::theme::adminlte::AdminLteTheme;
use crate::theme::{bootstrap, tabler, Theme};
use log::{debug, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Theme registry errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidThemeName(String),
    ThemeNotFound(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidThemeName(value) => write!(f, "theme name is invalid: `{value}`"),
            Self::ThemeNotFound(value) => write!(f, "theme not found: {value}"),
        }
    }
}

impl Error for RegistryError {}

struct RegistryState {
    themes: BTreeMap<String, Arc<dyn Theme>>,
    default_name: String,
    default_theme: Arc<dyn Theme>,
}

/// Name-to-theme directory shared by request handlers.
///
/// Reads take a shared lock and run concurrently; `register` and
/// `set_default` take the exclusive lock briefly.
pub struct ThemeRegistry {
    state: RwLock<RegistryState>,
}

impl ThemeRegistry {
    /// Creates a registry whose first entry, and default, is `theme`.
    ///
    /// # Errors
    /// - `InvalidThemeName` when the theme name is not a valid registry id.
    pub fn new(theme: Arc<dyn Theme>) -> Result<Self, RegistryError> {
        let name = validated_name(theme.as_ref())?;
        let mut themes = BTreeMap::new();
        themes.insert(name.clone(), Arc::clone(&theme));
        info!("event=theme_register module=registry status=ok theme={name} replaced=false");
        Ok(Self {
            state: RwLock::new(RegistryState {
                themes,
                default_name: name,
                default_theme: theme,
            }),
        })
    }

    /// Registry with `bootstrap` (default), `adminlte`, and `tabler`.
    ///
    /// # Errors
    /// - `InvalidThemeName` if a built-in theme carries an invalid name.
    pub fn with_builtin_themes() -> Result<Self, RegistryError> {
        let registry = Self::new(Arc::new(bootstrap::theme()))?;
        registry.register(Arc::new(AdminLteTheme::new()))?;
        registry.register(Arc::new(tabler::theme()))?;
        Ok(registry)
    }

    /// Registers one theme, replacing any entry with the same name.
    ///
    /// # Errors
    /// - `InvalidThemeName` when the theme name is blank or contains
    ///   characters outside `[a-z0-9_-]`.
    pub fn register(&self, theme: Arc<dyn Theme>) -> Result<(), RegistryError> {
        let name = validated_name(theme.as_ref())?;
        let mut state = self.write();
        if state.default_name == name {
            state.default_theme = Arc::clone(&theme);
        }
        let replaced = state.themes.insert(name.clone(), theme).is_some();
        drop(state);
        info!("event=theme_register module=registry status=ok theme={name} replaced={replaced}");
        Ok(())
    }

    /// Designates an already registered theme as the default.
    pub fn set_default(&self, name: &str) -> Result<(), RegistryError> {
        let normalized = name.trim();
        let mut state = self.write();
        let Some(theme) = state.themes.get(normalized).cloned() else {
            return Err(RegistryError::ThemeNotFound(normalized.to_string()));
        };
        state.default_name = normalized.to_string();
        state.default_theme = theme;
        drop(state);
        info!("event=theme_default module=registry status=ok theme={normalized}");
        Ok(())
    }

    /// Returns the theme registered under `name`, or the default theme when
    /// `name` is empty or unknown.
    pub fn get(&self, name: &str) -> Arc<dyn Theme> {
        let normalized = name.trim();
        let state = self.read();
        if let Some(theme) = state.themes.get(normalized) {
            return Arc::clone(theme);
        }
        if !normalized.is_empty() {
            debug!(
                "event=theme_fallback module=registry requested={normalized} theme={}",
                state.default_name
            );
        }
        Arc::clone(&state.default_theme)
    }

    pub fn get_default(&self) -> Arc<dyn Theme> {
        Arc::clone(&self.read().default_theme)
    }

    pub fn default_name(&self) -> String {
        self.read().default_name.clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().themes.contains_key(name.trim())
    }

    /// Returns sorted theme names.
    pub fn names(&self) -> Vec<String> {
        self.read().themes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().themes.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn validated_name(theme: &dyn Theme) -> Result<String, RegistryError> {
    let name = theme.name().trim().to_string();
    if !is_valid_theme_name(&name) {
        return Err(RegistryError::InvalidThemeName(name));
    }
    Ok(name)
}

fn is_valid_theme_name(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::{RegistryError, ThemeRegistry};
    use crate::theme::{BaseTheme, Theme};
    use std::sync::Arc;

    #[test]
    fn builtin_registry_defaults_to_bootstrap() {
        let registry = ThemeRegistry::with_builtin_themes().expect("built-in themes register");
        assert_eq!(registry.names(), vec!["adminlte", "bootstrap", "tabler"]);
        assert_eq!(registry.get_default().name(), "bootstrap");
        assert_eq!(registry.get("  tabler  ").name(), "tabler");
    }

    #[test]
    fn builtin_registry_is_built_through_validated_registration() {
        let registry = ThemeRegistry::with_builtin_themes().expect("built-in themes register");
        for name in registry.names() {
            assert!(super::is_valid_theme_name(&name), "invalid built-in name {name}");
        }
        assert!(Arc::ptr_eq(&registry.get_default(), &registry.get("bootstrap")));
    }

    #[test]
    fn rejects_invalid_theme_names() {
        let registry = ThemeRegistry::with_builtin_themes().expect("built-in themes register");
        let invalid = registry.register(Arc::new(BaseTheme::new("Dark Mode")));
        assert!(matches!(invalid, Err(RegistryError::InvalidThemeName(_))));
        let blank = ThemeRegistry::new(Arc::new(BaseTheme::new("   ")));
        assert!(matches!(blank, Err(RegistryError::InvalidThemeName(_))));
    }

    #[test]
    fn set_default_requires_registered_name() {
        let registry = ThemeRegistry::with_builtin_themes().expect("built-in themes register");
        let err = registry
            .set_default("material")
            .expect_err("unknown default must fail");
        assert_eq!(err, RegistryError::ThemeNotFound("material".to_string()));

        registry
            .set_default("adminlte")
            .expect("registered theme should become default");
        assert_eq!(registry.get("").name(), "adminlte");
        assert_eq!(registry.default_name(), "adminlte");
    }
}
