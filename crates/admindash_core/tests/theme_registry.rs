use admindash_core::{BaseTheme, RegistryError, Theme, ThemeRegistry};
use std::sync::Arc;

fn registry_with(names: &[&str]) -> (ThemeRegistry, Vec<Arc<dyn Theme>>) {
    let themes: Vec<Arc<dyn Theme>> = names
        .iter()
        .map(|name| Arc::new(BaseTheme::new(*name)) as Arc<dyn Theme>)
        .collect();
    let registry = ThemeRegistry::new(Arc::clone(&themes[0])).unwrap();
    for theme in &themes[1..] {
        registry.register(Arc::clone(theme)).unwrap();
    }
    (registry, themes)
}

#[test]
fn get_returns_exact_registered_instance() {
    let (registry, themes) = registry_with(&["first", "second"]);

    assert!(Arc::ptr_eq(&registry.get("second"), &themes[1]));
    assert!(Arc::ptr_eq(&registry.get("first"), &themes[0]));
}

#[test]
fn empty_and_unknown_names_fall_back_to_default() {
    let (registry, themes) = registry_with(&["first", "second"]);
    let default = registry.get_default();

    assert!(Arc::ptr_eq(&default, &themes[0]));
    assert!(Arc::ptr_eq(&registry.get(""), &default));
    assert!(Arc::ptr_eq(&registry.get("missing"), &default));
}

#[test]
fn register_replaces_existing_name() {
    let (registry, themes) = registry_with(&["first", "second"]);
    let replacement: Arc<dyn Theme> = Arc::new(BaseTheme::new("second").with_body_class("v2"));

    registry.register(Arc::clone(&replacement)).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(Arc::ptr_eq(&registry.get("second"), &replacement));
    assert!(!Arc::ptr_eq(&registry.get("second"), &themes[1]));
}

#[test]
fn replacing_default_updates_default_lookup() {
    let (registry, _) = registry_with(&["first"]);
    let replacement: Arc<dyn Theme> = Arc::new(BaseTheme::new("first").with_body_class("v2"));

    registry.register(Arc::clone(&replacement)).unwrap();

    assert!(Arc::ptr_eq(&registry.get_default(), &replacement));
    assert!(Arc::ptr_eq(&registry.get("unknown"), &replacement));
}

#[test]
fn first_registered_theme_stays_default() {
    let (registry, _) = registry_with(&["alpha", "beta", "gamma"]);

    assert_eq!(registry.default_name(), "alpha");
    assert_eq!(registry.names(), vec!["alpha", "beta", "gamma"]);
    assert!(registry.contains("beta"));
    assert_eq!(registry.len(), 3);
}

#[test]
fn set_default_switches_fallback_target() {
    let (registry, themes) = registry_with(&["alpha", "beta"]);

    registry.set_default("beta").unwrap();
    assert!(Arc::ptr_eq(&registry.get(""), &themes[1]));

    let err = registry.set_default("gamma").unwrap_err();
    assert_eq!(err, RegistryError::ThemeNotFound("gamma".to_string()));
    assert_eq!(registry.default_name(), "beta");
}

#[test]
fn concurrent_reads_resolve_consistently() {
    let registry = ThemeRegistry::with_builtin_themes().unwrap();
    let expected = registry.get("tabler");

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..200 {
                    assert!(Arc::ptr_eq(&registry.get("tabler"), &expected));
                    assert_eq!(registry.get("").name(), "bootstrap");
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..50 {
                registry
                    .register(Arc::new(BaseTheme::new("scratch")))
                    .unwrap();
            }
        });
    });

    assert!(registry.contains("scratch"));
}
