//! # Theme — palette, typography, component defaults and color mode
//!
//! [`Theme`] is the single source of visual constants. [`ThemeProvider`] renders it
//! as CSS custom properties (`--brand-500`, `--font-body`, `--button-radius`, ...)
//! that the stylesheets in `assets/styling` consume, and exposes the current
//! [`ColorMode`] through context.
//!
//! The color mode starts light, ignores the system preference, and is remembered
//! in local storage under the configured key.

use dioxus::prelude::*;
use store::KeyValueStore;

use crate::storage::use_store;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

pub type ColorModeSignal = Signal<ColorMode>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// A ten-step color scale, lightest first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub shades: [(u16, &'static str); 10],
}

impl Palette {
    pub fn shade(&self, step: u16) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, hex)| *hex)
    }
}

pub const BRAND: Palette = Palette {
    name: "brand",
    shades: [
        (50, "#F0F9FF"),
        (100, "#E0F2FE"),
        (200, "#BAE6FD"),
        (300, "#7DD3FC"),
        (400, "#38BDF8"),
        (500, "#0EA5E9"),
        (600, "#0284C7"),
        (700, "#0369A1"),
        (800, "#075985"),
        (900, "#0C4A6E"),
    ],
};

pub const GRAY: Palette = Palette {
    name: "gray",
    shades: [
        (50, "#F7FAFC"),
        (100, "#EDF2F7"),
        (200, "#E2E8F0"),
        (300, "#CBD5E0"),
        (400, "#A0AEC0"),
        (500, "#718096"),
        (600, "#4A5568"),
        (700, "#2D3748"),
        (800, "#1A202C"),
        (900, "#171923"),
    ],
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fonts {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Style defaults applied by the shared components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentDefaults {
    pub button_font_weight: u16,
    pub button_radius: &'static str,
    pub icon_button_radius: &'static str,
    pub card_radius: &'static str,
    pub card_shadow: &'static str,
    pub card_padding: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub initial_mode: ColorMode,
    pub fonts: Fonts,
    pub palettes: [Palette; 2],
    pub components: ComponentDefaults,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            initial_mode: ColorMode::Light,
            fonts: Fonts {
                heading: "\"Inter\", sans-serif",
                body: "\"Inter\", sans-serif",
            },
            palettes: [BRAND, GRAY],
            components: ComponentDefaults {
                button_font_weight: 600,
                button_radius: "0.5rem",
                icon_button_radius: "0.5rem",
                card_radius: "0.75rem",
                card_shadow: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
                card_padding: "1.5rem",
            },
        }
    }
}

impl Theme {
    /// The theme as a `:root` block of CSS custom properties.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for palette in &self.palettes {
            for (step, hex) in palette.shades {
                css.push_str(&format!("  --{}-{}: {};\n", palette.name, step, hex));
            }
        }
        let c = &self.components;
        css.push_str(&format!("  --font-heading: {};\n", self.fonts.heading));
        css.push_str(&format!("  --font-body: {};\n", self.fonts.body));
        css.push_str(&format!("  --button-font-weight: {};\n", c.button_font_weight));
        css.push_str(&format!("  --button-radius: {};\n", c.button_radius));
        css.push_str(&format!("  --icon-button-radius: {};\n", c.icon_button_radius));
        css.push_str(&format!("  --card-radius: {};\n", c.card_radius));
        css.push_str(&format!("  --card-shadow: {};\n", c.card_shadow));
        css.push_str(&format!("  --card-padding: {};\n", c.card_padding));
        css.push('}');
        css
    }
}

/// Current color mode from context.
pub fn use_color_mode() -> ColorModeSignal {
    use_context::<ColorModeSignal>()
}

/// Flip the color mode and remember the choice in `store`.
pub fn toggle_color_mode(
    mode: &mut ColorModeSignal,
    store: &impl KeyValueStore,
    storage_key: &str,
) {
    let next = mode().toggled();
    mode.set(next);
    store.set(storage_key, next.as_str());
}

/// Storage key the provider persists the color mode under.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorModeKey(pub String);

/// Provides the theme variables and the color mode to its children. The mode is
/// read from and written to the store from [`StoreProvider`](crate::StoreProvider).
#[component]
pub fn ThemeProvider(
    #[props(default)] theme: Theme,
    #[props(default = store::COLOR_MODE_KEY.to_string())] storage_key: String,
    children: Element,
) -> Element {
    let store = use_store();
    let key = storage_key.clone();
    let mode = use_context_provider(move || {
        let stored = store
            .get(&key)
            .and_then(|value| ColorMode::parse(&value));
        Signal::new(stored.unwrap_or(theme.initial_mode))
    });
    use_context_provider(|| ColorModeKey(storage_key));

    let variables = theme.css_variables();

    rsx! {
        document::Stylesheet { href: THEME_CSS }
        document::Stylesheet { href: crate::components::COMPONENTS_CSS }
        style { "{variables}" }

        div {
            class: "app-root",
            "data-theme": mode().as_str(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_toggle_and_parse() {
        assert_eq!(ColorMode::default(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(ColorMode::parse("dark"), Some(ColorMode::Dark));
        assert_eq!(ColorMode::parse(" light "), Some(ColorMode::Light));
        assert_eq!(ColorMode::parse("system"), None);
    }

    #[test]
    fn test_brand_palette() {
        assert_eq!(BRAND.shade(500), Some("#0EA5E9"));
        assert_eq!(BRAND.shade(50), Some("#F0F9FF"));
        assert_eq!(BRAND.shade(950), None);
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
        assert!(css.contains("--brand-500: #0EA5E9;"));
        assert!(css.contains("--gray-900: #171923;"));
        assert!(css.contains("--font-body: \"Inter\", sans-serif;"));
        assert!(css.contains("--button-font-weight: 600;"));
        assert_eq!(css.matches("--brand-").count(), 10);
    }

    #[derive(Props, Clone)]
    struct SharedStoreProps {
        store: store::MemoryStore,
        seen: std::sync::Arc<std::sync::Mutex<Vec<ColorMode>>>,
    }

    impl PartialEq for SharedStoreProps {
        fn eq(&self, other: &Self) -> bool {
            std::sync::Arc::ptr_eq(&self.seen, &other.seen)
        }
    }

    fn shared_store_app(props: SharedStoreProps) -> Element {
        let store = props.store.clone();
        use_context_provider(move || store);
        let seen = props.seen.clone();
        use_context_provider(move || seen);
        rsx! {
            ThemeProvider {
                storage_key: "leadgen-color-mode",
                ToggleOnce {}
            }
        }
    }

    #[component]
    fn ToggleOnce() -> Element {
        let seen = use_context::<std::sync::Arc<std::sync::Mutex<Vec<ColorMode>>>>();
        let mut mode = use_color_mode();
        let store = use_store();
        let ColorModeKey(key) = use_context::<ColorModeKey>();
        use_hook(move || {
            seen.lock().unwrap().push(mode());
            toggle_color_mode(&mut mode, &store, &key);
            seen.lock().unwrap().push(mode());
        });
        rsx! {}
    }

    #[test]
    fn test_color_mode_uses_the_shared_store() {
        let store = store::MemoryStore::with_entry("leadgen-color-mode", "dark");
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut dom = dioxus::dioxus_core::VirtualDom::new_with_props(
            shared_store_app,
            SharedStoreProps {
                store: store.clone(),
                seen: seen.clone(),
            },
        );
        dom.rebuild_in_place();

        assert_eq!(*seen.lock().unwrap(), vec![ColorMode::Dark, ColorMode::Light]);
        assert_eq!(store.get("leadgen-color-mode").as_deref(), Some("light"));
    }
}
