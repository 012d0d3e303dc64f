use std::cell::RefCell;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// The icon offers the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Key-value storage holding the persisted theme.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Stored theme if it parses, else the page default.
pub fn resolve(store: &impl ThemeStore, default: Theme) -> Theme {
    store
        .load()
        .and_then(|value| Theme::parse(&value))
        .unwrap_or(default)
}

pub fn toggle(store: &impl ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.save(next.as_str());
    next
}

#[derive(Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_and_persists_original() {
        let store = MemoryThemeStore::with_value("dark");
        let original = resolve(&store, Theme::Light);
        assert_eq!(original, Theme::Dark);

        let once = toggle(&store, original);
        assert_eq!(once, Theme::Light);
        assert_eq!(store.load().as_deref(), Some("light"));

        let twice = toggle(&store, once);
        assert_eq!(twice, original);
        assert_eq!(store.load().as_deref(), Some("dark"));
    }

    #[test]
    fn missing_or_garbage_value_uses_page_default() {
        let empty = MemoryThemeStore::default();
        assert_eq!(resolve(&empty, Theme::Dark), Theme::Dark);

        let garbage = MemoryThemeStore::with_value("sepia");
        assert_eq!(resolve(&garbage, Theme::Light), Theme::Light);
    }

    #[test]
    fn icon_and_label_point_at_next_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.pressed(), true);
    }
}
