#[cfg(target_arch = "wasm32")]
use web_sys::{window, Storage};

pub const THEME_KEY: &str = "portfolio-theme";
pub const LANG_KEY: &str = "portfolio-lang";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            Self::Dark => "",
            Self::Light => "light-mode",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    En,
    Pt,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Pt,
            Self::Pt => Self::En,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn read_stored(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn persist(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Absent or unrecognized stored values fall back to the dark default.
#[cfg(target_arch = "wasm32")]
pub fn load_theme() -> Theme {
    read_stored(THEME_KEY)
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or(Theme::Dark)
}

#[cfg(target_arch = "wasm32")]
pub fn load_language() -> Language {
    read_stored(LANG_KEY)
        .and_then(|value| Language::from_str(&value))
        .unwrap_or(Language::En)
}

#[cfg(target_arch = "wasm32")]
pub fn persist_theme(theme: Theme) {
    persist(THEME_KEY, theme.as_str());
}

#[cfg(target_arch = "wasm32")]
pub fn persist_language(language: Language) {
    persist(LANG_KEY, language.as_str());
}

#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        body.set_class_name(theme.body_class());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_and_rejects_junk() {
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("solarized"), None);
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn toggles_are_involutions() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Language::En.toggled(), Language::Pt);
        assert_eq!(Language::Pt.toggled().toggled(), Language::Pt);
    }

    #[test]
    fn language_round_trips_and_rejects_junk() {
        assert_eq!(Language::from_str("en"), Some(Language::En));
        assert_eq!(Language::from_str("pt"), Some(Language::Pt));
        assert_eq!(Language::from_str("de"), None);
    }
}
