use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub(crate) mod en;
pub(crate) mod es;
pub mod preferences;

pub use preferences::{CookieStore, LanguageState, MemoryStore, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Formats dates the way each audience expects.
    pub fn date_format(&self) -> &'static str {
        match self {
            Language::En => "%b %-d, %Y",
            Language::Es => "%-d %b %Y",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

static EN: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| en::ENTRIES.iter().copied().collect());
static ES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| es::ENTRIES.iter().copied().collect());

/// Look up `key` for `lang`; unknown keys come back verbatim.
pub fn get_translation<'a>(lang: Language, key: &'a str) -> &'a str {
    let dict = match lang {
        Language::En => &*EN,
        Language::Es => &*ES,
    };
    match dict.get(key) {
        Some(text) => *text,
        None => key,
    }
}

/// Lookup plus `{name}` placeholder substitution.
pub fn translate_with(lang: Language, key: &str, args: &[(&str, &str)]) -> String {
    let mut text = get_translation(lang, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
