// i18n/preferences.rs
use crate::i18n::Language;
use std::collections::HashMap;
use tracing::debug;

pub const LANGUAGE_KEY: &str = "easylease-language";

// One year; the choice outlives the session.
const COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

/// Where UI preferences are persisted between visits.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str);
}

/// Test and fallback store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Backed by the visitor's cookies: reads the request `Cookie` header and
/// queues `Set-Cookie` values for the response.
#[derive(Debug, Default, Clone)]
pub struct CookieStore {
    cookies: HashMap<String, String>,
    outgoing: Vec<String>,
}

impl CookieStore {
    pub fn from_header(header: Option<&str>) -> Self {
        let mut cookies = HashMap::new();

        if let Some(raw) = header {
            for pair in raw.split(';') {
                let mut parts = pair.trim().splitn(2, '=');
                if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                    cookies.insert(k.trim().to_string(), v.trim().to_string());
                }
            }
        }

        Self {
            cookies,
            outgoing: Vec::new(),
        }
    }

    pub fn set_cookie_headers(&self) -> &[String] {
        &self.outgoing
    }
}

impl PreferenceStore for CookieStore {
    fn load(&self, key: &str) -> Option<String> {
        self.cookies.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.cookies.insert(key.to_string(), value.to_string());
        self.outgoing.push(format!(
            "{key}={value}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax"
        ));
    }
}

/// Current UI language, loaded from and written through a `PreferenceStore`.
pub struct LanguageState<S: PreferenceStore> {
    language: Language,
    store: S,
}

impl<S: PreferenceStore> LanguageState<S> {
    /// Anything other than a supported code in the store means the default.
    pub fn load(store: S) -> Self {
        let language = store
            .load(LANGUAGE_KEY)
            .and_then(|code| code.parse().ok())
            .unwrap_or_default();

        Self { language, store }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        debug!(language = language.code(), "language changed");
        self.language = language;
        self.store.store(LANGUAGE_KEY, language.code());
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
