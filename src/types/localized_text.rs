use crate::constants::DEFAULT_LOCALE;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedText {
    pub locale: String,
    pub text: String,
}

impl LocalizedText {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, "")
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
