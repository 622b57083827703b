mod messages;
mod strings;

use anyhow::Result;
use r#macro::EnumVariants;
use serde::Serialize;

pub use strings::LocalizedString;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumVariants, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    #[default]
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::variants()
            .iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
            .copied()
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::De => "🇩🇪",
            Language::En => "🇺🇸",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

pub type LanguageChangeListener = Box<dyn FnMut(Language) -> Result<()>>;

/// Active language of the presentation layer plus everyone interested in
/// changes of it.
pub struct Localization {
    language: Language,
    listeners: Vec<LanguageChangeListener>,
}

impl Localization {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            listeners: vec![],
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn add_listener(&mut self, listener: impl FnMut(Language) -> Result<()> + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        tracing::info!("Switching language from {} to {}", self.language, language);
        self.language = language;

        for listener in self.listeners.iter_mut() {
            listener(language)?;
        }

        Ok(())
    }

    pub fn label(&self, id: LocalizedString) -> &'static str {
        strings::label(self.language, id)
    }

    /// Selectable languages with their flag, the active one marked.
    pub fn language_selectors(&self) -> String {
        Language::variants()
            .iter()
            .map(|language| {
                if *language == self.language {
                    format!("[{} {}]", language.flag(), language.code())
                } else {
                    format!("{} {}", language.flag(), language.code())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
