use anyhow::Result;

use crate::localization::Language;

pub trait LanguagePreferenceStore {
    /// Previously chosen language, `None` if nothing usable was stored.
    fn load(&self) -> Result<Option<Language>>;

    fn save(&self, language: Language) -> Result<()>;
}
