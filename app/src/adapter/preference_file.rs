use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Deserialize;

use crate::localization::Language;
use crate::port::LanguagePreferenceStore;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub file: PathBuf,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(".lueften-language"),
        }
    }
}

impl PreferencesConfig {
    pub fn new_store(&self) -> FileLanguagePreference {
        FileLanguagePreference::new(&self.file)
    }
}

/// Keeps the two-letter code of the preferred language in a text file.
#[derive(Debug, Clone)]
pub struct FileLanguagePreference {
    path: PathBuf,
}

impl FileLanguagePreference {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LanguagePreferenceStore for FileLanguagePreference {
    fn load(&self) -> Result<Option<Language>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Error reading language preference {}", self.path.display()));
            }
        };

        let language = Language::from_code(&content);

        if language.is_none() {
            tracing::warn!(
                "Ignoring unknown language preference '{}' in {}",
                content.trim(),
                self.path.display()
            );
        }

        Ok(language)
    }

    fn save(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Error creating directory {}", parent.display()))?;
        }

        std::fs::write(&self.path, format!("{}\n", language.code()))
            .with_context(|| format!("Error writing language preference {}", self.path.display()))?;

        tracing::debug!("Saved language preference {} to {}", language, self.path.display());
        Ok(())
    }
}
