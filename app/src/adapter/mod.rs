mod preference_file;

pub use preference_file::{FileLanguagePreference, PreferencesConfig};
