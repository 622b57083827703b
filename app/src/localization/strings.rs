use r#macro::EnumVariants;

use super::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumVariants)]
pub enum LocalizedString {
    SiteTitle,
    Temperature,
    Humidity,
    AbsoluteHumidity,
    Interior,
    Exterior,
}

pub fn label(language: Language, id: LocalizedString) -> &'static str {
    use LocalizedString::*;

    match language {
        Language::En => match id {
            SiteTitle => "Should I ventilate?",
            Temperature => "Temperature",
            Humidity => "Humidity",
            AbsoluteHumidity => "Absolute humidity",
            Interior => "Interior",
            Exterior => "Exterior",
        },
        Language::De => match id {
            SiteTitle => "Soll ich lüften?",
            Temperature => "Temperatur",
            Humidity => "Luftfeuchtigkeit",
            AbsoluteHumidity => "Absolute Feuchtigkeit",
            Interior => "Innen",
            Exterior => "Außen",
        },
    }
}
