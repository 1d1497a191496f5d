use toli_types::Script;

/// Letters offered for traditional-script browsing
pub const TRADITIONAL_ALPHABET: [&str; 32] = [
    "ᠠ", "ᠡ", "ᠢ", "ᠣ", "ᠤ", "ᠥ", "ᠦ", "ᠨ", "ᠩ", "ᠪ",
    "ᠫ", "ᠬ", "ᠭ", "ᠮ", "ᠯ", "ᠰ", "ᠱ", "ᠲ", "ᠳ", "ᠴ",
    "ᠵ", "ᠶ", "ᠷ", "ᠸ", "ᠹ", "ᠺ", "ᠻ", "ᠼ", "ᠽ", "ᠾ",
    "ᠿ", "ᡀ",
];

/// Mongolian Cyrillic alphabet, including ө and ү
pub const CYRILLIC_ALPHABET: [&str; 35] = [
    "а", "б", "в", "г", "д", "е", "ё", "ж", "з", "и",
    "й", "к", "л", "м", "н", "о", "ө", "п", "р", "с",
    "т", "у", "ү", "ф", "х", "ц", "ч", "ш", "щ", "ъ",
    "ы", "ь", "э", "ю", "я",
];

pub fn alphabet(script: Script) -> &'static [&'static str] {
    match script {
        Script::Traditional => &TRADITIONAL_ALPHABET,
        Script::Cyrillic => &CYRILLIC_ALPHABET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_is_one_character() {
        for script in [Script::Traditional, Script::Cyrillic] {
            for letter in alphabet(script) {
                assert_eq!(letter.chars().count(), 1, "{letter} in {script}");
            }
        }
    }

    #[test]
    fn alphabets_differ_by_script() {
        assert_eq!(alphabet(Script::Traditional).len(), 32);
        assert!(alphabet(Script::Traditional).contains(&"ᠬ"));
        assert_eq!(alphabet(Script::Cyrillic).len(), 35);
        assert!(alphabet(Script::Cyrillic).contains(&"ө"));
    }
}
