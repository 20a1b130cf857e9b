// File: src/core/script.rs
//! Devanagari character classes used by the segmenter.

use crate::core::types::VowelLength;

pub const VIRAMA: char = '\u{094d}';
pub const NUKTA: char = '\u{093c}';
pub const INHERENT_VOWEL: char = 'अ';

/// What a single character contributes to syllable structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// A standalone vowel letter, e.g. `आ`.
    Vowel(char),
    /// A dependent vowel sign, carrying the independent vowel it stands for.
    VowelSign(char),
    Consonant,
    Virama,
    Nukta,
    /// Anusvara, visarga or candrabindu.
    Mark,
    /// Whitespace, dandas, avagraha, digits and anything unrecognized.
    Skip,
}

pub fn classify_char(c: char) -> CharClass {
    match c {
        'अ' | 'आ' | 'इ' | 'ई' | 'उ' | 'ऊ' | 'ऋ' | 'ॠ' | 'ऌ' | 'ॡ' | 'ए' | 'ऐ' | 'ओ' | 'औ' => {
            CharClass::Vowel(c)
        }
        '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095f}' => CharClass::Consonant,
        VIRAMA => CharClass::Virama,
        NUKTA => CharClass::Nukta,
        '\u{0901}' | '\u{0902}' | '\u{0903}' => CharClass::Mark,
        _ => match vowel_for_sign(c) {
            Some(v) => CharClass::VowelSign(v),
            None => CharClass::Skip,
        },
    }
}

/// Maps a dependent vowel sign to its independent vowel.
fn vowel_for_sign(c: char) -> Option<char> {
    match c {
        'ा' => Some('आ'), 'ि' => Some('इ'), 'ी' => Some('ई'),
        'ु' => Some('उ'), 'ू' => Some('ऊ'), 'ृ' => Some('ऋ'),
        'ॄ' => Some('ॠ'), 'ॢ' => Some('ऌ'), 'ॣ' => Some('ॡ'),
        'े' => Some('ए'), 'ै' => Some('ऐ'), 'ो' => Some('ओ'),
        'ौ' => Some('औ'),
        _ => None,
    }
}

/// Length class of an independent vowel. The diphthongs and `ए`/`ओ` are
/// always long in Sanskrit.
pub fn vowel_length(vowel: char) -> VowelLength {
    match vowel {
        'आ' | 'ई' | 'ऊ' | 'ॠ' | 'ॡ' | 'ए' | 'ऐ' | 'ओ' | 'औ' => VowelLength::Long,
        _ => VowelLength::Short,
    }
}

/// Dandas close a pāda when the config asks for it.
pub fn is_danda(c: char) -> bool {
    matches!(c, '।' | '॥')
}
