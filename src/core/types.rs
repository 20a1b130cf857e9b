// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classical syllable weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weight {
    Laghu,
    Guru,
}

impl Weight {
    /// Row/column index in the transition matrix (L = 0, G = 1).
    pub fn index(self) -> usize {
        match self {
            Weight::Laghu => 0,
            Weight::Guru => 1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Weight::Laghu => 'L',
            Weight::Guru => 'G',
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VowelLength {
    Short,
    Long,
}

/// The classification rule that decided a syllable's weight, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightRule {
    LongVowel,
    Marked,
    Conjunct,
    PadaFinal,
    Short,
}

impl WeightRule {
    pub fn weight(self) -> Weight {
        match self {
            WeightRule::Short => Weight::Laghu,
            _ => Weight::Guru,
        }
    }
}

/// One syllable of a pāda. Built only by the segmenter and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    text: String,
    vowel: char,
    length: VowelLength,
    marked: bool,
    onset: usize,
    trailing: usize,
    followed_by_cluster: bool,
    pada_position: usize,
    verse_position: usize,
}

impl Syllable {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        text: String,
        vowel: char,
        length: VowelLength,
        marked: bool,
        onset: usize,
        trailing: usize,
        followed_by_cluster: bool,
        pada_position: usize,
    ) -> Self {
        Self {
            text,
            vowel,
            length,
            marked,
            onset,
            trailing,
            followed_by_cluster,
            pada_position,
            verse_position: pada_position,
        }
    }

    /// Shifts the verse-level index once the pāda's place in the verse is known.
    pub(crate) fn with_verse_offset(mut self, offset: usize) -> Self {
        self.verse_position = offset + self.pada_position;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The independent vowel letter, `अ` for the inherent vowel.
    pub fn vowel(&self) -> char {
        self.vowel
    }

    pub fn length(&self) -> VowelLength {
        self.length
    }

    /// Carries anusvara, visarga or candrabindu.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Consonants before the vowel.
    pub fn onset(&self) -> usize {
        self.onset
    }

    /// Vowelless consonants attached after the vowel, at line end or before a mark.
    pub fn trailing(&self) -> usize {
        self.trailing
    }

    pub fn followed_by_cluster(&self) -> bool {
        self.followed_by_cluster
    }

    pub fn pada_position(&self) -> usize {
        self.pada_position
    }

    pub fn verse_position(&self) -> usize {
        self.verse_position
    }
}

/// One line of the verse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Pada {
    syllables: Vec<Syllable>,
}

impl Pada {
    pub(crate) fn new(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn text(&self) -> String {
        self.syllables.iter().map(Syllable::text).collect::<Vec<_>>().join("·")
    }
}

/// A segmented verse: the root owning all pādas and their syllables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Verse {
    padas: Vec<Pada>,
}

impl Verse {
    pub(crate) fn new(padas: Vec<Pada>) -> Self {
        Self { padas }
    }

    pub fn padas(&self) -> &[Pada] {
        &self.padas
    }

    pub fn syllables(&self) -> impl Iterator<Item = &Syllable> {
        self.padas.iter().flat_map(|p| p.syllables.iter())
    }

    pub fn syllable_count(&self) -> usize {
        self.padas.iter().map(Pada::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.syllable_count() == 0
    }
}
