// File: src/core/segmenter.rs
//! Splits Devanagari verse text into pādas and syllables.
//!
//! A syllable is an onset (zero or more consonants) plus one vowel, either a
//! standalone vowel letter, a vowel sign, or the inherent `अ` of a bare
//! consonant. Consonants left without a vowel at the end of a line attach to
//! the last syllable as trailing consonants.

use crate::core::script::{classify_char, is_danda, vowel_length, CharClass, INHERENT_VOWEL};
use crate::core::types::{Pada, Syllable, Verse};

/// A syllable under construction, before the cluster flag can be known.
struct Draft {
    text: String,
    vowel: char,
    marked: bool,
    onset: usize,
    trailing: usize,
}

/// Scanner state for one line.
#[derive(Default)]
struct LineScanner {
    drafts: Vec<Draft>,
    pending: String,
    pending_consonants: usize,
    /// The last consonant is still waiting for a vowel sign or virama.
    open_consonant: bool,
}

impl LineScanner {
    fn feed(&mut self, c: char) {
        match classify_char(c) {
            CharClass::Consonant => {
                self.close_open_consonant();
                self.pending.push(c);
                self.pending_consonants += 1;
                self.open_consonant = true;
            }
            CharClass::Nukta => {
                if self.open_consonant {
                    self.pending.push(c);
                }
            }
            CharClass::Virama => {
                if self.open_consonant {
                    self.pending.push(c);
                    self.open_consonant = false;
                }
            }
            CharClass::VowelSign(vowel) => {
                if self.open_consonant {
                    self.pending.push(c);
                    self.open_consonant = false;
                    self.emit(vowel);
                } else {
                    log::debug!("Skipping vowel sign {:?} with no consonant", c);
                }
            }
            CharClass::Vowel(vowel) => {
                self.close_open_consonant();
                self.pending.push(c);
                self.emit(vowel);
            }
            CharClass::Mark => {
                self.close_open_consonant();
                if self.drafts.is_empty() {
                    log::debug!("Skipping mark {:?} at line start", c);
                    return;
                }
                // Virama'd consonants written before the mark belong to the
                // same syllable, so they go in ahead of it.
                self.attach_pending();
                if let Some(last) = self.drafts.last_mut() {
                    last.text.push(c);
                    last.marked = true;
                }
            }
            CharClass::Skip => {
                self.close_open_consonant();
                if !c.is_whitespace() && !is_danda(c) {
                    log::trace!("Skipping non-syllabic character {:?}", c);
                }
            }
        }
    }

    /// A consonant followed by anything other than a vowel sign or virama
    /// carries the inherent vowel.
    fn close_open_consonant(&mut self) {
        if self.open_consonant {
            self.open_consonant = false;
            self.emit(INHERENT_VOWEL);
        }
    }

    fn emit(&mut self, vowel: char) {
        self.drafts.push(Draft {
            text: std::mem::take(&mut self.pending),
            vowel,
            marked: false,
            onset: self.pending_consonants,
            trailing: 0,
        });
        self.pending_consonants = 0;
    }

    /// Moves vowelless consonants onto the last syllable as trailing consonants.
    fn attach_pending(&mut self) {
        if self.pending_consonants == 0 {
            return;
        }
        if let Some(last) = self.drafts.last_mut() {
            last.text.push_str(&std::mem::take(&mut self.pending));
            last.trailing += self.pending_consonants;
            self.pending_consonants = 0;
        }
    }

    fn finish(mut self) -> Vec<Syllable> {
        self.close_open_consonant();
        self.attach_pending();
        if self.pending_consonants > 0 {
            log::warn!("Dropping vowelless line fragment {:?}", self.pending);
        }

        let onsets: Vec<usize> = self.drafts.iter().map(|d| d.onset).collect();
        self.drafts
            .into_iter()
            .enumerate()
            .map(|(i, d)| {
                // Consonants between this vowel and the next one.
                let between = d.trailing + onsets.get(i + 1).copied().unwrap_or(0);
                let followed_by_cluster = between >= 2;
                Syllable::new(
                    d.text,
                    d.vowel,
                    vowel_length(d.vowel),
                    d.marked,
                    d.onset,
                    d.trailing,
                    followed_by_cluster,
                    i,
                )
            })
            .collect()
    }
}

/// Segments one pāda. Never fails: unrecognized characters are skipped and
/// a line without vowels yields no syllables.
pub fn segment_line(line: &str) -> Vec<Syllable> {
    let mut scanner = LineScanner::default();
    for c in line.chars() {
        scanner.feed(c);
    }
    let syllables = scanner.finish();
    log::trace!("Segmented {:?} into {} syllables", line, syllables.len());
    syllables
}

/// Splits raw verse text into pāda strings on line breaks, and on dandas too
/// when `danda_splits_pada` is set.
pub fn split_pada_lines(text: &str, danda_splits_pada: bool) -> Vec<&str> {
    text.lines()
        .flat_map(|line| {
            if danda_splits_pada {
                line.split(is_danda).collect::<Vec<_>>()
            } else {
                vec![line]
            }
        })
        .collect()
}

/// Segments already separated lines into a verse. Lines that produce no
/// syllables are not pādas and are dropped.
pub fn segment_lines<I, S>(lines: I) -> Verse
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut offset = 0;
    let mut padas = Vec::new();
    for line in lines {
        let syllables = segment_line(line.as_ref());
        if syllables.is_empty() {
            continue;
        }
        let count = syllables.len();
        let syllables = syllables
            .into_iter()
            .map(|s| s.with_verse_offset(offset))
            .collect();
        padas.push(Pada::new(syllables));
        offset += count;
    }
    log::debug!("Segmented verse: {} pādas, {} syllables", padas.len(), offset);
    Verse::new(padas)
}

/// Segments raw verse text into a verse.
pub fn segment_verse(text: &str, danda_splits_pada: bool) -> Verse {
    segment_lines(split_pada_lines(text, danda_splits_pada))
}
