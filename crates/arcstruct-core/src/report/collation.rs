//! Locale-style string collation.
//!
//! Strings are decomposed (NFD) and compared on four levels:
//!
//! 1. primary: base characters only. Punctuation sorts first in a fixed
//!    table order (`_` before `/` before `.`), then other symbols, digits and
//!    letters. Letters compare case-folded with accents stripped. Whitespace,
//!    hyphens, combining marks and control characters carry no primary weight.
//! 2. secondary: accents and the ignorable characters. A plain letter sorts
//!    before the accented one, and a string without a space or hyphen sorts
//!    before the same string with one (space before hyphen).
//! 3. tertiary: at the first case difference, lowercase sorts first.
//! 4. identity: plain code point order.
//!
//! The last level makes the order total, so equal keys only come from equal
//! strings.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary groups in ascending order.
const GROUP_PUNCTUATION: u8 = 1;
const GROUP_SYMBOL: u8 = 2;
const GROUP_DIGIT: u8 = 3;
const GROUP_LETTER: u8 = 4;

const SECONDARY_BASE: u32 = 0;
const SECONDARY_SPACE: u32 = 1;
const SECONDARY_DASH: u32 = 2;
const SECONDARY_ACCENT: u32 = 3;
const SECONDARY_UNLISTED_MARK: u32 = 0x100;

const TERTIARY_LOWER: u8 = 0;
const TERTIARY_UPPER: u8 = 1;
const TERTIARY_LIGATURE: u8 = 2;
const TERTIARY_LIGATURE_UPPER: u8 = 3;

/// Punctuation and symbols with a fixed primary order.
const PUNCTUATION: &[char] = &[
    '_', '\u{AF}', ',', ';', ':', '!', '\u{A1}', '?', '\u{BF}', '/', '.', '\u{B4}', '`', '^',
    '\u{A8}', '~', '\u{B7}', '\u{B8}', '\'', '"', '\u{AB}', '\u{BB}', '(', ')', '[', ']', '{',
    '}', '\u{A7}', '\u{B6}', '\u{A9}', '\u{AE}', '@', '\u{A4}', '\u{E3F}', '\u{A2}', '\u{20A1}',
    '\u{20A2}', '$', '\u{20AB}', '\u{20AC}', '\u{20A3}', '\u{20A4}', '\u{20A5}', '\u{20A6}',
    '\u{20A7}', '\u{A3}', '\u{20A8}', '\u{20AA}', '\u{20A9}', '\u{A5}', '*', '\\', '&', '#', '%',
    '+', '\u{B1}', '\u{F7}', '\u{D7}', '<', '=', '>', '\u{AC}', '|', '\u{A6}', '\u{B0}', '\u{B5}',
];

/// Combining marks with a fixed secondary order.
const ACCENTS: &[char] = &[
    '\u{301}', // acute
    '\u{300}', // grave
    '\u{306}', // breve
    '\u{302}', // circumflex
    '\u{30C}', // caron
    '\u{30A}', // ring above
    '\u{30D}',
    '\u{308}', // diaeresis
    '\u{30B}',
    '\u{303}', // tilde
    '\u{307}', // dot above
    '\u{304}', // macron
    '\u{327}', // cedilla
    '\u{328}', // ogonek
    '\u{338}', // stroke
];

const STROKE: char = '\u{338}';

fn table_weight(table: &[char], c: char) -> Option<u32> {
    table.iter().zip(0u32..).find(|(t, _)| **t == c).map(|(_, w)| w)
}

fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{AD}' | '\u{2010}'..='\u{2015}' | '\u{2212}')
}

fn is_ignored(c: char) -> bool {
    (c.is_control() && !c.is_whitespace()) || matches!(c, '\u{200B}'..='\u{200F}' | '\u{FEFF}')
}

fn accent_weight(mark: char) -> u32 {
    table_weight(ACCENTS, mark).map_or(SECONDARY_UNLISTED_MARK + u32::from(mark), |w| {
        SECONDARY_ACCENT + w
    })
}

/// Precomputed comparison key for one string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    primary: Vec<(u8, u32)>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
    identity: String,
}

#[derive(Default)]
struct KeyBuilder {
    primary: Vec<(u8, u32)>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
}

impl KeyBuilder {
    fn weighted(&mut self, group: u8, weight: u32, tertiary: u8) {
        self.primary.push((group, weight));
        self.secondary.push(SECONDARY_BASE);
        self.tertiary.push(tertiary);
    }

    fn ignorable(&mut self, secondary: u32) {
        self.secondary.push(secondary);
        self.tertiary.push(TERTIARY_LOWER);
    }

    fn push(&mut self, c: char) {
        if c.is_whitespace() {
            self.ignorable(SECONDARY_SPACE);
        } else if is_dash(c) {
            self.ignorable(SECONDARY_DASH);
        } else if is_combining_mark(c) {
            self.ignorable(accent_weight(c));
        } else if let Some(weight) = table_weight(PUNCTUATION, c) {
            self.weighted(GROUP_PUNCTUATION, weight, TERTIARY_LOWER);
        } else if let Some(digit) = c.to_digit(10) {
            self.weighted(GROUP_DIGIT, digit, TERTIARY_LOWER);
        } else if c.is_numeric() {
            self.weighted(GROUP_DIGIT, 10 + u32::from(c), TERTIARY_LOWER);
        } else if c.is_alphabetic() {
            self.push_letter(c);
        } else {
            self.weighted(GROUP_SYMBOL, u32::from(c), TERTIARY_LOWER);
        }
    }

    fn push_letter(&mut self, c: char) {
        let upper = c.is_uppercase();
        match c {
            'ß' | 'ẞ' => self.push_ligature("ss", upper),
            'æ' | 'Æ' => self.push_ligature("ae", upper),
            'œ' | 'Œ' => self.push_ligature("oe", upper),
            'ø' | 'Ø' => self.push_stroked('o', upper),
            'đ' | 'Đ' => self.push_stroked('d', upper),
            'ł' | 'Ł' => self.push_stroked('l', upper),
            _ => {
                let tertiary = if upper { TERTIARY_UPPER } else { TERTIARY_LOWER };
                for folded in c.to_lowercase() {
                    self.weighted(GROUP_LETTER, u32::from(folded), tertiary);
                }
            }
        }
    }

    fn push_ligature(&mut self, letters: &str, upper: bool) {
        let tertiary = if upper {
            TERTIARY_LIGATURE_UPPER
        } else {
            TERTIARY_LIGATURE
        };
        for letter in letters.chars() {
            self.weighted(GROUP_LETTER, u32::from(letter), tertiary);
        }
    }

    fn push_stroked(&mut self, base: char, upper: bool) {
        let tertiary = if upper { TERTIARY_UPPER } else { TERTIARY_LOWER };
        self.weighted(GROUP_LETTER, u32::from(base), tertiary);
        self.ignorable(accent_weight(STROKE));
    }
}

/// Builds the collation key of `s`.
#[must_use]
pub fn sort_key(s: &str) -> SortKey {
    let mut builder = KeyBuilder::default();
    for c in s.nfd().filter(|&c| !is_ignored(c)) {
        builder.push(c);
    }

    SortKey {
        primary: builder.primary,
        secondary: builder.secondary,
        tertiary: builder.tertiary,
        identity: s.to_string(),
    }
}

/// Compares two strings in collation order.
///
/// ```
/// use std::cmp::Ordering;
/// use arcstruct_core::report::collation::compare;
///
/// assert_eq!(compare("a.txt", "b/"), Ordering::Less);
/// assert_eq!(compare("b/", "B/"), Ordering::Less);
/// assert_eq!(compare("école", "zebra"), Ordering::Less);
/// assert_eq!(compare("docs/", "docs.txt"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sorts lines in collation order.
pub fn sort(lines: &mut [String]) {
    lines.sort_by_cached_key(|line| sort_key(line));
}
