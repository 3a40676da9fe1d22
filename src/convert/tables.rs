//! Static word tables for the French number conversion.

/// Words for 0 through 16. Every other number is built from these.
pub(crate) const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

/// Words for the tens multiples 10, 20, ..., 90, indexed by `tens - 1`.
pub(crate) const TENS: [&str; 9] = [
    "dix",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante-dix",
    "quatre-vingts",
    "quatre-vingt-dix",
];

/// 71 through 79.
const SEVENTIES: [&str; 9] = [
    "soixante-et-onze",
    "soixante-douze",
    "soixante-treize",
    "soixante-quatorze",
    "soixante-quinze",
    "soixante-seize",
    "soixante-dix-sept",
    "soixante-dix-huit",
    "soixante-dix-neuf",
];

/// 81 through 99. Built on "quatre-vingt" without the plural "s".
const EIGHTIES_AND_NINETIES: [&str; 19] = [
    "quatre-vingt-un",
    "quatre-vingt-deux",
    "quatre-vingt-trois",
    "quatre-vingt-quatre",
    "quatre-vingt-cinq",
    "quatre-vingt-six",
    "quatre-vingt-sept",
    "quatre-vingt-huit",
    "quatre-vingt-neuf",
    "quatre-vingt-dix",
    "quatre-vingt-onze",
    "quatre-vingt-douze",
    "quatre-vingt-treize",
    "quatre-vingt-quatorze",
    "quatre-vingt-quinze",
    "quatre-vingt-seize",
    "quatre-vingt-dix-sept",
    "quatre-vingt-dix-huit",
    "quatre-vingt-dix-neuf",
];

/// Returns the fixed form of a base-20 compound, if `number` has one.
pub(crate) fn irregular(number: u32) -> Option<&'static str> {
    match number {
        71..=79 => Some(SEVENTIES[(number - 71) as usize]),
        81..=99 => Some(EIGHTIES_AND_NINETIES[(number - 81) as usize]),
        _ => None,
    }
}
