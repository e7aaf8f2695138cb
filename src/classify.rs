//! Plate classification: the ordered category rule table.
//!
//! Several category patterns overlap as character classes. A two-letter
//! special series like "MA" is also a well-formed under-50cc motorcycle
//! series, and a retired automobile letter like "R" doubles as a trailer
//! series. Correctness therefore depends on the rule order below: rules
//! are tried top to bottom and the first one that consumes the whole
//! compact string wins.

use crate::VietnamPlate;
use crate::error::PlateError;
use crate::normalize::normalize;
use crate::series;

type Rule = fn(&str) -> Option<VietnamPlate>;

/// Category rules in priority order. Keep this an explicit array: the
/// order is load-bearing, not incidental.
const RULES: &[Rule] = &[
    domestic_automobile,
    diplomatic,
    special_business,
    economic_zone,
    non_business_special,
    motorcycle_under_50cc,
    motorcycle_50_to_175cc,
    motorcycle_over_175cc,
    military,
    temporary,
];

/// Classify a compact plate string (see [`normalize`]).
///
/// Tries each category rule in priority order; every rule must match the
/// entire string, never a prefix. Returns the first match, or
/// [`PlateError::UnrecognizedPlate`] carrying the input for diagnostics.
///
/// ```rust
/// use bienso::{PlateCategory, classify};
///
/// let plate = classify("29A43374").unwrap();
/// assert_eq!(plate.category(), PlateCategory::DomesticAutomobile);
/// assert!(classify("XXYYZZ11").is_err());
/// ```
pub fn classify(compact: &str) -> Result<VietnamPlate, PlateError> {
    if compact.is_empty() {
        return Err(PlateError::EmptyInput);
    }
    RULES
        .iter()
        .find_map(|rule| rule(compact))
        .ok_or_else(|| PlateError::UnrecognizedPlate {
            compact: compact.to_owned(),
        })
}

impl std::str::FromStr for VietnamPlate {
    type Err = PlateError;

    /// Parse a plate number as printed, tolerating punctuation and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(&normalize(s))
    }
}

/// Split off the two-digit locality code.
fn take_locality(s: &str) -> Option<(&str, &str)> {
    let (head, rest) = s.split_at_checked(2)?;
    head.bytes()
        .all(|b| b.is_ascii_digit())
        .then_some((head, rest))
}

/// The order is always the final field: the whole remainder must be
/// digits, `min` to `max` of them.
fn full_order(s: &str, min: usize, max: usize) -> Option<&str> {
    ((min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())).then_some(s)
}

/// Strip a series code drawn from `table`.
fn strip_series<'a>(s: &'a str, table: &[&'static str]) -> Option<(&'static str, &'a str)> {
    table
        .iter()
        .find_map(|code| s.strip_prefix(code).map(|rest| (*code, rest)))
}

fn domestic_automobile(compact: &str) -> Option<VietnamPlate> {
    let (locality, rest) = take_locality(compact)?;
    let mut chars = rest.chars();
    let letter = chars.next()?;
    let tail = chars.as_str();
    // Plates with a series letter retired in 2010 only ever carry a
    // 4-digit order; current letters allow 4 or 5.
    let order = if series::is_permitted_series_letter(letter) {
        full_order(tail, 4, 5)?
    } else if series::is_obsolete_series_letter(letter) {
        full_order(tail, 4, 4)?
    } else {
        return None;
    };
    Some(VietnamPlate::DomesticAutomobile {
        locality: locality.to_owned(),
        series: letter.to_string(),
        order: order.to_owned(),
    })
}

fn diplomatic(compact: &str) -> Option<VietnamPlate> {
    let (locality, rest) = take_locality(compact)?;
    // Optional three-digit country numeral between locality and series.
    // The series starts with a letter, so digits here are unambiguous.
    let (dip_country, rest) = match rest.split_at_checked(3) {
        Some((head, tail)) if head.bytes().all(|b| b.is_ascii_digit()) => (Some(head), tail),
        _ => (None, rest),
    };
    let (code, rest) = strip_series(rest, series::DIPLOMATIC_SERIES)?;
    let order = full_order(rest, 2, 5)?;
    Some(VietnamPlate::Diplomatic {
        locality: locality.to_owned(),
        dip_country: dip_country.map(str::to_owned),
        series: code.to_owned(),
        order: order.to_owned(),
    })
}

fn special_business(compact: &str) -> Option<VietnamPlate> {
    let (locality, rest) = take_locality(compact)?;
    let (code, rest) = strip_series(rest, series::SPECIAL_BUSINESS_SERIES)?;
    let order = full_order(rest, 4, 5)?;
    Some(VietnamPlate::SpecialBusiness {
        locality: locality.to_owned(),
        series: code.to_owned(),
        order: order.to_owned(),
    })
}

fn economic_zone(compact: &str) -> Option<VietnamPlate> {
    let (locality, rest) = take_locality(compact)?;
    let (code, rest) = strip_series(rest, series::ECONOMIC_ZONE_SERIES)?;
    let order = full_order(rest, 4, 5)?;
    Some(VietnamPlate::SpecialEconomicZone {
        locality: locality.to_owned(),
        series: code.to_owned(),
        order: order.to_owned(),
    })
}

fn non_business_special(compact: &str) -> Option<VietnamPlate> {
    let (locality, rest) = take_locality(compact)?;
    let (code, rest) = strip_series(rest, series::NON_BUSINESS_SERIES)?;
    // The series may carry one trailing digit ("MĐ1"). Consume it
    // greedily, falling back to the bare code if the order arity then
    // no longer fits ("29MA1234" is series "MA", order "1234").
    let mut chars = rest.chars();
    if let Some(digit) = chars.next().filter(char::is_ascii_digit) {
        if let Some(order) = full_order(chars.as_str(), 4, 5) {
            return Some(VietnamPlate::NonBusinessSpecial {
                locality: locality.to_owned(),
                series: format!("{code}{digit}"),
                order: order.to_owned(),
            });
        }
    }
    let order = full_order(rest, 4, 5)?;
    Some(VietnamPlate::NonBusinessSpecial {
        locality: locality.to_owned(),
        series: code.to_owned(),
        order: order.to_owned(),
    })
}

fn motorcycle_under_50cc(compact: &str) -> Option<VietnamPlate> {
    let (locality, rest) = take_locality(compact)?;
    let mut chars = rest.chars();
    let first = chars
        .next()
        .filter(|&c| series::is_permitted_series_letter(c))?;
    let second = chars
        .next()
        .filter(|&c| series::is_low_capacity_second_letter(c))?;
    let order = full_order(chars.as_str(), 4, 5)?;
    Some(VietnamPlate::MotorcycleUnder50cc {
        locality: locality.to_owned(),
        series: format!("{first}{second}"),
        order: order.to_owned(),
    })
}

fn motorcycle_50_to_175cc(compact: &str) -> Option<VietnamPlate> {
    let (locality, rest) = take_locality(compact)?;
    let mut chars = rest.chars();
    let letter = chars.next().filter(|&c| matches!(c, 'B'..='Z'))?;
    let cursor = chars.next().filter(|&c| matches!(c, '1'..='9'))?;
    let order = full_order(chars.as_str(), 4, 5)?;
    Some(VietnamPlate::Motorcycle50To175cc {
        locality: locality.to_owned(),
        series: format!("{letter}{cursor}"),
        order: order.to_owned(),
    })
}

fn motorcycle_over_175cc(compact: &str) -> Option<VietnamPlate> {
    let (locality, rest) = take_locality(compact)?;
    let mut chars = rest.chars();
    let letter = chars.next().filter(|&c| c == 'A')?;
    let cursor = chars.next().filter(|&c| matches!(c, '1'..='9'))?;
    let order = full_order(chars.as_str(), 4, 5)?;
    Some(VietnamPlate::MotorcycleOver175cc {
        locality: locality.to_owned(),
        series: format!("{letter}{cursor}"),
        order: order.to_owned(),
    })
}

fn military(compact: &str) -> Option<VietnamPlate> {
    let mut chars = compact.chars();
    let branch = chars
        .next()
        .filter(|&c| series::is_military_branch_letter(c))?;
    let second = chars.next().filter(|&c| matches!(c, 'A'..='X'))?;
    let rest = chars.as_str();
    // Optional trailing "B", consumed greedily.
    if let Some(tail) = rest.strip_prefix('B') {
        if let Some(order) = full_order(tail, 4, 4) {
            return Some(VietnamPlate::Military {
                series: format!("{branch}{second}B"),
                order: order.to_owned(),
            });
        }
    }
    let order = full_order(rest, 4, 4)?;
    Some(VietnamPlate::Military {
        series: format!("{branch}{second}"),
        order: order.to_owned(),
    })
}

fn temporary(compact: &str) -> Option<VietnamPlate> {
    let rest = compact.strip_prefix('T')?;
    let (locality, rest) = take_locality(rest)?;
    let order = full_order(rest, 5, 5)?;
    Some(VietnamPlate::Temporary {
        locality: locality.to_owned(),
        order: order.to_owned(),
    })
}
