//! Human-readable plate rendering.

use std::fmt;

use crate::VietnamPlate;

/// Group a long registration order for display.
///
/// Orders of more than four digits are printed in dot-separated groups of
/// three, chunked from the left: "12345" becomes "123.45". Shorter orders
/// are returned unchanged.
fn group_order(order: &str) -> String {
    if order.len() <= 4 {
        return order.to_owned();
    }
    let mut grouped = String::with_capacity(order.len() + order.len() / 3);
    for (i, digit) in order.chars().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

impl fmt::Display for VietnamPlate {
    /// Conventional display form.
    ///
    /// Motorcycle plates render as `{locality}-{series} {order}`, all
    /// others as `{locality}{series}-{order}`; absent fields contribute
    /// nothing, and the diplomatic country numeral is not interpolated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use VietnamPlate::*;

        let order = group_order(self.order());
        match self {
            MotorcycleUnder50cc {
                locality, series, ..
            }
            | Motorcycle50To175cc {
                locality, series, ..
            }
            | MotorcycleOver175cc {
                locality, series, ..
            } => write!(f, "{locality}-{series} {order}"),
            Military { series, .. } => write!(f, "{series}-{order}"),
            Temporary { locality, .. } => write!(f, "{locality}-{order}"),
            DomesticAutomobile {
                locality, series, ..
            }
            | SpecialBusiness {
                locality, series, ..
            }
            | SpecialEconomicZone {
                locality, series, ..
            }
            | NonBusinessSpecial {
                locality, series, ..
            }
            | Diplomatic {
                locality, series, ..
            } => write!(f, "{locality}{series}-{order}"),
        }
    }
}
