use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Regulated plate categories (Appendix 4 of Circular 15/2014/TT-BCA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateCategory {
    /// Privately registered automobile.
    DomesticAutomobile,
    /// Motorcycle with engine displacement under 50 cc.
    MotorcycleUnder50cc,
    /// Motorcycle between 50 and 175 cc.
    Motorcycle50To175cc,
    /// Motorcycle above 175 cc.
    MotorcycleOver175cc,
    /// Project, joint-venture, and military-commerce vehicles.
    SpecialBusiness,
    /// Special economic zone vehicles (yellow plate).
    SpecialEconomicZone,
    /// Electric vehicles, tractors, restricted-range and pilot-program
    /// vehicles, trailers.
    NonBusinessSpecial,
    /// Temporarily registered vehicles.
    Temporary,
    /// Diplomatic and foreign-owned vehicles.
    Diplomatic,
    /// Military vehicles.
    Military,
}

/// A classified Vietnamese vehicle registration plate.
///
/// Each variant carries exactly the fields its category defines, so a value
/// with fields inconsistent with its category cannot be represented:
/// military plates have no locality, temporary plates have no series, and
/// only diplomatic plates may carry a country numeral.
///
/// Values are normally produced by parsing ([`FromStr`](std::str::FromStr)
/// on the printed string, or [`classify`](crate::classify) on an already
/// compact one) and are immutable thereafter. The `order` field keeps its
/// leading zeros, which is why it is a digit string and not a number.
///
/// ```rust
/// use bienso::VietnamPlate;
///
/// let plate: VietnamPlate = "50HA 6666".parse().unwrap();
/// assert_eq!(plate.locality(), Some("50"));
/// assert_eq!(plate.series(), Some("HA"));
/// assert_eq!(plate.order(), "6666");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VietnamPlate {
    /// Automobile plate: one series letter, 4 or 5 order digits
    /// (exactly 4 for series letters retired in 2010).
    DomesticAutomobile {
        locality: String,
        series: String,
        order: String,
    },
    /// Under-50cc motorcycle plate: two series letters.
    MotorcycleUnder50cc {
        locality: String,
        series: String,
        order: String,
    },
    /// 50-175cc motorcycle plate: series letter plus cursor digit ("G1").
    Motorcycle50To175cc {
        locality: String,
        series: String,
        order: String,
    },
    /// Over-175cc motorcycle plate: series "A" plus cursor digit.
    MotorcycleOver175cc {
        locality: String,
        series: String,
        order: String,
    },
    /// Project, joint-venture, and military-commerce plate (DA/KT/LD).
    SpecialBusiness {
        locality: String,
        series: String,
        order: String,
    },
    /// Special economic zone plate (LB/CT/LA/KL).
    SpecialEconomicZone {
        locality: String,
        series: String,
        order: String,
    },
    /// Non-business special plate (MA/MĐ/MK/TĐ/HC/SA/XA/R, optionally
    /// digit-suffixed).
    NonBusinessSpecial {
        locality: String,
        series: String,
        order: String,
    },
    /// Temporary plate: literal "T" before the locality, no series.
    Temporary { locality: String, order: String },
    /// Diplomatic plate (NG/QT/NN/CV), optionally with a three-digit
    /// country numeral between locality and series.
    Diplomatic {
        locality: String,
        /// Numeral of the owner's country, when printed on the plate.
        dip_country: Option<String>,
        series: String,
        order: String,
    },
    /// Military plate: branch letter, one letter A-X, optional "B" suffix,
    /// exactly 4 order digits, no locality.
    Military { series: String, order: String },
}

impl VietnamPlate {
    /// The category this plate was classified into.
    pub fn category(&self) -> PlateCategory {
        match self {
            Self::DomesticAutomobile { .. } => PlateCategory::DomesticAutomobile,
            Self::MotorcycleUnder50cc { .. } => PlateCategory::MotorcycleUnder50cc,
            Self::Motorcycle50To175cc { .. } => PlateCategory::Motorcycle50To175cc,
            Self::MotorcycleOver175cc { .. } => PlateCategory::MotorcycleOver175cc,
            Self::SpecialBusiness { .. } => PlateCategory::SpecialBusiness,
            Self::SpecialEconomicZone { .. } => PlateCategory::SpecialEconomicZone,
            Self::NonBusinessSpecial { .. } => PlateCategory::NonBusinessSpecial,
            Self::Temporary { .. } => PlateCategory::Temporary,
            Self::Diplomatic { .. } => PlateCategory::Diplomatic,
            Self::Military { .. } => PlateCategory::Military,
        }
    }

    /// Two-digit code of the registering province or city.
    ///
    /// `None` for military plates, which carry none.
    pub fn locality(&self) -> Option<&str> {
        match self {
            Self::Military { .. } => None,
            Self::DomesticAutomobile { locality, .. }
            | Self::MotorcycleUnder50cc { locality, .. }
            | Self::Motorcycle50To175cc { locality, .. }
            | Self::MotorcycleOver175cc { locality, .. }
            | Self::SpecialBusiness { locality, .. }
            | Self::SpecialEconomicZone { locality, .. }
            | Self::NonBusinessSpecial { locality, .. }
            | Self::Temporary { locality, .. }
            | Self::Diplomatic { locality, .. } => Some(locality),
        }
    }

    /// Series code distinguishing plate sub-groups within a locality.
    ///
    /// `None` for temporary plates, which carry none.
    pub fn series(&self) -> Option<&str> {
        match self {
            Self::Temporary { .. } => None,
            Self::DomesticAutomobile { series, .. }
            | Self::MotorcycleUnder50cc { series, .. }
            | Self::Motorcycle50To175cc { series, .. }
            | Self::MotorcycleOver175cc { series, .. }
            | Self::SpecialBusiness { series, .. }
            | Self::SpecialEconomicZone { series, .. }
            | Self::NonBusinessSpecial { series, .. }
            | Self::Diplomatic { series, .. }
            | Self::Military { series, .. } => Some(series),
        }
    }

    /// Registration order digits, leading zeros preserved.
    pub fn order(&self) -> &str {
        match self {
            Self::DomesticAutomobile { order, .. }
            | Self::MotorcycleUnder50cc { order, .. }
            | Self::Motorcycle50To175cc { order, .. }
            | Self::MotorcycleOver175cc { order, .. }
            | Self::SpecialBusiness { order, .. }
            | Self::SpecialEconomicZone { order, .. }
            | Self::NonBusinessSpecial { order, .. }
            | Self::Temporary { order, .. }
            | Self::Diplomatic { order, .. }
            | Self::Military { order, .. } => order,
        }
    }

    /// Three-digit country numeral on diplomatic plates that print one.
    pub fn dip_country(&self) -> Option<&str> {
        match self {
            Self::Diplomatic { dip_country, .. } => dip_country.as_deref(),
            _ => None,
        }
    }

    /// Canonical compact form: the plate with all separators stripped.
    ///
    /// This is the storable and comparable key, and re-classifying it
    /// reproduces the plate: `classify(&plate.compact())` yields a value
    /// equal to `plate` for every plate the classifier can produce.
    pub fn compact(&self) -> String {
        match self {
            Self::Temporary { locality, order } => format!("T{locality}{order}"),
            Self::Military { series, order } => format!("{series}{order}"),
            Self::Diplomatic {
                locality,
                dip_country,
                series,
                order,
            } => {
                let dip_country = dip_country.as_deref().unwrap_or("");
                format!("{locality}{dip_country}{series}{order}")
            }
            Self::DomesticAutomobile {
                locality,
                series,
                order,
            }
            | Self::MotorcycleUnder50cc {
                locality,
                series,
                order,
            }
            | Self::Motorcycle50To175cc {
                locality,
                series,
                order,
            }
            | Self::MotorcycleOver175cc {
                locality,
                series,
                order,
            }
            | Self::SpecialBusiness {
                locality,
                series,
                order,
            }
            | Self::SpecialEconomicZone {
                locality,
                series,
                order,
            }
            | Self::NonBusinessSpecial {
                locality,
                series,
                order,
            } => format!("{locality}{series}{order}"),
        }
    }

    /// Number of characters in the compact form.
    ///
    /// Useful for sizing storage columns that hold the compact string.
    pub fn compact_len(&self) -> usize {
        self.compact().chars().count()
    }
}

/// Stored as the compact string.
impl Serialize for VietnamPlate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.compact())
    }
}

/// Loaded by re-running classification on the stored compact string.
/// A stored value that no longer classifies fails deserialization.
impl<'de> Deserialize<'de> for VietnamPlate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = String::deserialize(deserializer)?;
        stored.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_by_variant() {
        let plate = VietnamPlate::Military {
            series: "TC".into(),
            order: "3386".into(),
        };
        assert_eq!(plate.category(), PlateCategory::Military);
        assert_eq!(plate.locality(), None);
        assert_eq!(plate.series(), Some("TC"));
        assert_eq!(plate.order(), "3386");
        assert_eq!(plate.dip_country(), None);

        let plate = VietnamPlate::Temporary {
            locality: "29".into(),
            order: "12345".into(),
        };
        assert_eq!(plate.series(), None);
        assert_eq!(plate.locality(), Some("29"));
    }

    #[test]
    fn compact_concatenation() {
        let plate = VietnamPlate::Diplomatic {
            locality: "80".into(),
            dip_country: Some("011".into()),
            series: "NG".into(),
            order: "01".into(),
        };
        assert_eq!(plate.compact(), "80011NG01");

        let plate = VietnamPlate::Diplomatic {
            locality: "80".into(),
            dip_country: None,
            series: "QT".into(),
            order: "54642".into(),
        };
        assert_eq!(plate.compact(), "80QT54642");
    }

    #[test]
    fn compact_of_prefixed_categories() {
        // The "T" marker precedes the locality, as printed on the plate.
        let plate = VietnamPlate::Temporary {
            locality: "29".into(),
            order: "12345".into(),
        };
        assert_eq!(plate.compact(), "T2912345");

        let plate = VietnamPlate::Military {
            series: "TC".into(),
            order: "3386".into(),
        };
        assert_eq!(plate.compact(), "TC3386");
    }

    #[test]
    fn compact_len_counts_characters() {
        let plate = VietnamPlate::NonBusinessSpecial {
            locality: "29".into(),
            series: "MĐ1".into(),
            order: "01353".into(),
        };
        // "Đ" is one character regardless of its UTF-8 width.
        assert_eq!(plate.compact_len(), 10);
    }
}
