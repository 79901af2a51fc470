//! Street (voie) types of the Angers address register.

use std::fmt;
use std::str::FromStr;

use collecte_core::ports::{Argument, SourceError};

macro_rules! street_types {
    ($($variant:ident => $token:literal,)+) => {
        /// Street type token accepted by the sector dataset's `typvoie` field.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StreetType {
            $(
                #[doc = $token]
                $variant,
            )+
        }

        impl StreetType {
            /// Every known street type, in register order.
            pub const ALL: &'static [StreetType] = &[$(StreetType::$variant,)+];

            /// Upper-case token as stored in the dataset.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(StreetType::$variant => $token,)+
                }
            }
        }
    };
}

street_types! {
    Levee => "LEVEE",
    Rue => "RUE",
    Passage => "PASSAGE",
    Route => "ROUTE",
    Square => "SQUARE",
    LieuDit => "LIEU DIT",
    Chemin => "CHEMIN",
    Venelle => "VENELLE",
    Avenue => "AVENUE",
    Zac => "ZAC",
    Za => "ZA",
    Boulevard => "BOULEVARD",
    Place => "PLACE",
    Allee => "ALLEE",
    Impasse => "IMPASSE",
    Promenade => "PROMENADE",
    Quai => "QUAI",
    Voie => "VOIE",
    Sentier => "SENTIER",
    Cour => "COUR",
    Esplanade => "ESPLANADE",
    Mail => "MAIL",
    Hameau => "HAMEAU",
    Autoroute => "AUTOROUTE",
    Carrefour => "CARREFOUR",
    Clos => "CLOS",
    Ruelle => "RUELLE",
    Residence => "RESIDENCE",
    Montee => "MONTEE",
    Allees => "ALLEES",
    Cite => "CITE",
    RondPoint => "ROND POINT",
    Bois => "BOIS",
    Zi => "ZI",
    Lotissement => "LOTISSEMENT",
    Parc => "PARC",
    Giratoire => "GIRATOIRE",
    Rocade => "ROCADE",
    Cloitre => "CLOITRE",
    Cale => "CALE",
    Echangeur => "ECHANGEUR",
    Ruette => "RUETTE",
    Aire => "AIRE",
    Rampe => "RAMPE",
    Port => "PORT",
    Zone => "ZONE",
    Traverse => "TRAVERSE",
    Parvis => "PARVIS",
}

impl fmt::Display for StreetType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for StreetType {
    type Err = SourceError;

    /// Case-insensitive; inner whitespace is collapsed so `lieu  dit` works.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();

        StreetType::ALL
            .iter()
            .copied()
            .find(|street_type| street_type.as_str() == token)
            .ok_or_else(|| {
                SourceError::new(Argument::StreetType, format!("unknown street type {raw:?}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_has_48_types() {
        assert_eq!(StreetType::ALL.len(), 48, "one entry per register token");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("rue".parse::<StreetType>().ok(), Some(StreetType::Rue), "lower case");
        assert_eq!(" Allee ".parse::<StreetType>().ok(), Some(StreetType::Allee), "padded");
        assert_eq!(
            "lieu  dit".parse::<StreetType>().ok(),
            Some(StreetType::LieuDit),
            "inner whitespace collapsed"
        );
    }

    #[test]
    fn every_token_round_trips() {
        for street_type in StreetType::ALL {
            let lower = street_type.as_str().to_lowercase();
            assert_eq!(
                lower.parse::<StreetType>().ok(),
                Some(*street_type),
                "selection value {lower} parses back"
            );
        }
    }

    #[test]
    fn unknown_type_blames_typevoie() {
        let err = "AVENIDA".parse::<StreetType>().expect_err("not a French voie type");
        assert_eq!(err.argument, Argument::StreetType, "typevoie argument");
    }
}
