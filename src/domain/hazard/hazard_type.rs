//! HazardType enum - the categories a reporter can pick from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CatalogError;

/// Category of ocean or coastal incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HazardType {
    OilSpill,
    MarineDebris,
    StormWaves,
    InjuredAnimal,
    WaterQuality,
    Other,
}

impl HazardType {
    /// All hazard types in selection-grid order.
    pub const ALL: [HazardType; 6] = [
        HazardType::OilSpill,
        HazardType::MarineDebris,
        HazardType::StormWaves,
        HazardType::InjuredAnimal,
        HazardType::WaterQuality,
        HazardType::Other,
    ];

    /// URL slug, also the wire identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            HazardType::OilSpill => "oil-spill",
            HazardType::MarineDebris => "marine-debris",
            HazardType::StormWaves => "storm-waves",
            HazardType::InjuredAnimal => "injured-animal",
            HazardType::WaterQuality => "water-quality",
            HazardType::Other => "other",
        }
    }

    /// Title shown on the selection card.
    pub fn title(&self) -> &'static str {
        match self {
            HazardType::OilSpill => "Oil Spill",
            HazardType::MarineDebris => "Marine Debris",
            HazardType::StormWaves => "Storm / Waves",
            HazardType::InjuredAnimal => "Injured Marine Life",
            HazardType::WaterQuality => "Water Quality",
            HazardType::Other => "Other Hazard",
        }
    }

    /// Badge label shown on the review screen.
    pub fn review_label(&self) -> &'static str {
        match self {
            HazardType::OilSpill => "Oil Spill",
            HazardType::MarineDebris => "Marine Debris",
            HazardType::StormWaves => "Storm/Waves",
            HazardType::InjuredAnimal => "Injured Marine Life",
            HazardType::WaterQuality => "Water Quality Issue",
            HazardType::Other => "Other Hazard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HazardType::OilSpill => "Oil slicks, sheens, or petroleum products in water",
            HazardType::MarineDebris => "Floating trash, plastic, or other pollutants",
            HazardType::StormWaves => "Dangerous wave conditions or storm damage",
            HazardType::InjuredAnimal => "Distressed, injured, or dead marine animals",
            HazardType::WaterQuality => "Discolored water, algae blooms, or contamination",
            HazardType::Other => "Any other ocean or coastal safety concern",
        }
    }

    pub fn examples(&self) -> &'static str {
        match self {
            HazardType::OilSpill => "Black slicks, rainbow sheens, petroleum odor",
            HazardType::MarineDebris => "Plastic bottles, fishing nets, large debris fields",
            HazardType::StormWaves => "High waves, storm surge, dangerous currents",
            HazardType::InjuredAnimal => "Beached whales, injured seals, fish kills",
            HazardType::WaterQuality => "Red tide, sewage discharge, unusual water color",
            HazardType::Other => "Unusual phenomena, safety hazards, navigation issues",
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for HazardType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HazardType::ALL
            .into_iter()
            .find(|t| t.slug() == s)
            .ok_or_else(|| CatalogError::UnknownHazardType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trips_through_from_str() {
        for hazard in HazardType::ALL {
            assert_eq!(hazard.slug().parse::<HazardType>().unwrap(), hazard);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let err = "tsunami".parse::<HazardType>().unwrap_err();
        assert_eq!(err, CatalogError::UnknownHazardType("tsunami".to_string()));
    }

    #[test]
    fn serde_uses_kebab_case_slugs() {
        let json = serde_json::to_string(&HazardType::InjuredAnimal).unwrap();
        assert_eq!(json, "\"injured-animal\"");

        let parsed: HazardType = serde_json::from_str("\"water-quality\"").unwrap();
        assert_eq!(parsed, HazardType::WaterQuality);
    }

    #[test]
    fn review_label_differs_from_card_title_where_the_screens_differ() {
        assert_eq!(HazardType::StormWaves.title(), "Storm / Waves");
        assert_eq!(HazardType::StormWaves.review_label(), "Storm/Waves");
        assert_eq!(HazardType::WaterQuality.review_label(), "Water Quality Issue");
    }
}
