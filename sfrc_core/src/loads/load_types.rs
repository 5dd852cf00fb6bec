//! Load types used by the ACI 318-19 strength combinations.

use serde::{Deserialize, Serialize};

/// Load categories of ACI 318-19 §5.3
///
/// # Example
/// ```
/// use sfrc_core::loads::LoadType;
///
/// assert_eq!(LoadType::LiveRoof.code(), "Lr");
/// assert_eq!(LoadType::Dead.description(), "Dead load");
/// ```
/// Ordered by declaration, which fixes the summation order of combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load (self-weight and permanent attachments)
    Dead,
    /// L - Live load
    Live,
    /// Lr - Roof live load
    LiveRoof,
    /// S - Snow load
    Snow,
    /// R - Rain load
    Rain,
    /// W - Wind load
    Wind,
    /// E - Seismic load
    Seismic,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 7] = [
        LoadType::Dead,
        LoadType::Live,
        LoadType::LiveRoof,
        LoadType::Snow,
        LoadType::Rain,
        LoadType::Wind,
        LoadType::Seismic,
    ];

    /// Standard abbreviation (D, L, Lr, S, R, W, E)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
            LoadType::LiveRoof => "Lr",
            LoadType::Snow => "S",
            LoadType::Rain => "R",
            LoadType::Wind => "W",
            LoadType::Seismic => "E",
        }
    }

    /// Parse a standard abbreviation
    pub fn from_code(code: &str) -> Option<LoadType> {
        LoadType::ALL.iter().copied().find(|lt| lt.code() == code)
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
            LoadType::LiveRoof => "Roof live load",
            LoadType::Snow => "Snow load",
            LoadType::Rain => "Rain load",
            LoadType::Wind => "Wind load",
            LoadType::Seismic => "Seismic load",
        }
    }

    /// Wind and seismic act in either direction
    pub fn is_directional(&self) -> bool {
        matches!(self, LoadType::Wind | LoadType::Seismic)
    }

    /// Whether this load type is a gravity load (acts downward)
    pub fn is_gravity(&self) -> bool {
        !self.is_directional()
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_type_codes() {
        let codes: Vec<&str> = LoadType::ALL.iter().map(|lt| lt.code()).collect();
        assert_eq!(codes, vec!["D", "L", "Lr", "S", "R", "W", "E"]);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(LoadType::from_code("Lr"), Some(LoadType::LiveRoof));
        assert_eq!(LoadType::from_code("E"), Some(LoadType::Seismic));
        assert_eq!(LoadType::from_code("H"), None);
    }

    #[test]
    fn test_gravity_loads() {
        assert!(LoadType::Dead.is_gravity());
        assert!(LoadType::Snow.is_gravity());
        assert!(!LoadType::Wind.is_gravity());
        assert!(LoadType::Seismic.is_directional());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::LiveRoof).unwrap();
        assert_eq!(json, "\"LiveRoof\"");
        let parsed: LoadType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LoadType::LiveRoof);
    }
}
