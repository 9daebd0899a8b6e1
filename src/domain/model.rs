use crate::utils::error::NamesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value the simulation data model stores in a rescattering field that was never filled.
pub const UNINITIALIZED_CODE: i32 = i32::MIN;

/// Where a truth record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Unknown = 0,
    BeamNeutrino = 1,
    CosmicRay = 2,
    SuperNovaNeutrino = 3,
    SingleParticle = 4,
}

impl Origin {
    pub const ALL: [Origin; 5] = [
        Origin::Unknown,
        Origin::BeamNeutrino,
        Origin::CosmicRay,
        Origin::SuperNovaNeutrino,
        Origin::SingleParticle,
    ];

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|origin| *origin as i32 == code)
    }
}

/// Selects which generator's convention a rescattering code follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescatterCategory {
    /// GENIE hA intranuclear cascade fates (`INukeFateHA_t`).
    #[default]
    #[serde(
        rename = "genie_inuke_fate_ha",
        alias = "genie",
        alias = "larsoft_default",
        alias = "default"
    )]
    GenieINukeFateHA,
}

impl RescatterCategory {
    /// Category assumed by LArSoft-based tooling when none is given.
    pub const LARSOFT_DEFAULT: RescatterCategory = RescatterCategory::GenieINukeFateHA;

    /// Every spelling accepted by `from_str`, case-insensitively.
    pub const NAMES: [&'static str; 4] =
        ["genie_inuke_fate_ha", "genie", "larsoft_default", "default"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RescatterCategory::GenieINukeFateHA => "genie_inuke_fate_ha",
        }
    }
}

impl fmt::Display for RescatterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RescatterCategory {
    type Err = NamesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "genie_inuke_fate_ha" | "genie" => Ok(RescatterCategory::GenieINukeFateHA),
            "larsoft_default" | "default" => Ok(RescatterCategory::LARSOFT_DEFAULT),
            other => Err(NamesError::UnknownCategoryError {
                category: other.to_string(),
            }),
        }
    }
}

/// Which naming table a raw code should be looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    Particle,
    Status,
    Origin,
    #[serde(rename = "ccnc")]
    CcNc,
    #[serde(rename = "mode")]
    ReactionMode,
    #[serde(rename = "interaction")]
    InteractionType,
    Rescattering,
}

impl CodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeKind::Particle => "particle",
            CodeKind::Status => "status",
            CodeKind::Origin => "origin",
            CodeKind::CcNc => "ccnc",
            CodeKind::ReactionMode => "mode",
            CodeKind::InteractionType => "interaction",
            CodeKind::Rescattering => "rescattering",
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeKind {
    type Err = NamesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "particle" | "pdg" => CodeKind::Particle,
            "status" => CodeKind::Status,
            "origin" => CodeKind::Origin,
            "ccnc" => CodeKind::CcNc,
            "mode" | "reaction_mode" => CodeKind::ReactionMode,
            "interaction" | "interaction_type" => CodeKind::InteractionType,
            "rescattering" | "rescatter" => CodeKind::Rescattering,
            other => {
                return Err(NamesError::UnknownKindError {
                    kind: other.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

/// A raw code together with the table it was decoded against and its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCode {
    pub kind: CodeKind,
    pub code: i32,
    pub name: String,
}

impl fmt::Display for NamedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind, self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_from_code() {
        for origin in Origin::ALL {
            assert_eq!(Origin::from_code(origin as i32), Some(origin));
        }
        assert_eq!(Origin::from_code(-1), None);
        assert_eq!(Origin::from_code(5), None);
    }

    #[test]
    fn test_category_default_is_larsoft_default() {
        assert_eq!(RescatterCategory::default(), RescatterCategory::LARSOFT_DEFAULT);
        assert_eq!(
            "LArSoft_Default".parse::<RescatterCategory>().unwrap(),
            RescatterCategory::GenieINukeFateHA
        );
        assert!("geant4".parse::<RescatterCategory>().is_err());
    }

    #[test]
    fn test_code_kind_parsing() {
        assert_eq!("CCNC".parse::<CodeKind>().unwrap(), CodeKind::CcNc);
        assert_eq!("mode".parse::<CodeKind>().unwrap(), CodeKind::ReactionMode);
        assert!("flavor".parse::<CodeKind>().is_err());
        for kind in [CodeKind::Particle, CodeKind::InteractionType, CodeKind::Rescattering] {
            assert_eq!(kind.as_str().parse::<CodeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_named_code_display() {
        let named = NamedCode {
            kind: CodeKind::CcNc,
            code: 0,
            name: "CC".to_string(),
        };
        assert_eq!(named.to_string(), "ccnc 0: CC");
    }
}
