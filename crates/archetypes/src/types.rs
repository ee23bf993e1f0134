//! Archetype identifiers and records.
//!
//! The sixteen codes follow the MBTI letter scheme. Declaration order of
//! [`ArchetypeCode`] is the table order: it is the order archetypes are
//! scored in and the tie-break order of every ranking.

use crate::error::UnknownArchetype;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Archetype Codes
// =============================================================================

/// Four-letter archetype code, declared in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArchetypeCode {
    // Analysts (NT)
    Intj,
    Intp,
    Entj,
    Entp,
    // Diplomats (NF)
    Infj,
    Infp,
    Enfj,
    Enfp,
    // Sentinels (SJ)
    Istj,
    Isfj,
    Estj,
    Esfj,
    // Explorers (SP)
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl ArchetypeCode {
    /// Every code, in table order
    pub const ALL: [ArchetypeCode; 16] = [
        ArchetypeCode::Intj,
        ArchetypeCode::Intp,
        ArchetypeCode::Entj,
        ArchetypeCode::Entp,
        ArchetypeCode::Infj,
        ArchetypeCode::Infp,
        ArchetypeCode::Enfj,
        ArchetypeCode::Enfp,
        ArchetypeCode::Istj,
        ArchetypeCode::Isfj,
        ArchetypeCode::Estj,
        ArchetypeCode::Esfj,
        ArchetypeCode::Istp,
        ArchetypeCode::Isfp,
        ArchetypeCode::Estp,
        ArchetypeCode::Esfp,
    ];

    /// Position in table order (0-15)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArchetypeCode::Intj => "INTJ",
            ArchetypeCode::Intp => "INTP",
            ArchetypeCode::Entj => "ENTJ",
            ArchetypeCode::Entp => "ENTP",
            ArchetypeCode::Infj => "INFJ",
            ArchetypeCode::Infp => "INFP",
            ArchetypeCode::Enfj => "ENFJ",
            ArchetypeCode::Enfp => "ENFP",
            ArchetypeCode::Istj => "ISTJ",
            ArchetypeCode::Isfj => "ISFJ",
            ArchetypeCode::Estj => "ESTJ",
            ArchetypeCode::Esfj => "ESFJ",
            ArchetypeCode::Istp => "ISTP",
            ArchetypeCode::Isfp => "ISFP",
            ArchetypeCode::Estp => "ESTP",
            ArchetypeCode::Esfp => "ESFP",
        }
    }

    /// Temperament group, read from the 2nd and 3rd/4th letters
    pub fn temperament(self) -> Temperament {
        let code = self.as_str().as_bytes();
        match (code[1], code[2], code[3]) {
            (b'N', b'T', _) => Temperament::Analyst,
            (b'N', b'F', _) => Temperament::Diplomat,
            (b'S', _, b'J') => Temperament::Sentinel,
            _ => Temperament::Explorer,
        }
    }
}

impl fmt::Display for ArchetypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchetypeCode {
    type Err = UnknownArchetype;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        ArchetypeCode::ALL
            .into_iter()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| UnknownArchetype(s.to_string()))
    }
}

/// The four MBTI temperament groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperament {
    /// NT
    Analyst,
    /// NF
    Diplomat,
    /// SJ
    Sentinel,
    /// SP
    Explorer,
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Temperament::Analyst => "Analyst",
            Temperament::Diplomat => "Diplomat",
            Temperament::Sentinel => "Sentinel",
            Temperament::Explorer => "Explorer",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Archetype Record
// =============================================================================

/// Static description of one film personality.
///
/// `primary_genres` and `secondary_genres` feed the membership matcher; the
/// affinity scorer uses its own table (see [`crate::affinity`]).
#[derive(Debug, PartialEq, Serialize)]
pub struct Archetype {
    pub code: ArchetypeCode,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub primary_genres: &'static [&'static str],
    pub secondary_genres: &'static [&'static str],
    pub traits: &'static [&'static str],
    pub quote: &'static str,
    pub icon: &'static str,
    /// Theme colour as `#RRGGBB`
    pub color: &'static str,
}

impl Archetype {
    pub fn is_primary(&self, genre: &str) -> bool {
        self.primary_genres.contains(&genre)
    }

    pub fn is_secondary(&self, genre: &str) -> bool {
        self.secondary_genres.contains(&genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_table_order() {
        for (i, code) in ArchetypeCode::ALL.iter().enumerate() {
            assert_eq!(code.index(), i);
        }
    }

    #[test]
    fn test_parse_code() {
        assert_eq!("intj".parse::<ArchetypeCode>().unwrap(), ArchetypeCode::Intj);
        assert_eq!(" ESFP ".parse::<ArchetypeCode>().unwrap(), ArchetypeCode::Esfp);

        let err = "XYZW".parse::<ArchetypeCode>().unwrap_err();
        assert_eq!(err.0, "XYZW");
    }

    #[test]
    fn test_temperament() {
        assert_eq!(ArchetypeCode::Intj.temperament(), Temperament::Analyst);
        assert_eq!(ArchetypeCode::Enfp.temperament(), Temperament::Diplomat);
        assert_eq!(ArchetypeCode::Esfj.temperament(), Temperament::Sentinel);
        assert_eq!(ArchetypeCode::Istp.temperament(), Temperament::Explorer);

        let analysts = ArchetypeCode::ALL
            .iter()
            .filter(|c| c.temperament() == Temperament::Analyst)
            .count();
        assert_eq!(analysts, 4);
    }

    #[test]
    fn test_serde_uses_upper_case_codes() {
        assert_eq!(serde_json::to_string(&ArchetypeCode::Infj).unwrap(), "\"INFJ\"");
        let code: ArchetypeCode = serde_json::from_str("\"ENTP\"").unwrap();
        assert_eq!(code, ArchetypeCode::Entp);
    }
}
