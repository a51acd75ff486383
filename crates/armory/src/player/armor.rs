use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Lowest level a piece can have; also the level of pieces not yet owned
pub const MIN_ARMOR_LEVEL: u8 = 1;
pub const MAX_ARMOR_LEVEL: u8 = 40;

/// The six pieces of the armor of God (Ephesians 6:14-17)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum ArmorPiece {
    #[strum(serialize = "belt")]
    Belt,
    #[strum(serialize = "breastplate")]
    Breastplate,
    #[strum(serialize = "shoes")]
    Shoes,
    #[strum(serialize = "shield")]
    Shield,
    #[strum(serialize = "helmet")]
    Helmet,
    #[strum(serialize = "sword")]
    Sword,
}

impl ArmorPiece {
    /// Every piece, in the order they appear in the passage
    pub fn all() -> impl Iterator<Item = ArmorPiece> {
        Self::iter()
    }

    /// Full name as written in the passage
    pub fn title(&self) -> &'static str {
        match self {
            Self::Belt => "Belt of Truth",
            Self::Breastplate => "Breastplate of Righteousness",
            Self::Shoes => "Shoes of the Gospel of Peace",
            Self::Shield => "Shield of Faith",
            Self::Helmet => "Helmet of Salvation",
            Self::Sword => "Sword of the Spirit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub piece: ArmorPiece,
    pub level: u8,
}

/// Pieces the player has leveled up. Pieces never upgraded are absent.
///
/// Saved as a plain list; decoding clamps levels and keeps the last entry
/// for a repeated piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Armor>", into = "Vec<Armor>")]
pub struct ArmorSet {
    pieces: Vec<Armor>,
}

impl From<Vec<Armor>> for ArmorSet {
    fn from(pieces: Vec<Armor>) -> Self {
        let mut set = Self::new();
        for armor in pieces {
            set.set_level(armor.piece, armor.level);
        }
        set
    }
}

impl From<ArmorSet> for Vec<Armor> {
    fn from(set: ArmorSet) -> Self {
        set.pieces
    }
}

impl ArmorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, piece: ArmorPiece) -> Option<&Armor> {
        self.pieces.iter().find(|a| a.piece == piece)
    }

    /// Level of a piece, `MIN_ARMOR_LEVEL` when absent
    pub fn level(&self, piece: ArmorPiece) -> u8 {
        self.get(piece).map(|a| a.level).unwrap_or(MIN_ARMOR_LEVEL)
    }

    /// Set a piece's level, clamped to `[MIN_ARMOR_LEVEL, MAX_ARMOR_LEVEL]`
    pub fn set_level(&mut self, piece: ArmorPiece, level: u8) {
        let level = level.clamp(MIN_ARMOR_LEVEL, MAX_ARMOR_LEVEL);
        match self.pieces.iter_mut().find(|a| a.piece == piece) {
            Some(armor) => armor.level = level,
            None => self.pieces.push(Armor { piece, level }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Armor> {
        self.pieces.iter()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_piece_defaults_to_level_one() {
        let set = ArmorSet::new();
        for piece in ArmorPiece::all() {
            assert_eq!(set.level(piece), MIN_ARMOR_LEVEL);
        }
    }

    #[test]
    fn test_set_level_updates_in_place() {
        let mut set = ArmorSet::new();
        set.set_level(ArmorPiece::Shield, 7);
        set.set_level(ArmorPiece::Shield, 9);
        assert_eq!(set.len(), 1);
        assert_eq!(set.level(ArmorPiece::Shield), 9);
        assert_eq!(set.level(ArmorPiece::Sword), 1);
    }

    #[test]
    fn test_set_level_clamps() {
        let mut set = ArmorSet::new();
        set.set_level(ArmorPiece::Helmet, 200);
        assert_eq!(set.level(ArmorPiece::Helmet), MAX_ARMOR_LEVEL);
        set.set_level(ArmorPiece::Helmet, 0);
        assert_eq!(set.level(ArmorPiece::Helmet), MIN_ARMOR_LEVEL);
    }

    #[test]
    fn test_decode_clamps_and_dedups() {
        let json = r#"[
            {"piece":"Sword","level":200},
            {"piece":"Belt","level":0},
            {"piece":"Shield","level":3},
            {"piece":"Shield","level":6}
        ]"#;
        let set: ArmorSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.level(ArmorPiece::Sword), MAX_ARMOR_LEVEL);
        assert_eq!(set.level(ArmorPiece::Belt), MIN_ARMOR_LEVEL);
        assert_eq!(set.level(ArmorPiece::Shield), 6);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_piece_parse_case_insensitive() {
        assert_eq!("Sword".parse::<ArmorPiece>().unwrap(), ArmorPiece::Sword);
        assert_eq!("BELT".parse::<ArmorPiece>().unwrap(), ArmorPiece::Belt);
        assert!("cloak".parse::<ArmorPiece>().is_err());
        assert_eq!(ArmorPiece::Shoes.to_string(), "shoes");
    }
}
