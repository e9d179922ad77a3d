//! Progress of the current run: which trial is being played and with whom.

use bevy_ecs::prelude::Resource;
use log::warn;
use std::fmt;
use std::str::FromStr;

/// The minigames reachable from the map, in map order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trial {
    #[default]
    Run,
    Jump,
    Cut,
    Shuriken,
}

impl Trial {
    pub const ALL: [Trial; 4] = [Trial::Run, Trial::Jump, Trial::Cut, Trial::Shuriken];

    /// The trial played after this one.
    pub fn next(self) -> Trial {
        match self {
            Trial::Run => Trial::Jump,
            Trial::Jump => Trial::Cut,
            Trial::Cut => Trial::Shuriken,
            Trial::Shuriken => Trial::Run,
        }
    }

    /// Index of this trial's place in the map layout.
    pub fn place_index(self) -> usize {
        match self {
            Trial::Run => 0,
            Trial::Jump => 1,
            Trial::Cut => 2,
            Trial::Shuriken => 3,
        }
    }

    /// Tile of the map drawings sheet showing this trial.
    pub fn drawing_tile(self) -> usize {
        match self {
            Trial::Jump => 0,
            Trial::Shuriken => 1,
            Trial::Run => 2,
            Trial::Cut => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trial::Run => "run",
            Trial::Jump => "jump",
            Trial::Cut => "cut",
            Trial::Shuriken => "shuriken",
        }
    }
}

impl fmt::Display for Trial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trial {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trial::ALL
            .into_iter()
            .find(|trial| trial.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown trial '{s}' (expected run, jump, cut or shuriken)"))
    }
}

/// Playable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Character {
    #[default]
    Sho,
    Ryoko,
}

impl Character {
    /// Parse a character name, defaulting to Sho for anything unknown.
    pub fn parse_or_default(name: &str) -> Character {
        match name.parse() {
            Ok(character) => character,
            Err(e) => {
                warn!("{e}, using Sho as default");
                Character::Sho
            }
        }
    }
}

impl FromStr for Character {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sho" => Ok(Character::Sho),
            "ryoko" => Ok(Character::Ryoko),
            _ => Err(format!("Unknown character '{s}'")),
        }
    }
}

/// Current trial and selected character.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSession {
    pub current_trial: Trial,
    pub character: Character,
}

impl GameSession {
    pub fn new(current_trial: Trial, character: Character) -> Self {
        Self {
            current_trial,
            character,
        }
    }

    pub fn next_trial(&self) -> Trial {
        self.current_trial.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_follows_map_order() {
        assert_eq!(Trial::Run.next(), Trial::Jump);
        assert_eq!(Trial::Jump.next(), Trial::Cut);
        assert_eq!(Trial::Cut.next(), Trial::Shuriken);
        assert_eq!(Trial::Shuriken.next(), Trial::Run);
    }

    #[test]
    fn test_next_place_is_adjacent() {
        for trial in [Trial::Run, Trial::Jump, Trial::Cut] {
            assert_eq!(trial.next().place_index(), trial.place_index() + 1);
        }
    }

    #[test]
    fn test_drawing_tiles_are_distinct() {
        let mut tiles: Vec<usize> = Trial::ALL.iter().map(|t| t.drawing_tile()).collect();
        tiles.sort();
        assert_eq!(tiles, vec![0, 1, 2, 3]);
        assert_eq!(Trial::Jump.drawing_tile(), 0);
        assert_eq!(Trial::Cut.drawing_tile(), 3);
    }

    #[test]
    fn test_parse_trial() {
        assert_eq!("Shuriken".parse::<Trial>(), Ok(Trial::Shuriken));
        assert!("vanish".parse::<Trial>().is_err());
    }

    #[test]
    fn test_character_defaults_to_sho() {
        assert_eq!(Character::parse_or_default("ryoko"), Character::Ryoko);
        assert_eq!(Character::parse_or_default("kenji"), Character::Sho);
    }

    #[test]
    fn test_session_next_trial() {
        let session = GameSession::new(Trial::Cut, Character::Ryoko);
        assert_eq!(session.next_trial(), Trial::Shuriken);
    }
}
