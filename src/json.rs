#![cfg(feature = "std")]
//! Persisted form of a game: a keyed JSON object.
//!
//! ```json
//! {"playerIndex":0,"gameId":"…","board":"…","shootingBoard":"…","log":"00H10W"}
//! ```
//!
//! Every key is mandatory on decode. Unknown keys are skipped and a repeated
//! key replaces the earlier value.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardContent;
use crate::codec;
use crate::game::{ShotRecord, SinglePlayerGame};

const FIELDS: &[&str] = &["playerIndex", "gameId", "board", "shootingBoard", "log"];

impl Serialize for BoardContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&codec::encode_board(self))
    }
}

struct BoardVisitor;

impl<'de> Visitor<'de> for BoardVisitor {
    type Value = BoardContent;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 100 character board string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BoardContent, E> {
        codec::decode_board(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for BoardContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(BoardVisitor)
    }
}

impl Serialize for SinglePlayerGame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SinglePlayerGame", FIELDS.len())?;
        s.serialize_field("playerIndex", &self.player_index())?;
        s.serialize_field("gameId", &self.game_id())?;
        s.serialize_field("board", self.board())?;
        s.serialize_field("shootingBoard", self.shooting_board())?;
        s.serialize_field("log", &codec::encode_log(self.log()))?;
        s.end()
    }
}

/// Recognised keys of the persisted object.
enum Field {
    PlayerIndex,
    GameId,
    Board,
    ShootingBoard,
    Log,
    Unknown,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a property name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Field, E> {
                Ok(match v {
                    "playerIndex" => Field::PlayerIndex,
                    "gameId" => Field::GameId,
                    "board" => Field::Board,
                    "shootingBoard" => Field::ShootingBoard,
                    "log" => Field::Log,
                    _ => Field::Unknown,
                })
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

/// Accepts only the hyphenated 36-character form, e.g.
/// `6f1c2a4e-8b3d-4f5a-9c7e-0d2b4a6c8e10`.
fn parse_game_id(text: &str) -> Result<Uuid, String> {
    let bytes = text.as_bytes();
    let hyphenated = bytes.len() == 36
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        });
    if !hyphenated {
        return Err(format!("invalid game id {:?}, expected hyphenated form", text));
    }
    Uuid::try_parse(text).map_err(|e| format!("invalid game id {:?}: {}", text, e))
}

struct GameVisitor;

impl<'de> Visitor<'de> for GameVisitor {
    type Value = SinglePlayerGame;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a single-player game object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SinglePlayerGame, A::Error> {
        let mut player_index: Option<i32> = None;
        let mut game_id: Option<Uuid> = None;
        let mut board: Option<BoardContent> = None;
        let mut shooting_board: Option<BoardContent> = None;
        let mut log: Option<Vec<ShotRecord>> = None;

        while let Some(key) = map.next_key::<Field>()? {
            match key {
                Field::PlayerIndex => player_index = Some(map.next_value()?),
                Field::GameId => {
                    let text: String = map.next_value()?;
                    game_id = Some(parse_game_id(&text).map_err(de::Error::custom)?);
                }
                Field::Board => board = Some(map.next_value()?),
                Field::ShootingBoard => shooting_board = Some(map.next_value()?),
                Field::Log => {
                    let text: String = map.next_value()?;
                    log = Some(codec::decode_log(&text).map_err(de::Error::custom)?);
                }
                Field::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let player_index = player_index.ok_or_else(|| de::Error::missing_field("playerIndex"))?;
        let game_id = game_id.ok_or_else(|| de::Error::missing_field("gameId"))?;
        let board = board.ok_or_else(|| de::Error::missing_field("board"))?;
        let shooting_board =
            shooting_board.ok_or_else(|| de::Error::missing_field("shootingBoard"))?;
        let log = log.ok_or_else(|| de::Error::missing_field("log"))?;

        Ok(SinglePlayerGame::from_parts(
            game_id,
            player_index,
            board,
            shooting_board,
            log,
        ))
    }
}

impl<'de> Deserialize<'de> for SinglePlayerGame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("SinglePlayerGame", FIELDS, GameVisitor)
    }
}

/// Serialize a game to its persisted JSON form.
pub fn to_json(game: &SinglePlayerGame) -> serde_json::Result<String> {
    serde_json::to_string(game)
}

/// Parse a game from its persisted JSON form.
pub fn from_json(text: &str) -> serde_json::Result<SinglePlayerGame> {
    let game: SinglePlayerGame = serde_json::from_str(text)?;
    log::debug!(
        "restored game {} with {} shots",
        game.game_id(),
        game.number_of_shots()
    );
    Ok(game)
}
