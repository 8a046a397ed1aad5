//! In-memory lookup tables for the static game-data assets.
//!
//! Each asset is a JSON array of flat objects. Tables are loaded once at startup,
//! keyed by the record's natural identifier, and never change afterwards. Records
//! stay opaque `serde_json::Value`s apart from the projection applied to elements
//! and reactions.

use dioxus_logger::tracing;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::asset::AssetError;

/// The kinds of records the bot caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameDataKind {
    Character,
    Enemy,
    Element,
    Reaction,
    Food,
    Weapon,
}

impl GameDataKind {
    pub const ALL: [GameDataKind; 6] = [
        Self::Character,
        Self::Enemy,
        Self::Element,
        Self::Reaction,
        Self::Food,
        Self::Weapon,
    ];

    /// Asset path relative to the data directory.
    pub fn asset_path(&self) -> &'static str {
        match self {
            Self::Character => "characters.json",
            Self::Enemy => "enemies.json",
            Self::Element => "other/elements.json",
            Self::Reaction => "other/reactions.json",
            Self::Food => "consumables/food.json",
            Self::Weapon => "weapons.json",
        }
    }

    /// Field each record is keyed by.
    pub fn key_field(&self) -> &'static str {
        match self {
            Self::Enemy => "id",
            _ => "name",
        }
    }

    /// Fields kept from each record, `None` keeps the whole record.
    fn projection(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Element => Some(&["name", "description", "reactions"]),
            Self::Reaction => Some(&["name", "description", "elementalFormula"]),
            _ => None,
        }
    }

    /// Lowercase singular label, also used as the `/info` sub-command name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Enemy => "enemy",
            Self::Element => "element",
            Self::Reaction => "reaction",
            Self::Food => "food",
            Self::Weapon => "weapon",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

/// Cached game data, one table per `GameDataKind`.
#[derive(Debug, Default)]
pub struct GameData {
    tables: HashMap<GameDataKind, HashMap<String, Value>>,
}

impl GameData {
    /// Creates an empty cache with no tables loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every asset table from the data directory.
    ///
    /// # Arguments
    /// - `dir` - Root of the asset tree (`DATA_DIR`)
    ///
    /// # Returns
    /// - `Ok(GameData)` - All six tables cached
    /// - `Err(AssetError)` - An asset is missing, malformed, or has an unkeyed record
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let mut data = Self::new();

        for kind in GameDataKind::ALL {
            let path = dir.join(kind.asset_path());
            let contents = std::fs::read_to_string(&path).map_err(|source| AssetError::Read {
                path: path.clone(),
                source,
            })?;

            let count = data.insert_json(kind, &path, &contents)?;
            tracing::debug!("Cached {} {} records from {}", count, kind.label(), path.display());
        }

        Ok(data)
    }

    /// Parses a JSON array and stores it as the table for `kind`.
    ///
    /// Replaces any table previously stored for the kind. Records sharing a key
    /// overwrite each other in file order.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of distinct keys in the table
    /// - `Err(AssetError::Parse)` - Contents are not a JSON array of objects
    /// - `Err(AssetError::MissingKey)` - A record has no string or integer key field
    pub fn insert_json(
        &mut self,
        kind: GameDataKind,
        path: &Path,
        contents: &str,
    ) -> Result<usize, AssetError> {
        let records: Vec<Map<String, Value>> =
            serde_json::from_str(contents).map_err(|source| AssetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let key_field = kind.key_field();
        let mut table = HashMap::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let key = match record.get(key_field) {
                Some(Value::String(key)) => key.clone(),
                Some(Value::Number(key)) => key.to_string(),
                _ => {
                    return Err(AssetError::MissingKey {
                        path: PathBuf::from(path),
                        index,
                        key: key_field,
                    })
                }
            };

            let record = match kind.projection() {
                Some(fields) => Value::Object(
                    fields
                        .iter()
                        .filter_map(|field| {
                            record
                                .get(*field)
                                .map(|value| (field.to_string(), value.clone()))
                        })
                        .collect(),
                ),
                None => Value::Object(record),
            };

            table.insert(key.to_lowercase(), record);
        }

        let count = table.len();
        self.tables.insert(kind, table);

        Ok(count)
    }

    /// Looks up a record by its key, ignoring case.
    pub fn get(&self, kind: GameDataKind, key: &str) -> Option<&Value> {
        self.tables
            .get(&kind)
            .and_then(|table| table.get(&key.trim().to_lowercase()))
    }

    /// Number of records cached for `kind`.
    pub fn len(&self, kind: GameDataKind) -> usize {
        self.tables.get(&kind).map_or(0, HashMap::len)
    }
}

