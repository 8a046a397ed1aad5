use crate::{
    data::game_data::{GameData, GameDataKind},
    error::asset::AssetError,
};
use serde_json::json;
use std::path::Path;

mod load;
