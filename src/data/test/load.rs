use super::*;

fn write_asset(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn write_all_assets(root: &Path) {
    write_asset(root, "characters.json", r#"[{"name": "Amber"}]"#);
    write_asset(root, "enemies.json", r#"[{"id": "hilichurl"}]"#);
    write_asset(root, "weapons.json", r#"[{"name": "Dull Blade"}, {"name": "Skyward Harp"}]"#);
    write_asset(root, "other/elements.json", r#"[{"name": "Pyro", "description": "Fire"}]"#);
    write_asset(root, "other/reactions.json", r#"[{"name": "Melt"}]"#);
    write_asset(root, "consumables/food.json", r#"[]"#);
}

/// Tests loading the full asset tree.
///
/// Expected: Ok with every table populated from its file
#[test]
fn loads_every_table() {
    let dir = tempfile::tempdir().unwrap();
    write_all_assets(dir.path());

    let data = GameData::load(dir.path()).unwrap();

    assert_eq!(data.len(GameDataKind::Character), 1);
    assert_eq!(data.len(GameDataKind::Enemy), 1);
    assert_eq!(data.len(GameDataKind::Weapon), 2);
    assert_eq!(data.len(GameDataKind::Element), 1);
    assert_eq!(data.len(GameDataKind::Reaction), 1);
    assert_eq!(data.len(GameDataKind::Food), 0);
    assert!(data.get(GameDataKind::Enemy, "Hilichurl").is_some());
}

/// Tests that a missing asset file aborts loading.
///
/// Expected: Err(Read) naming the missing file
#[test]
fn fails_on_missing_asset() {
    let dir = tempfile::tempdir().unwrap();
    write_all_assets(dir.path());
    std::fs::remove_file(dir.path().join("consumables/food.json")).unwrap();

    match GameData::load(dir.path()) {
        Err(AssetError::Read { path, .. }) => {
            assert!(path.ends_with("consumables/food.json"));
        }
        other => panic!("expected Read error, got {:?}", other.map(|_| ())),
    }
}

/// Tests loading the bundled asset tree.
///
/// Expected: every table loads and enemies resolve by id
#[test]
fn loads_bundled_assets() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");

    let data = GameData::load(&dir).unwrap();

    for kind in GameDataKind::ALL {
        assert!(data.len(kind) > 0, "{} table is empty", kind.label());
    }
    assert!(data.get(GameDataKind::Enemy, "hilichurl").is_some());
    assert_eq!(
        data.get(GameDataKind::Element, "pyro").unwrap()["reactions"][1],
        "Melt"
    );
}
