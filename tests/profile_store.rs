use std::sync::Arc;
use std::thread;

use macrolink::error::AppError;
use macrolink::store::{ProfileStore, normalize};
use tempfile::TempDir;

fn store() -> (TempDir, ProfileStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ProfileStore::new(dir.path().join("profiles.json"));
    (dir, store)
}

fn macros(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn normalizes_profile_names() {
    assert_eq!(normalize(" Foo "), "foo");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(&normalize("  MiXeD ")), normalize("  MiXeD "));
}

#[test]
fn get_matches_any_casing_and_whitespace() {
    let (_dir, store) = store();
    let saved = macros(&["Reinforce", "Orbital Laser", "Reinforce"]);

    let key = store
        .set_profile("u1", "  Night Drop ", saved.clone())
        .expect("save");
    assert_eq!(key, "night drop");

    for name in ["night drop", "NIGHT DROP", " Night Drop"] {
        assert_eq!(store.get_profile("u1", name).expect("get"), saved);
    }
}

#[test]
fn save_overwrites_same_normalized_key() {
    let (_dir, store) = store();
    store.set_profile("u1", "Quick", macros(&["a"])).expect("save");
    store.set_profile("u1", "QUICK", macros(&["b"])).expect("save");

    assert_eq!(store.list_profile_names("u1").expect("list"), ["quick"]);
    assert_eq!(store.get_profile("u1", "quick").expect("get"), ["b"]);
}

#[test]
fn rename_preserves_content() {
    let (_dir, store) = store();
    store.set_profile("u1", "a", macros(&["x"])).expect("save");

    let renamed = store.rename_profile("u1", "a", "B").expect("rename");
    assert_eq!(renamed, ("a".to_string(), "b".to_string()));
    assert_eq!(store.get_profile("u1", "b").expect("get"), ["x"]);
    assert!(matches!(
        store.get_profile("u1", "a"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn rename_missing_source_is_not_found() {
    let (_dir, store) = store();
    store.set_profile("u1", "a", macros(&["x"])).expect("save");

    assert!(matches!(
        store.rename_profile("u1", "missing", "b"),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.rename_profile("nobody", "a", "b"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn rename_onto_existing_is_conflict_and_changes_nothing() {
    let (_dir, store) = store();
    store.set_profile("u1", "a", macros(&[])).expect("save");
    store.set_profile("u1", "b", macros(&["keep"])).expect("save");
    let before = store.list_all_profiles().expect("load");

    assert!(matches!(
        store.rename_profile("u1", "a", "b"),
        Err(AppError::Conflict(_))
    ));
    assert_eq!(store.list_all_profiles().expect("load"), before);
}

#[test]
fn delete_removes_only_target() {
    let (_dir, store) = store();
    store.set_profile("u1", "a", macros(&["x"])).expect("save");
    store.set_profile("u1", "b", macros(&["y"])).expect("save");

    store.delete_profile("u1", " A ").expect("delete");
    assert_eq!(store.list_profile_names("u1").expect("list"), ["b"]);
    assert!(matches!(
        store.delete_profile("u1", "a"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn unknown_user_lists_nothing() {
    let (_dir, store) = store();
    assert!(store.list_profile_names("ghost").expect("list").is_empty());
    assert!(matches!(
        store.get_profile("ghost", "a"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn state_survives_reopening_the_file() {
    let (dir, store) = store();
    store
        .set_profile("u1", "Quick", macros(&["Reinforce", "Resupply"]))
        .expect("save");
    store.set_profile("u2", "slow", macros(&[])).expect("save");
    drop(store);

    let reopened = ProfileStore::new(dir.path().join("profiles.json"));
    let doc = reopened.list_all_profiles().expect("load");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc["u1"]["quick"], ["Reinforce", "Resupply"]);
    assert!(doc["u2"]["slow"].is_empty());
}

#[test]
fn explicit_save_replaces_whole_document() {
    let (_dir, store) = store();
    store.set_profile("u1", "a", macros(&["x"])).expect("save");

    let mut doc = store.load().expect("load");
    doc.remove("u1");
    doc.entry("u3".to_string())
        .or_default()
        .insert("fresh".to_string(), macros(&["z"]));
    store.save(&doc).expect("save document");

    assert_eq!(store.load().expect("load"), doc);
}

#[test]
fn concurrent_saves_do_not_lose_updates() {
    let (_dir, store) = store();
    let store = Arc::new(store);

    let handles = (0..16)
        .map(|index| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .set_profile("u1", &format!("Profile {index}"), vec![format!("m{index}")])
                    .expect("save");
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().expect("writer thread");
    }

    let names = store.list_profile_names("u1").expect("list");
    assert_eq!(names.len(), 16);
    for index in 0..16 {
        assert_eq!(
            store
                .get_profile("u1", &format!("profile {index}"))
                .expect("get"),
            [format!("m{index}")]
        );
    }
}
