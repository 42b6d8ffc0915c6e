use super::*;
use inventory::ServerId;

#[test]
fn no_path_means_seed_data() {
    let data = DataFile::default();
    let (servers, users) = data.load().unwrap();
    assert_eq!(servers, ServerStore::seeded());
    assert_eq!(users, UserDirectory::seeded());
    data.save(&servers, &users).unwrap();
}

#[test]
fn missing_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataFile::new(Some(dir.path().join("absent.json")));
    let (servers, _) = data.load().unwrap();
    assert_eq!(servers.len(), ServerStore::seeded().len());
}

#[test]
fn saved_changes_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataFile::new(Some(dir.path().join("nested").join("rackdesk.json")));
    let (mut servers, users) = data.load().unwrap();
    servers.remove(ServerId(1)).unwrap();
    data.save(&servers, &users).unwrap();

    let (reloaded, reloaded_users) = data.load().unwrap();
    assert_eq!(reloaded, servers);
    assert_eq!(reloaded_users, users);
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "[1, 2").unwrap();
    let err = DataFile::new(Some(path)).load().unwrap_err();
    assert!(matches!(err, DataError::Malformed { .. }));
}
