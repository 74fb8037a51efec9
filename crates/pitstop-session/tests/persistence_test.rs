use pitstop_core::constants::MAX_SESSION_ID_LEN;
use pitstop_core::models::{ConversationState, Role, Transmission};
use pitstop_core::traits::ISessionPersistence;
use pitstop_session::{JsonFilePersistence, MemoryPersistence, SessionStore};

fn populated_store() -> SessionStore {
    let store = SessionStore::default();
    store
        .add_message("user/42", Role::User, "Motor saya susah dihidupkan")
        .unwrap();
    store
        .add_message("user/42", Role::Assistant, "Periksa aki dan busi")
        .unwrap();
    store
        .set_state("user/42", ConversationState::Diagnosis)
        .unwrap();
    store.set_topic("user/42", Some("kelistrikan".into())).unwrap();
    store
}

#[test]
fn json_file_roundtrip_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let persistence = JsonFilePersistence::open(dir.path().join("sessions")).unwrap();
    let store = populated_store();
    let mut session = store.snapshot("user/42").unwrap();
    session.vehicle.transmission = Some(Transmission::Matic);

    persistence.save(&session).unwrap();
    assert!(persistence.path_for("user/42").exists());

    let loaded = persistence.load("user/42").unwrap().unwrap();
    assert_eq!(loaded, session);

    // A fresh store can be rebuilt from the saved copy.
    let restored = SessionStore::default();
    restored.restore(loaded).unwrap();
    assert_eq!(restored.recent_history("user/42", 5).unwrap().len(), 2);
}

#[test]
fn json_file_missing_session_is_none_and_delete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let persistence = JsonFilePersistence::open(dir.path()).unwrap();
    assert!(persistence.load("nobody").unwrap().is_none());
    persistence.delete("nobody").unwrap();

    let session = populated_store().snapshot("user/42").unwrap();
    persistence.save(&session).unwrap();
    persistence.delete("user/42").unwrap();
    assert!(persistence.load("user/42").unwrap().is_none());
}

#[test]
fn json_file_handles_ids_at_the_length_limit() {
    let dir = tempfile::tempdir().unwrap();
    let persistence = JsonFilePersistence::open(dir.path()).unwrap();
    let store = SessionStore::default();

    for id in ["a".repeat(MAX_SESSION_ID_LEN), ".".repeat(90), "/".repeat(MAX_SESSION_ID_LEN)] {
        store.add_message(&id, Role::User, "rem blong").unwrap();
        let session = store.snapshot(&id).unwrap();
        persistence.save(&session).unwrap();

        let path = persistence.path_for(&id);
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.len() < 255, "{file_name}");
        assert_eq!(persistence.load(&id).unwrap().unwrap(), session);
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn json_file_rejects_corrupt_documents() {
    let dir = tempfile::tempdir().unwrap();
    let persistence = JsonFilePersistence::open(dir.path()).unwrap();
    std::fs::write(persistence.path_for("bad"), "{ not json").unwrap();
    let err = persistence.load("bad").unwrap_err();
    assert!(err.to_string().contains("serialization failed"));
}

#[test]
fn memory_persistence_roundtrip() {
    let persistence = MemoryPersistence::new();
    assert!(persistence.is_empty());
    let session = populated_store().snapshot("user/42").unwrap();
    persistence.save(&session).unwrap();
    assert_eq!(persistence.load("user/42").unwrap(), Some(session));
    persistence.delete("user/42").unwrap();
    assert!(persistence.is_empty());
}
