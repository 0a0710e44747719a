use taskpad_core::{
    decode_tasks, encode_tasks, MemoryStateStore, PersistError, Priority, SqliteStateStore,
    StateStore, Task, TaskStore, TASKS_KEY,
};
use uuid::Uuid;

fn sample_tasks() -> Vec<Task> {
    let mut urgent = Task::with_id(Uuid::new_v4(), "urgent", Priority::High, 11_000);
    urgent.completed = true;
    vec![
        Task::with_id(Uuid::new_v4(), "first", Priority::Normal, 9_000),
        urgent,
        Task::with_id(Uuid::new_v4(), "później", Priority::Low, 10_000),
    ]
}

#[test]
fn encode_decode_roundtrips_values_and_order() {
    let tasks = sample_tasks();
    let payload = encode_tasks(&tasks).unwrap();
    let decoded = decode_tasks(&payload).unwrap();
    assert_eq!(decoded, tasks);
}

#[test]
fn sqlite_store_roundtrips_a_payload() {
    let store = SqliteStateStore::open_in_memory().unwrap();

    assert_eq!(store.load(TASKS_KEY).unwrap(), None);

    store.save(TASKS_KEY, "[1]").unwrap();
    store.save(TASKS_KEY, "[1,2]").unwrap();
    assert_eq!(store.load(TASKS_KEY).unwrap().as_deref(), Some("[1,2]"));
}

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.db");

    let tasks = sample_tasks();
    let payload = encode_tasks(&tasks).unwrap();
    {
        let store = SqliteStateStore::open(&path).unwrap();
        store.save(TASKS_KEY, &payload).unwrap();
    }

    let reopened = SqliteStateStore::open(&path).unwrap();
    let loaded = reopened.load(TASKS_KEY).unwrap().unwrap();
    assert_eq!(loaded, payload);
    assert_eq!(decode_tasks(&loaded).unwrap(), tasks);
}

#[test]
fn sqlite_store_rejects_newer_schema_versions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    }

    let err = SqliteStateStore::open(&path).unwrap_err();
    assert!(matches!(
        err,
        PersistError::UnsupportedSchemaVersion {
            db_version: 99,
            ..
        }
    ));
}

#[test]
fn task_store_roundtrips_through_sqlite() {
    let state = SqliteStateStore::open_in_memory().unwrap();

    let (created, toggled_id) = {
        let mut store = TaskStore::load(&state);
        store.create("persisted one", Priority::High).unwrap();
        let second = store.create("persisted two", Priority::Low).unwrap();
        store.toggle_completed(second.id).unwrap();
        (store.list().to_vec(), second.id)
    };

    let reloaded = TaskStore::load(&state);
    assert_eq!(reloaded.list(), created.as_slice());
    let toggled = reloaded
        .list()
        .iter()
        .find(|task| task.id == toggled_id)
        .unwrap();
    assert!(toggled.completed);
}

#[test]
fn absent_key_yields_empty_collection() {
    let store = TaskStore::load(MemoryStateStore::new());
    assert!(store.list().is_empty());
}

#[test]
fn undecodable_payload_yields_empty_collection() {
    let state = MemoryStateStore::new();
    state.save(TASKS_KEY, "{not json").unwrap();

    let store = TaskStore::load(&state);
    assert!(store.list().is_empty());
}

#[test]
fn duplicate_ids_in_payload_keep_only_the_first() {
    let id = Uuid::new_v4();
    let original = Task::with_id(id, "original", Priority::Normal, 1_000);
    let impostor = Task::with_id(id, "impostor", Priority::High, 2_000);
    let other = Task::with_id(Uuid::new_v4(), "other", Priority::Low, 3_000);
    let payload = encode_tasks(&[original.clone(), impostor, other.clone()]).unwrap();

    let state = MemoryStateStore::new();
    state.save(TASKS_KEY, &payload).unwrap();

    let store = TaskStore::load(&state);
    assert_eq!(store.list(), [original, other].as_slice());
}
