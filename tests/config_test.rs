use std::fs;
use task_list_rs::config::{Backend, Config};
use task_list_rs::TaskStore;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.storage_key, "tasks");
    assert_eq!(config.backend, Backend::Memory);
    assert!(config.data_dir.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_storage_key_fails_validation() {
    let config = Config {
        storage_key: "  ".to_string(),
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_file_backend_requires_data_dir() {
    let config = Config {
        backend: Backend::File,
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_load_config_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
storage_key = "tasks"
backend = "file"
data_dir = "/tmp/task-list"
"#,
    )
    .unwrap();

    let config = Config::from_file(path.to_str().unwrap()).unwrap();

    assert_eq!(config.storage_key, "tasks");
    assert_eq!(config.backend, Backend::File);
    assert_eq!(config.data_dir.as_deref().unwrap().to_str(), Some("/tmp/task-list"));
}

#[test]
fn test_load_config_from_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        r#"
storage_key: "todo"
backend: "memory"
"#,
    )
    .unwrap();

    let config = Config::from_file(path.to_str().unwrap()).unwrap();

    assert_eq!(config.storage_key, "todo");
    assert_eq!(config.backend, Backend::Memory);
    assert!(config.data_dir.is_none());
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "backend = \"carrier-pigeon\"\nstorage_key = \"tasks\"\n").unwrap();

    assert!(Config::from_file(path.to_str().unwrap()).is_err());
}

#[test]
fn test_store_from_file_backend_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        storage_key: "tasks".to_string(),
        backend: Backend::File,
        data_dir: Some(dir.path().to_path_buf()),
    };

    {
        let mut store = TaskStore::from_config(&config).unwrap();
        store.add_task("persisted across opens");
    }

    let reopened = TaskStore::from_config(&config).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.tasks()[0].text, "persisted across opens");
}
