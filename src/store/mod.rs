//! The authoritative task store

use crate::config::{Backend, Config};
use crate::storage::backend::{FileStore, MemoryStore};
use crate::storage::KeyValueStore;
use crate::task::{filter, FilterMode, Task};
use tracing::{debug, warn};

/// Owns the ordered task sequence and mirrors it to a key-value store
///
/// The in-memory sequence is the single source of truth for the session;
/// persistence is a best-effort cache. Read and write failures are logged
/// and swallowed, never surfaced to the caller.
pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Box<dyn KeyValueStore>,
    key: String,
    filter: FilterMode,
    /// Whether any state-changing mutation has happened since load
    mutated: bool,
}

impl TaskStore {
    /// Open a store over `backend`, loading any sequence persisted under `key`
    ///
    /// The load happens exactly once, here, before any mutation can be
    /// issued. An absent, malformed, or unreadable value degrades to an
    /// empty sequence.
    pub fn open(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = match backend.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => {
                    debug!("Loaded {} tasks under key {}", tasks.len(), key);
                    tasks
                }
                Err(e) => {
                    warn!("Persisted value under key {} is malformed: {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read key {}: {}", key, e);
                Vec::new()
            }
        };

        Self {
            tasks,
            backend,
            key,
            filter: FilterMode::default(),
            mutated: false,
        }
    }

    /// Open a store using the backend named by `config`
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        config.validate()?;

        let backend: Box<dyn KeyValueStore> = match config.backend {
            Backend::Memory => Box::new(MemoryStore::new()),
            Backend::File => {
                // validate() guarantees data_dir is present for File
                let data_dir = config.data_dir.as_ref().ok_or_else(|| {
                    crate::TaskListError::Config("File backend requires data_dir".to_string())
                })?;
                Box::new(FileStore::new(data_dir)?)
            }
        };

        Ok(Self::open(backend, config.storage_key.clone()))
    }

    /// Append a new pending task; whitespace-only text is a silent no-op
    pub fn add_task(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        self.tasks.push(Task::new(text));
        debug!("Task added at index {}", self.tasks.len() - 1);
        self.mutated = true;
        self.persist();
    }

    /// Flip the completion flag of the task at `index`
    pub fn toggle_complete(&mut self, index: usize) {
        self.assert_index(index);
        self.tasks[index].toggle();
        debug!(
            "Task {} toggled to completed={}",
            index, self.tasks[index].completed
        );
        self.mutated = true;
        self.persist();
    }

    /// Replace the text of the task at `index`; trimmed-empty text is a no-op
    pub fn edit_task(&mut self, index: usize, new_text: &str) {
        self.assert_index(index);
        if new_text.trim().is_empty() {
            return;
        }

        self.tasks[index].set_text(new_text);
        debug!("Task {} edited", index);
        self.mutated = true;
        self.persist();
    }

    /// Edit via a view-supplied prompt capability
    ///
    /// The prompt receives the current text and returns the replacement, or
    /// `None` for cancellation. The core never blocks on the UI; whatever
    /// the prompt does, it has returned by the time this runs.
    pub fn edit_task_with<F>(&mut self, index: usize, prompt: F)
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.assert_index(index);
        if let Some(new_text) = prompt(&self.tasks[index].text) {
            self.edit_task(index, &new_text);
        }
    }

    /// Remove the task at `index`, shifting subsequent tasks left by one
    pub fn delete_task(&mut self, index: usize) {
        self.assert_index(index);
        self.tasks.remove(index);
        debug!("Task {} deleted, {} remaining", index, self.tasks.len());
        self.mutated = true;
        self.persist();
    }

    /// The full task sequence, in order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the sequence
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The current filter mode
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Set the filter mode (UI state only, never persisted)
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// Tasks matching the current filter, in original order
    pub fn projection(&self) -> Vec<&Task> {
        filter::project(&self.tasks, self.filter)
    }

    /// Tasks matching the current filter, paired with their source index
    pub fn projection_indexed(&self) -> Vec<(usize, &Task)> {
        filter::project_indexed(&self.tasks, self.filter)
    }

    /// Serialize the full sequence and write it under the store's key
    ///
    /// Skipped only while the sequence is empty and nothing has mutated
    /// since load, so a freshly-loaded empty store never clobbers persisted
    /// data. A delete that empties the list still writes. Write failures
    /// are logged and ignored; the next mutation re-attempts.
    fn persist(&self) {
        if self.tasks.is_empty() && !self.mutated {
            return;
        }

        let raw = match serde_json::to_string(&self.tasks) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize {} tasks: {}", self.tasks.len(), e);
                return;
            }
        };

        if let Err(e) = self.backend.set(&self.key, &raw) {
            warn!("Failed to persist under key {}: {}", self.key, e);
        }
    }

    fn assert_index(&self, index: usize) {
        // Out-of-range index means the view computed positions against a
        // different sequence than it was given; fail fast.
        assert!(
            index < self.tasks.len(),
            "task index {} out of range (len {})",
            index,
            self.tasks.len()
        );
    }
}
