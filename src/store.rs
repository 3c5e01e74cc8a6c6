use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// A to-do entry. Missing fields decode as empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Todo {
    pub title: String,
    pub description: String,
}

impl Todo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Todo {
        Todo {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Decodes the first JSON value in `bytes`, which must be an object.
    /// Anything after that value is ignored.
    pub fn from_json(bytes: &[u8]) -> Result<Todo, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_slice(bytes);
        let object = Map::<String, Value>::deserialize(&mut de)?;
        serde_json::from_value(Value::Object(object))
    }
}

/// Append-only, insertion-ordered list of todos. Reads share the lock,
/// appends hold it exclusively.
pub struct TodoStore {
    inner: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> TodoStore {
        TodoStore {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub async fn list(&self) -> Vec<Todo> {
        let inner = self.inner.read().await;
        inner.clone()
    }

    /// Returns the number of todos held once `todo` is in.
    pub async fn append(&self, todo: Todo) -> usize {
        let mut inner = self.inner.write().await;
        inner.push(todo);
        inner.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
