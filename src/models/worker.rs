use serde::Serialize;

/// A crew member whose clock events the engine aggregates.
/// Identity and profile are owned by the store; the engine only reads them.
#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub position: String, // job title, e.g. "Picker", "Foreman"
    pub active: bool,
}

impl Worker {
    pub fn new(id: i64, name: &str, position: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            position: position.to_string(),
            active: true,
        }
    }
}
