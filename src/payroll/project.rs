use serde::{Deserialize, Serialize};

/// A client project an employee can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub payment: u64,
    pub client: String,
}

impl Project {
    pub fn new(name: impl Into<String>, payment: u64, client: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payment,
            client: client.into(),
        }
    }

    /// Progress notice addressed to the client.
    pub fn notify_client(&self) -> String {
        format!(
            "Notifying {} about the progress of the {} ...",
            self.client, self.name
        )
    }
}
