//! Custom event emission.

use super::Vars;
use serde::{Deserialize, Serialize};

/// A custom event routed to the server's event processors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub properties: Vars,
    pub timestamp: i64,
    pub external: bool,
}
