//! Auth data models.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Default permission label for new credentials.
pub const DEFAULT_PERMISSION: &str = "Usuario";

/// Permission level attached to a credential (`permissao`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Permission {
    fn default() -> Self {
        Self::new(DEFAULT_PERMISSION)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// New credential persistence payload.
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub password: Zeroizing<String>,
    pub permission: Permission,
}
