//! Container configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::environment::EnvSync;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputConfig {
    /// Coupling between the text and numeric views of environment constants.
    #[cfg_attr(feature = "serde", serde(default))]
    pub env_sync: EnvSync,
}

impl InputConfig {
    pub fn synchronized() -> Self {
        Self {
            env_sync: EnvSync::Synchronized,
        }
    }
}
