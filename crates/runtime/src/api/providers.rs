//! Asynchronous abstraction for sourcing the controlled entity's intent.
//!
//! Runtime users plug in [`IntentProvider`] implementations so the simulation
//! can run with human input, scripted fixtures, or automated policies.
use std::collections::VecDeque;

use async_trait::async_trait;
use crawler_core::{FloorSnapshot, Intent};
use tokio::sync::Mutex;

use super::errors::Result;

/// Source of one discrete intent per controlled turn.
#[async_trait]
pub trait IntentProvider: Send + Sync {
    /// Decide what the controlled entity does on the floor shown by
    /// `snapshot`. [`Intent::NONE`] leaves the turn open.
    async fn provide_intent(&self, snapshot: &FloorSnapshot) -> Result<Intent>;
}

/// Never moves. Useful for testing or as a fallback.
pub struct IdleIntentProvider;

#[async_trait]
impl IntentProvider for IdleIntentProvider {
    async fn provide_intent(&self, _snapshot: &FloorSnapshot) -> Result<Intent> {
        Ok(Intent::NONE)
    }
}

/// Replays a fixed list of intents, then goes idle.
#[derive(Default)]
pub struct ScriptedIntentProvider {
    script: Mutex<VecDeque<Intent>>,
}

impl ScriptedIntentProvider {
    pub fn new(script: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl IntentProvider for ScriptedIntentProvider {
    async fn provide_intent(&self, _snapshot: &FloorSnapshot) -> Result<Intent> {
        Ok(self.script.lock().await.pop_front().unwrap_or(Intent::NONE))
    }
}
