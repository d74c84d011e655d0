//! The component tree store.
//!
//! [`Store`] is the single owner of builder state. Every mutation that changes
//! the persisted part of the state writes a snapshot through the injected
//! [`Storage`] adapter. Saving is best-effort: a failed save is logged and the
//! mutation still stands.

use crate::errors::StoreError;
use crate::node::{ComponentNode, NodeUpdate};
use crate::storage::Storage;
use crate::types::{Framework, NodeId, NodeType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// The persisted unit of state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderState {
    #[serde(default)]
    pub components: Vec<ComponentNode>,
    #[serde(default = "default_framework")]
    pub framework: String,
}

fn default_framework() -> String {
    Framework::default().as_str().to_string()
}

impl Default for BuilderState {
    fn default() -> Self {
        Self {
            components: Vec::new(),
            framework: default_framework(),
        }
    }
}

/// Accepted shapes of the stored record.
#[derive(Deserialize)]
#[serde(untagged)]
enum PersistedRecord {
    /// `{"state": {...}, "version": N}`, a versioned persist envelope.
    Envelope {
        state: BuilderState,
        #[allow(dead_code)]
        #[serde(default)]
        version: Option<u64>,
    },
    Plain(BuilderState),
}

impl BuilderState {
    /// Decode a stored record.
    pub fn from_record(record: &str) -> serde_json::Result<Self> {
        Ok(match serde_json::from_str::<PersistedRecord>(record)? {
            PersistedRecord::Envelope { state, .. } => state,
            PersistedRecord::Plain(state) => state,
        })
    }
}

/// Owner of the component sequence, framework tag and selection.
#[derive(Debug)]
pub struct Store<S: Storage> {
    state: BuilderState,
    selected: Option<NodeId>,
    storage: S,
    last_stamp: u64,
}

impl<S: Storage> Store<S> {
    /// Open a store, restoring state from `storage`.
    ///
    /// A missing, unreadable or corrupt record starts an empty tree targeting react.
    pub fn open(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(record)) => BuilderState::from_record(&record).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored builder state is corrupt, starting empty");
                BuilderState::default()
            }),
            Ok(None) => BuilderState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read builder state, starting empty");
                BuilderState::default()
            }
        };

        Self {
            state,
            selected: None,
            storage,
            last_stamp: 0,
        }
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn components(&self) -> &[ComponentNode] {
        &self.state.components
    }

    /// The framework tag as stored, which may be unrecognized.
    pub fn framework(&self) -> &str {
        &self.state.framework
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Find a top-level node.
    pub fn find(&self, id: &NodeId) -> Option<&ComponentNode> {
        self.state.components.iter().find(|c| &c.id == id)
    }

    /// Set the output framework. The tag is not validated.
    pub fn set_framework(&mut self, name: impl Into<String>) {
        self.state.framework = name.into();
        self.persist();
    }

    /// Append a node. The caller guarantees id uniqueness.
    pub fn add_component(&mut self, node: ComponentNode) {
        self.state.components.push(node);
        self.persist();
    }

    /// Create a palette node of `node_type` and append it.
    pub fn add_from_palette(&mut self, node_type: NodeType) -> NodeId {
        let node = ComponentNode::from_palette(node_type, self.next_stamp());
        let id = node.id.clone();
        self.add_component(node);
        id
    }

    /// Shallow-merge `update` into the top-level node with `id`.
    ///
    /// Returns `false` when no top-level node matches.
    pub fn update_component(&mut self, id: &NodeId, update: NodeUpdate) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let node = self.state.components[index].clone();
        self.state.components[index] = update.apply_to(node);
        self.persist();
        true
    }

    /// Remove the first top-level node with `id`, clearing the selection if it
    /// pointed at `id`.
    pub fn remove_component(&mut self, id: &NodeId) -> bool {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        let Some(index) = self.position(id) else {
            return false;
        };
        self.state.components.remove(index);
        self.persist();
        true
    }

    /// Remove the node at `from` and reinsert it at `to` in the shortened
    /// sequence. `to` past the end appends.
    pub fn move_component(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.state.components.len();
        if from >= len {
            return Err(StoreError::IndexOutOfRange { index: from, len });
        }
        let node = self.state.components.remove(from);
        let to = to.min(self.state.components.len());
        self.state.components.insert(to, node);
        self.persist();
        Ok(())
    }

    pub fn select_component(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    /// Replace the whole sequence from editor text.
    ///
    /// Text that is not a JSON array of nodes is discarded without touching
    /// state. Returns whether the edit was applied.
    ///
    /// Accepted nodes are normalized to their typed form, so [`Self::code_text`]
    /// may not echo the text back verbatim: prop keys a known type does not use
    /// are dropped, and an empty `children` array is omitted. Unknown types keep
    /// their props and children as written.
    pub fn update_code(&mut self, text: &str) -> bool {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "discarding editor text that is not JSON");
                return false;
            }
        };
        if !value.is_array() {
            tracing::debug!("discarding editor text that is not an array");
            return false;
        }
        match serde_json::from_value::<Vec<ComponentNode>>(value) {
            Ok(components) => {
                self.state.components = components;
                self.persist();
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "discarding editor text with malformed nodes");
                false
            }
        }
    }

    /// The component sequence as the code editor shows it.
    pub fn code_text(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.state.components)
    }

    fn position(&self, id: &NodeId) -> Option<usize> {
        self.state.components.iter().position(|c| &c.id == id)
    }

    fn next_stamp(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        self.last_stamp = now.max(self.last_stamp + 1);
        self.last_stamp
    }

    fn persist(&mut self) {
        let record = match serde_json::to_string(&self.state) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize builder state");
                return;
            }
        };
        if let Err(e) = self.storage.save(&record) {
            tracing::warn!(error = %e, "could not save builder state");
        }
    }
}
