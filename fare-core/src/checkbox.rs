use serde::Serialize;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkbox {
    pub label: String,
    pub checked: bool,
}

/// An "all" checkbox bound to a set of peer checkboxes.
///
/// Toggling "all" drives every peer; unchecking a peer clears "all";
/// checking a peer sets "all" only once every peer is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxGroup {
    all: bool,
    peers: Vec<Checkbox>,
}

impl CheckboxGroup {
    pub fn new<I, S>(labels: I, checked: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let peers = labels
            .into_iter()
            .map(|label| Checkbox { label: label.into(), checked })
            .collect();
        Self { all: checked, peers }
    }

    pub fn is_all_checked(&self) -> bool {
        self.all
    }

    pub fn peers(&self) -> &[Checkbox] {
        &self.peers
    }

    /// Set the "all" checkbox. With no peers only "all" itself changes.
    pub fn toggle_all(&mut self, checked: bool) {
        self.all = checked;
        for peer in &mut self.peers {
            peer.checked = checked;
        }
    }

    pub fn set_peer(&mut self, index: usize, checked: bool) -> CoreResult<()> {
        let peer = self.peers.get_mut(index).ok_or_else(|| {
            CoreError::ValidationError(format!("No checkbox at index {}", index))
        })?;
        peer.checked = checked;

        if !checked {
            self.all = false;
        } else {
            self.all = self.peers.iter().all(|p| p.checked);
        }
        Ok(())
    }

    pub fn set_peer_by_label(&mut self, label: &str, checked: bool) -> CoreResult<()> {
        let index = self
            .peers
            .iter()
            .position(|p| p.label == label)
            .ok_or_else(|| CoreError::ValidationError(format!("Unknown checkbox: {}", label)))?;
        self.set_peer(index, checked)
    }

    /// Labels of the peers currently checked, in declaration order
    pub fn selected_labels(&self) -> Vec<&str> {
        self.peers
            .iter()
            .filter(|p| p.checked)
            .map(|p| p.label.as_str())
            .collect()
    }
}
