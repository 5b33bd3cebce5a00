// Chunk: docs/chunks/search_results_panel - Result activation notifications
//!
//! Notifications from the results panel to the host.
//!
//! The panel never navigates on its own. When the user activates a result
//! row, the panel sends a [`PanelEvent::ResultActivated`] through this
//! channel and the host's drain loop performs the jump.
//!
//! The channel is `std::sync::mpsc`: the sender can be cloned into any number
//! of panels, and the receiver stays with whoever owns the editors.

use std::sync::mpsc::{self, Receiver, SendError, Sender, TryIter};

use crate::editor_handle::EditorHandle;

/// Events emitted by the search results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The user activated a result whose editor is still open.
    ResultActivated {
        editor: EditorHandle,
        /// 1-based line to scroll to.
        line_number: u32,
    },
}

/// Sender half of the panel event channel.
#[derive(Debug, Clone)]
pub struct PanelEventSender {
    sender: Sender<PanelEvent>,
}

/// Receiver half of the panel event channel.
#[derive(Debug)]
pub struct PanelEventReceiver {
    receiver: Receiver<PanelEvent>,
}

/// Creates a new panel event channel pair.
pub fn create_panel_channel() -> (PanelEventSender, PanelEventReceiver) {
    let (sender, receiver) = mpsc::channel();
    (PanelEventSender { sender }, PanelEventReceiver { receiver })
}

impl PanelEventSender {
    /// Sends a result activation.
    pub fn send_result_activated(
        &self,
        editor: EditorHandle,
        line_number: u32,
    ) -> Result<(), SendError<PanelEvent>> {
        self.sender.send(PanelEvent::ResultActivated { editor, line_number })
    }
}

impl PanelEventReceiver {
    /// Returns the next pending event without blocking.
    pub fn try_recv(&self) -> Option<PanelEvent> {
        self.receiver.try_recv().ok()
    }

    /// Drains all pending events without blocking.
    pub fn drain(&self) -> TryIter<'_, PanelEvent> {
        self.receiver.try_iter()
    }
}
