//! [`ResourceTable`] – the dependency table handed to drivers.
//!
//! The host resolves every dependency name a component declared during
//! validation, inserts the resulting handles here, and passes the table to
//! the component's `new`/`reconfigure` calls.  Handles are shared
//! (`Arc`) – the table never owns a board exclusively.

use std::collections::HashMap;
use std::sync::Arc;

use crate::board::Board;

/// Name-keyed table of shared board handles.
///
/// Cloning the table clones the handle map, not the boards.
#[derive(Default, Clone)]
pub struct ResourceTable {
    boards: HashMap<String, Arc<dyn Board>>,
}

impl ResourceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a board under its own name.  Any previously registered board
    /// with the same name is replaced.
    pub fn insert_board(&mut self, board: Arc<dyn Board>) {
        self.boards.insert(board.name().to_string(), board);
    }

    /// Look up a board handle by name.
    pub fn board(&self, name: &str) -> Option<Arc<dyn Board>> {
        self.boards.get(name).cloned()
    }

    /// Names of all registered boards.
    pub fn board_names(&self) -> impl Iterator<Item = &str> {
        self.boards.keys().map(String::as_str)
    }
}
