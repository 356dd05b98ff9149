use crate::{
    dialog::model::Dialog,
    foundation::error::{DialogError, DialogResult},
};

/// Ordered dialog list plus the auto-dispatch cursor.
#[derive(Clone, Debug, Default)]
pub struct DialogSequencer {
    dialogs: Vec<Dialog>,
    next_index: usize,
}

impl DialogSequencer {
    pub fn new(dialogs: Vec<Dialog>) -> Self {
        Self {
            dialogs,
            next_index: 0,
        }
    }

    pub fn dialogs(&self) -> &[Dialog] {
        &self.dialogs
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    /// Index of the dialog the next auto-dispatch will show.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// The dialog under the cursor, without moving it.
    pub fn peek_next(&self) -> DialogResult<&Dialog> {
        if self.dialogs.is_empty() {
            return Err(DialogError::EmptySequence);
        }
        self.dialogs
            .get(self.next_index)
            .ok_or_else(|| DialogError::out_of_range("dialog", self.next_index, self.dialogs.len()))
    }

    /// Move the cursor past the dialog returned by [`Self::peek_next`].
    pub fn advance(&mut self) -> usize {
        self.next_index += 1;
        self.next_index
    }

    /// Look up an explicit index; the cursor is not involved.
    pub fn get(&self, index: i64) -> DialogResult<&Dialog> {
        let index = usize::try_from(index).map_err(|_| {
            DialogError::invalid_argument(format!("dialog index must be >= 0, got {index}"))
        })?;
        self.dialogs
            .get(index)
            .ok_or_else(|| DialogError::out_of_range("dialog", index, self.dialogs.len()))
    }

    pub fn reset(&mut self) {
        self.next_index = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/sequencer.rs"]
mod tests;
