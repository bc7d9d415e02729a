use crate::error::AdminError;
use crate::models::Row;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

/// What the rendering surface should show for a list.
#[derive(Debug, PartialEq)]
pub enum ListRender<'a, T> {
    Loading,
    Error(&'a str),
    Empty(&'a str),
    Rows(&'a [T]),
}

/// Fetch-on-mount list with loading, error and empty branches.
///
/// Rows change only through [`finish_load`](Self::finish_load) and the two
/// reconciliation edits, [`remove`](Self::remove) and
/// [`patch`](Self::patch).
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    state: ListState<T>,
    empty_message: &'static str,
    completed_loads: u64,
}

impl<T: Row> ListView<T> {
    pub fn new(empty_message: &'static str) -> Self {
        Self {
            state: ListState::Loading,
            empty_message,
            completed_loads: 0,
        }
    }

    pub fn begin_load(&mut self) {
        self.state = ListState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<T>, AdminError>) {
        self.completed_loads += 1;
        self.state = match result {
            Ok(rows) => ListState::Ready(rows),
            Err(e) => ListState::Failed(e.to_string()),
        };
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Number of fetches that have finished, successful or not.
    pub fn completed_loads(&self) -> u64 {
        self.completed_loads
    }

    pub fn render(&self) -> ListRender<'_, T> {
        match &self.state {
            ListState::Loading => ListRender::Loading,
            ListState::Failed(message) => ListRender::Error(message),
            ListState::Ready(rows) if rows.is_empty() => ListRender::Empty(self.empty_message),
            ListState::Ready(rows) => ListRender::Rows(rows),
        }
    }

    /// Loaded rows; empty while loading or after a failure.
    pub fn rows(&self) -> &[T] {
        match &self.state {
            ListState::Ready(rows) => rows,
            _ => &[],
        }
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows().iter().find(|row| row.row_id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        match &mut self.state {
            ListState::Ready(rows) => {
                let before = rows.len();
                rows.retain(|row| row.row_id() != id);
                rows.len() != before
            }
            _ => false,
        }
    }

    pub(crate) fn patch(&mut self, id: &str, edit: impl FnOnce(&mut T)) -> bool {
        match &mut self.state {
            ListState::Ready(rows) => match rows.iter_mut().find(|row| row.row_id() == id) {
                Some(row) => {
                    edit(row);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}
