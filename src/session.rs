//! Branch selection state machine.
//!
//! The session owns the query and the highlighted row and resolves to exactly
//! one [`SelectionOutcome`]. It knows nothing about terminals: the picker
//! translates key presses into [`SessionEvent`]s and draws the snapshot.

use crate::branch::CandidateList;
use crate::fuzzy;

/// Edits applied to the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QueryEdit {
    Insert(char),
    Backspace,
    Clear,
}

/// Input events accepted by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionEvent {
    Edit(QueryEdit),
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
}

/// Terminal result of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectionOutcome {
    Confirmed(String),
    Cancelled,
}

/// One visible row of the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Row<'a> {
    pub name: &'a str,
    pub is_current: bool,
    pub highlighted: bool,
}

#[derive(Debug)]
pub(crate) struct SelectionSession {
    candidates: CandidateList,
    query: String,
    // Indices into `candidates`, in list order
    view: Vec<usize>,
    highlight: usize,
    outcome: Option<SelectionOutcome>,
}

impl SelectionSession {
    pub(crate) fn new(candidates: CandidateList) -> Self {
        let view = (0..candidates.len()).collect();
        Self {
            candidates,
            query: String::new(),
            view,
            highlight: 0,
            outcome: None,
        }
    }

    /// Apply one event. Returns the outcome once the session has ended.
    ///
    /// Events arriving after the outcome is fixed are ignored.
    pub(crate) fn handle(&mut self, event: SessionEvent) -> Option<&SelectionOutcome> {
        if self.outcome.is_some() {
            return self.outcome.as_ref();
        }

        match event {
            SessionEvent::Edit(edit) => self.edit_query(edit),
            SessionEvent::MoveUp => self.move_up(),
            SessionEvent::MoveDown => self.move_down(),
            SessionEvent::Confirm => self.confirm(),
            SessionEvent::Cancel => self.cancel(),
        }

        self.outcome.as_ref()
    }

    fn edit_query(&mut self, edit: QueryEdit) {
        let changed = match edit {
            QueryEdit::Insert(ch) => {
                self.query.push(ch);
                true
            }
            QueryEdit::Backspace => self.query.pop().is_some(),
            QueryEdit::Clear => {
                let had_query = !self.query.is_empty();
                self.query.clear();
                had_query
            }
        };
        if changed {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let previous = self.view.get(self.highlight).copied();
        self.view = fuzzy::filter(self.candidates.branches(), &self.query);
        self.highlight = previous
            .and_then(|candidate| self.view.iter().position(|idx| *idx == candidate))
            .unwrap_or(0);
    }

    fn move_up(&mut self) {
        if self.highlight > 0 {
            self.highlight -= 1;
        }
    }

    fn move_down(&mut self) {
        if self.highlight + 1 < self.view.len() {
            self.highlight += 1;
        }
    }

    fn confirm(&mut self) {
        let Some(name) = self
            .view
            .get(self.highlight)
            .and_then(|idx| self.candidates.get(*idx))
        else {
            return;
        };
        log::debug!("selection confirmed: {name}");
        self.outcome = Some(SelectionOutcome::Confirmed(name.to_string()));
    }

    fn cancel(&mut self) {
        log::debug!("selection cancelled");
        self.query.clear();
        self.view.clear();
        self.highlight = 0;
        self.outcome = Some(SelectionOutcome::Cancelled);
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn highlight(&self) -> usize {
        self.highlight
    }

    pub(crate) fn outcome(&self) -> Option<&SelectionOutcome> {
        self.outcome.as_ref()
    }

    pub(crate) fn into_outcome(self) -> Option<SelectionOutcome> {
        self.outcome
    }

    /// Number of candidates matching the current query.
    pub(crate) fn visible_count(&self) -> usize {
        self.view.len()
    }

    pub(crate) fn total_count(&self) -> usize {
        self.candidates.len()
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.view.iter().enumerate().filter_map(|(pos, idx)| {
            self.candidates.get(*idx).map(|name| Row {
                name,
                is_current: self.candidates.is_current(*idx),
                highlighted: pos == self.highlight,
            })
        })
    }
}
