//! Dashboard view state and the pure `(state, intent) -> state` transition.
//!
//! Remote work is never performed here: a transition that needs the store returns a
//! [`BackendCommand`], and the backend worker answers later with a [`UiEvent`] that is fed
//! back in as [`Intent::Backend`].

use std::collections::BTreeSet;

use client_core::IdAssignment;
use shared::{
    domain::{next_sequential_id, UserDraft, UserId, UserRecord},
    view::{apply_filter, clamp_page, paginate, total_pages, PageSize},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::CommandNotQueued;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Department,
}

#[derive(Debug, Clone)]
pub enum Intent {
    LoadAll,
    BeginEdit(UserRecord),
    CancelEdit,
    EditDraft(DraftField, String),
    Submit,
    Delete(UserId),
    SetFilter(String),
    SetPageSize(PageSize),
    SetPage(usize),
    Backend(UiEvent),
    CommandNotQueued(CommandNotQueued),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub users: Vec<UserRecord>,
    pub filtered_users: Vec<UserRecord>,
    pub filter: String,
    pub page_size: PageSize,
    pub current_page: usize,
    pub draft: UserDraft,
    pub error: Option<UiError>,
    pub id_assignment: IdAssignment,
    pub loading: bool,
    pub saving: bool,
    pub deleting: BTreeSet<UserId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default(), IdAssignment::default())
    }
}

/// One page of the filtered list, derived on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a> {
    pub rows: &'a [UserRecord],
    pub current_page: usize,
    pub total_pages: usize,
    pub matching: usize,
}

impl ViewState {
    pub fn new(page_size: PageSize, id_assignment: IdAssignment) -> Self {
        Self {
            users: Vec::new(),
            filtered_users: Vec::new(),
            filter: String::new(),
            page_size,
            current_page: 1,
            draft: UserDraft::empty(),
            error: None,
            id_assignment,
            loading: false,
            saving: false,
            deleting: BTreeSet::new(),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_users.len(), self.page_size)
    }

    pub fn projection(&self) -> PageView<'_> {
        PageView {
            rows: paginate(&self.filtered_users, self.current_page, self.page_size),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            matching: self.filtered_users.len(),
        }
    }

    pub fn is_deleting(&self, id: UserId) -> bool {
        self.deleting.contains(&id)
    }

    fn refresh_filtered(&mut self) {
        self.filtered_users = apply_filter(&self.users, &self.filter);
        self.clamp_current_page();
    }

    fn clamp_current_page(&mut self) {
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    fn reset_draft(&mut self) {
        self.draft = UserDraft::empty();
        self.error = None;
    }

    /// Clears the form only if it still targets `saved`; an edit begun mid-save survives.
    fn finish_save(&mut self, saved: Option<UserId>) {
        if self.draft.id == saved {
            self.reset_draft();
        }
    }

    fn next_created_id(&self, echoed: UserId) -> UserId {
        match self.id_assignment {
            IdAssignment::Sequential => next_sequential_id(&self.users),
            IdAssignment::Server => echoed,
        }
    }
}

#[derive(Debug)]
pub struct Transition {
    pub state: ViewState,
    pub command: Option<BackendCommand>,
}

impl Transition {
    fn idle(state: ViewState) -> Self {
        Self {
            state,
            command: None,
        }
    }

    fn issue(state: ViewState, command: BackendCommand) -> Self {
        Self {
            state,
            command: Some(command),
        }
    }
}

pub fn reduce(mut state: ViewState, intent: Intent) -> Transition {
    match intent {
        Intent::LoadAll => {
            if state.loading {
                return Transition::idle(state);
            }
            state.loading = true;
            Transition::issue(state, BackendCommand::LoadAll)
        }
        Intent::BeginEdit(record) => {
            state.draft = UserDraft::from_record(&record);
            Transition::idle(state)
        }
        Intent::CancelEdit => {
            state.reset_draft();
            Transition::idle(state)
        }
        Intent::EditDraft(field, value) => {
            match field {
                DraftField::Name => state.draft.name = value,
                DraftField::Email => state.draft.email = value,
                DraftField::Department => state.draft.department = value,
            }
            Transition::idle(state)
        }
        Intent::Submit => submit(state),
        Intent::Delete(id) => {
            if !state.deleting.insert(id) {
                return Transition::idle(state);
            }
            Transition::issue(state, BackendCommand::Delete(id))
        }
        Intent::SetFilter(text) => {
            state.filter = text;
            state.refresh_filtered();
            Transition::idle(state)
        }
        Intent::SetPageSize(size) => {
            state.page_size = size;
            state.clamp_current_page();
            Transition::idle(state)
        }
        Intent::SetPage(page) => {
            state.current_page = clamp_page(page, state.total_pages());
            Transition::idle(state)
        }
        Intent::Backend(event) => Transition::idle(apply_event(state, event)),
        Intent::CommandNotQueued(CommandNotQueued { command, reason }) => {
            settle_command(&mut state, &command);
            state.error = Some(UiError::transport(reason));
            Transition::idle(state)
        }
    }
}

fn submit(mut state: ViewState) -> Transition {
    if state.saving {
        return Transition::idle(state);
    }
    if let Err(err) = state.draft.validate() {
        state.error = Some(err.into());
        return Transition::idle(state);
    }

    state.saving = true;
    let draft = state.draft.clone();
    let command = match draft.id {
        Some(id) => BackendCommand::Update { id, draft },
        None => BackendCommand::Create(draft),
    };
    Transition::issue(state, command)
}

fn apply_event(mut state: ViewState, event: UiEvent) -> ViewState {
    match event {
        UiEvent::UsersLoaded(result) => {
            state.loading = false;
            match result {
                Ok(users) => {
                    state.users = users;
                    state.refresh_filtered();
                }
                Err(err) => state.error = Some(err.into()),
            }
        }
        UiEvent::UserCreated(result) => {
            state.saving = false;
            match result {
                Ok(mut record) => {
                    record.id = state.next_created_id(record.id);
                    state.users.push(record);
                    state.refresh_filtered();
                    state.finish_save(None);
                }
                Err(err) => state.error = Some(err.into()),
            }
        }
        UiEvent::UserUpdated { id, result } => {
            state.saving = false;
            match result {
                Ok(mut record) => {
                    record.id = id;
                    if let Some(slot) = state.users.iter_mut().find(|user| user.id == id) {
                        *slot = record;
                    }
                    state.refresh_filtered();
                    state.finish_save(Some(id));
                }
                Err(err) => state.error = Some(err.into()),
            }
        }
        UiEvent::UserDeleted { id, result } => {
            state.deleting.remove(&id);
            match result {
                Ok(()) => {
                    state.users.retain(|user| user.id != id);
                    state.filtered_users.retain(|user| user.id != id);
                    state.clamp_current_page();
                    if state.draft.id == Some(id) {
                        state.draft = UserDraft::empty();
                    }
                }
                Err(err) => state.error = Some(err.into()),
            }
        }
        UiEvent::BackendUnavailable(reason) => {
            state.loading = false;
            state.saving = false;
            state.deleting.clear();
            state.error = Some(UiError::transport(reason));
        }
    }
    state
}

fn settle_command(state: &mut ViewState, command: &BackendCommand) {
    match command {
        BackendCommand::LoadAll => state.loading = false,
        BackendCommand::Create(_) | BackendCommand::Update { .. } => state.saving = false,
        BackendCommand::Delete(id) => {
            state.deleting.remove(id);
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
