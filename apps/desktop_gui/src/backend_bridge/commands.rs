//! Backend commands queued from UI to backend worker.

use shared::domain::{UserDraft, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadAll,
    Create(UserDraft),
    Update { id: UserId, draft: UserDraft },
    Delete(UserId),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadAll => "load_all",
            Self::Create(_) => "create_user",
            Self::Update { .. } => "update_user",
            Self::Delete(_) => "delete_user",
        }
    }
}
