//! Participant Entity

use kernel::messages::Auditing;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    ids::{CompanyId, ParticipantId, ProjectId, UserId},
    participant::{ParticipantRole, ParticipantStatus},
};

/// Membership of a user (via a company) in a project
///
/// Company and user are unknown while the invitation is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub version: i64,
    pub project: ProjectId,
    pub company: Option<CompanyId>,
    pub user: Option<UserId>,
    pub role: ParticipantRole,
    pub status: ParticipantStatus,
    pub auditing: Auditing,
}
