//! Task Preconditions

use kernel::i18n::common;
use kernel::validation::{Guard, Violation, ensure};

use crate::domain::entity::{day_card::DayCard, task::Task};
use crate::domain::value_object::{
    day_card_status::DayCardStatus,
    ids::{ParticipantId, ProjectId},
    task_status::TaskStatus,
};
use crate::i18n;

/// Command on a single task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCommand {
    Update,
    Assign,
    Unassign,
    /// Draft → open
    Send,
    Start,
    Close,
    Accept,
    /// Back to open
    Reset,
}

impl TaskCommand {
    /// Whether the command is allowed in `status`, and the key if it is not
    pub fn check(self, status: TaskStatus) -> Result<(), Violation> {
        match self {
            Self::Update => ensure(
                !status.is_closed_or_accepted(),
                i18n::TASK_VALIDATION_ERROR_CLOSED_OR_ACCEPTED_TASK_UPDATE_FORBIDDEN,
            ),
            Self::Assign => ensure(
                !status.is_closed_or_accepted(),
                i18n::TASK_VALIDATION_ERROR_CLOSED_OR_ACCEPTED_TASK_ASSIGNMENT_FORBIDDEN,
            ),
            Self::Unassign => ensure(
                !status.is_closed_or_accepted(),
                i18n::TASK_VALIDATION_ERROR_UNASSIGN_POSSIBLE_WHEN_STATUS_IS_NOT_CLOSED_OR_ACCEPTED,
            ),
            Self::Send => ensure(
                status == TaskStatus::Draft,
                i18n::TASK_VALIDATION_ERROR_OPEN_POSSIBLE_WHEN_STATUS_DRAFT,
            ),
            Self::Start => ensure(
                status.is_draft_or_open(),
                i18n::TASK_VALIDATION_ERROR_START_ONLY_POSSIBLE_WHEN_STATUS_IS_DRAFT_OR_OPEN,
            ),
            Self::Close => ensure(
                !status.is_closed_or_accepted(),
                i18n::TASK_VALIDATION_ERROR_CLOSED_OR_ACCEPTED_TASK_CLOSE_FORBIDDEN,
            ),
            Self::Accept => ensure(
                status != TaskStatus::Accepted,
                i18n::TASK_VALIDATION_ERROR_ACCEPTED_TASK_ACCEPT_FORBIDDEN,
            ),
            Self::Reset => ensure(
                !status.is_draft_or_open(),
                i18n::TASK_VALIDATION_ERROR_DRAFT_OR_OPEN_TASK_RESET_FORBIDDEN,
            ),
        }
    }

    /// Status after the command succeeded, if the command changes it
    pub fn target_status(self) -> Option<TaskStatus> {
        match self {
            Self::Send | Self::Reset => Some(TaskStatus::Open),
            Self::Start => Some(TaskStatus::Started),
            Self::Close => Some(TaskStatus::Closed),
            Self::Accept => Some(TaskStatus::Accepted),
            Self::Update | Self::Assign | Self::Unassign => None,
        }
    }
}

impl Task {
    /// Version check first, then the status rule of `command`.
    pub fn ensure_can(&self, command: TaskCommand, expected_version: i64) -> Result<(), Violation> {
        Guard::of(self)
            .version_matches(expected_version)
            .and_then(|_| command.check(self.status))
    }
}

/// A new task is a draft unless someone is already assigned to it.
pub fn ensure_can_create(
    status: TaskStatus,
    assignee: Option<ParticipantId>,
) -> Result<(), Violation> {
    ensure(
        status == TaskStatus::Draft || assignee.is_some(),
        i18n::TASK_VALIDATION_ERROR_CREATION_POSSIBLE_WHEN_STATUS_DRAFT_OR_COMPANY_ASSIGNED,
    )
}

/// Status change of an edited task; `old` is `None` when nothing is stored yet.
pub fn ensure_can_update(
    old: Option<TaskStatus>,
    new: TaskStatus,
    assignee: Option<ParticipantId>,
) -> Result<(), Violation> {
    if let Some(old) = old {
        TaskCommand::Update.check(old)?;
        ensure(
            new != TaskStatus::Draft || old == TaskStatus::Draft,
            common::SERVER_ERROR_BAD_REQUEST,
        )?;
    }
    ensure(
        new != TaskStatus::Open || assignee.is_some(),
        common::SERVER_ERROR_BAD_REQUEST,
    )?;
    ensure(
        !new.is_closed_or_accepted() || assignee.is_some(),
        i18n::TASK_VALIDATION_ERROR_UNASSIGN_POSSIBLE_WHEN_STATUS_IS_NOT_CLOSED_OR_ACCEPTED,
    )
}

/// Only tasks whose day cards are all still open can be deleted.
pub fn ensure_deletable<'a>(
    day_cards: impl IntoIterator<Item = &'a DayCard>,
) -> Result<(), Violation> {
    ensure(
        day_cards.into_iter().all(|d| d.status == DayCardStatus::Open),
        i18n::TASK_VALIDATION_ERROR_DELETE_POSSIBLE_WHEN_ALL_DAY_CARDS_OPEN,
    )
}

/// All tasks of a batch must belong to `project`.
pub fn ensure_same_project<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    project: ProjectId,
) -> Result<(), Violation> {
    match tasks.into_iter().find(|t| t.project != project) {
        None => Ok(()),
        Some(task) => Err(
            Violation::precondition(i18n::TASK_VALIDATION_ERROR_NOT_OF_SAME_PROJECT)
                .with_params([task.id.to_string()]),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    const ALL: [TaskStatus; 5] = [
        TaskStatus::Draft,
        TaskStatus::Open,
        TaskStatus::Started,
        TaskStatus::Closed,
        TaskStatus::Accepted,
    ];

    fn allowed(command: TaskCommand) -> Vec<TaskStatus> {
        ALL.into_iter()
            .filter(|s| command.check(*s).is_ok())
            .collect()
    }

    #[test]
    fn test_start_only_from_draft_or_open() {
        assert_eq!(
            allowed(TaskCommand::Start),
            [TaskStatus::Draft, TaskStatus::Open]
        );
        assert_eq!(
            TaskCommand::Start.check(TaskStatus::Closed).unwrap_err().message_key(),
            i18n::TASK_VALIDATION_ERROR_START_ONLY_POSSIBLE_WHEN_STATUS_IS_DRAFT_OR_OPEN
        );
    }

    #[test]
    fn test_close_forbidden_when_closed_or_accepted() {
        assert_eq!(
            allowed(TaskCommand::Close),
            [TaskStatus::Draft, TaskStatus::Open, TaskStatus::Started]
        );
    }

    #[test]
    fn test_accept_forbidden_when_accepted() {
        assert_eq!(allowed(TaskCommand::Accept).len(), 4);
        assert_eq!(
            TaskCommand::Accept.check(TaskStatus::Accepted).unwrap_err().message_key(),
            i18n::TASK_VALIDATION_ERROR_ACCEPTED_TASK_ACCEPT_FORBIDDEN
        );
    }

    #[test]
    fn test_reset_forbidden_when_draft_or_open() {
        assert_eq!(
            allowed(TaskCommand::Reset),
            [TaskStatus::Started, TaskStatus::Closed, TaskStatus::Accepted]
        );
    }

    #[test]
    fn test_send_only_from_draft() {
        assert_eq!(allowed(TaskCommand::Send), [TaskStatus::Draft]);
    }

    #[test]
    fn test_editing_closed_task() {
        for command in [TaskCommand::Update, TaskCommand::Assign, TaskCommand::Unassign] {
            assert!(command.check(TaskStatus::Started).is_ok());
            assert!(command.check(TaskStatus::Closed).is_err());
            assert!(command.check(TaskStatus::Accepted).is_err());
        }
        assert_eq!(
            TaskCommand::Unassign.check(TaskStatus::Closed).unwrap_err().message_key(),
            i18n::TASK_VALIDATION_ERROR_UNASSIGN_POSSIBLE_WHEN_STATUS_IS_NOT_CLOSED_OR_ACCEPTED
        );
    }

    #[test]
    fn test_target_status() {
        assert_eq!(TaskCommand::Reset.target_status(), Some(TaskStatus::Open));
        assert_eq!(TaskCommand::Assign.target_status(), None);
    }

    #[test]
    fn test_version_is_checked_before_status() {
        let project = fixtures::project_id();
        let mut task = fixtures::task(project, 3);
        task.status = TaskStatus::Accepted;

        let err = task.ensure_can(TaskCommand::Accept, 2).unwrap_err();
        assert_eq!(
            err.message_key(),
            common::COMMON_VALIDATION_ERROR_ENTITY_OUTDATED
        );

        let err = task.ensure_can(TaskCommand::Accept, 3).unwrap_err();
        assert_eq!(
            err.message_key(),
            i18n::TASK_VALIDATION_ERROR_ACCEPTED_TASK_ACCEPT_FORBIDDEN
        );
    }

    #[test]
    fn test_same_project() {
        let project = fixtures::project_id();
        let other = fixtures::project_id();
        let a = fixtures::task(project, 0);
        let b = fixtures::task(other, 0);

        assert!(ensure_same_project([&a], project).is_ok());

        let err = ensure_same_project([&a, &b], project).unwrap_err();
        assert_eq!(
            err,
            Violation::precondition(i18n::TASK_VALIDATION_ERROR_NOT_OF_SAME_PROJECT)
                .with_params([b.id.to_string()])
        );
    }

    #[test]
    fn test_create_as_draft_or_assigned() {
        let assignee = Some(ParticipantId::new());
        assert!(ensure_can_create(TaskStatus::Draft, None).is_ok());
        assert!(ensure_can_create(TaskStatus::Draft, assignee).is_ok());
        assert!(ensure_can_create(TaskStatus::Open, assignee).is_ok());

        for status in [TaskStatus::Open, TaskStatus::Started, TaskStatus::Closed] {
            assert_eq!(
                ensure_can_create(status, None).unwrap_err().message_key(),
                i18n::TASK_VALIDATION_ERROR_CREATION_POSSIBLE_WHEN_STATUS_DRAFT_OR_COMPANY_ASSIGNED
            );
        }
    }

    #[test]
    fn test_update_from_draft() {
        let assignee = Some(ParticipantId::new());
        assert!(ensure_can_update(Some(TaskStatus::Draft), TaskStatus::Draft, None).is_ok());
        for new in ALL {
            assert!(ensure_can_update(Some(TaskStatus::Draft), new, assignee).is_ok());
        }
    }

    #[test]
    fn test_update_rejections() {
        let key = |old, new, assignee| {
            ensure_can_update(old, new, assignee)
                .unwrap_err()
                .message_key()
        };

        assert_eq!(
            key(Some(TaskStatus::Open), TaskStatus::Draft, None),
            common::SERVER_ERROR_BAD_REQUEST
        );
        assert_eq!(
            key(Some(TaskStatus::Started), TaskStatus::Draft, None),
            common::SERVER_ERROR_BAD_REQUEST
        );
        assert_eq!(
            key(Some(TaskStatus::Draft), TaskStatus::Open, None),
            common::SERVER_ERROR_BAD_REQUEST
        );
        assert_eq!(
            key(Some(TaskStatus::Closed), TaskStatus::Closed, None),
            i18n::TASK_VALIDATION_ERROR_CLOSED_OR_ACCEPTED_TASK_UPDATE_FORBIDDEN
        );
        assert_eq!(
            key(Some(TaskStatus::Accepted), TaskStatus::Accepted, None),
            i18n::TASK_VALIDATION_ERROR_CLOSED_OR_ACCEPTED_TASK_UPDATE_FORBIDDEN
        );
        assert_eq!(
            key(None, TaskStatus::Closed, None),
            i18n::TASK_VALIDATION_ERROR_UNASSIGN_POSSIBLE_WHEN_STATUS_IS_NOT_CLOSED_OR_ACCEPTED
        );
        assert_eq!(
            key(None, TaskStatus::Accepted, None),
            i18n::TASK_VALIDATION_ERROR_UNASSIGN_POSSIBLE_WHEN_STATUS_IS_NOT_CLOSED_OR_ACCEPTED
        );
    }

    #[test]
    fn test_delete_only_with_open_day_cards() {
        let project = fixtures::project_id();
        let task = fixtures::task(project, 0);
        let open = fixtures::day_card(project, task.id, 0);

        assert!(ensure_deletable(&Vec::<DayCard>::new()).is_ok());
        assert!(ensure_deletable([&open, &open, &open]).is_ok());

        for status in [DayCardStatus::NotDone, DayCardStatus::Done, DayCardStatus::Approved] {
            let mut other = open.clone();
            other.status = status;
            assert_eq!(
                ensure_deletable([&open, &other]).unwrap_err().message_key(),
                i18n::TASK_VALIDATION_ERROR_DELETE_POSSIBLE_WHEN_ALL_DAY_CARDS_OPEN
            );
            assert!(ensure_deletable([&other]).is_err());
        }
    }
}
