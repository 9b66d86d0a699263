//! Message keys of the project context

use kernel::i18n::MessageKey;

macro_rules! keys {
    ($($key:ident),+ $(,)?) => {
        $(pub const $key: MessageKey = MessageKey::new(stringify!($key));)+
    };
}

keys! {
    PROJECT_VALIDATION_ERROR_PROJECT_NOT_FOUND,

    TASK_VALIDATION_ERROR_NOT_FOUND,
    TASK_VALIDATION_ERROR_NOT_OF_SAME_PROJECT,
    TASK_VALIDATION_ERROR_CREATION_POSSIBLE_WHEN_STATUS_DRAFT_OR_COMPANY_ASSIGNED,
    TASK_VALIDATION_ERROR_DELETE_POSSIBLE_WHEN_ALL_DAY_CARDS_OPEN,
    TASK_VALIDATION_ERROR_OPEN_POSSIBLE_WHEN_STATUS_DRAFT,
    TASK_VALIDATION_ERROR_START_ONLY_POSSIBLE_WHEN_STATUS_IS_DRAFT_OR_OPEN,
    TASK_VALIDATION_ERROR_CLOSED_OR_ACCEPTED_TASK_CLOSE_FORBIDDEN,
    TASK_VALIDATION_ERROR_ACCEPTED_TASK_ACCEPT_FORBIDDEN,
    TASK_VALIDATION_ERROR_DRAFT_OR_OPEN_TASK_RESET_FORBIDDEN,
    TASK_VALIDATION_ERROR_CLOSED_OR_ACCEPTED_TASK_UPDATE_FORBIDDEN,
    TASK_VALIDATION_ERROR_CLOSED_OR_ACCEPTED_TASK_ASSIGNMENT_FORBIDDEN,
    TASK_VALIDATION_ERROR_UNASSIGN_POSSIBLE_WHEN_STATUS_IS_NOT_CLOSED_OR_ACCEPTED,

    DAY_CARD_VALIDATION_ERROR_NOT_FOUND,
    DAY_CARD_VALIDATION_ERROR_NOT_OPEN,
    DAY_CARD_VALIDATION_ERROR_NOT_OF_SAME_TASK,

    MILESTONE_VALIDATION_ERROR_NOT_FOUND,
    TOPIC_VALIDATION_ERROR_NOT_FOUND,
    RELATION_VALIDATION_ERROR_NOT_FOUND,
    WORK_AREA_VALIDATION_ERROR_NOT_FOUND,

    PARTICIPANT_VALIDATION_ERROR_PARTICIPANT_NOT_FOUND,
    PARTICIPANT_VALIDATION_ERROR_PARTICIPANT_CSM_NOT_REMOVABLE,
    PARTICIPANT_VALIDATION_ERROR_OWN_PARTICIPANT_NOT_REMOVABLE,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_the_constant_name() {
        assert_eq!(
            DAY_CARD_VALIDATION_ERROR_NOT_OPEN.as_str(),
            "DAY_CARD_VALIDATION_ERROR_NOT_OPEN"
        );
    }
}
