//! User Projector
//!
//! Users are never removed. A deletion (event or tombstone) anonymizes the
//! stored user, and later records of that user are ignored. The system user
//! cannot be deleted.

use std::sync::Arc;

use kernel::code::NamedCode;
use kernel::messages::AggregateEventMessageKey;
use kernel::validation::ensure;

pub use kernel::projection::Projection;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{aggregate_type::AggregateType, ids::UserId};
use crate::error::{UserError, UserResult};
use crate::i18n::USER_VALIDATION_ERROR_SYSTEM_USER_MUST_NOT_BE_MODIFIED;
use crate::messages::user::UserEventAvro;

/// Whether a record with this key belongs to the user context
pub fn handles_message(key: &AggregateEventMessageKey) -> bool {
    AggregateType::of(&key.aggregate_identifier).is_some()
}

pub struct UserProjector<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    system_user: Option<UserId>,
}

impl<R> UserProjector<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            system_user: None,
        }
    }

    /// Refuse to anonymize this user.
    pub fn with_system_user(mut self, system_user: UserId) -> Self {
        self.system_user = Some(system_user);
        self
    }

    /// Entry point for one record; `None` is a tombstone.
    pub async fn handle(
        &self,
        key: &AggregateEventMessageKey,
        value: Option<serde_json::Value>,
    ) -> UserResult<Projection> {
        if AggregateType::of(&key.aggregate_identifier).is_none() {
            return Err(UserError::UnsupportedAggregateType(
                key.aggregate_type().to_owned(),
            ));
        }

        match value {
            None => {
                let identifier = &key.aggregate_identifier;
                self.on_user_deleted(identifier.to_id()?, identifier.version)
                    .await
            }
            Some(value) => {
                let event: UserEventAvro = serde_json::from_value(value)?;
                self.on_event(&event).await
            }
        }
    }

    pub async fn on_event(&self, event: &UserEventAvro) -> UserResult<Projection> {
        tracing::debug!(
            event = event.name.code(),
            version = event.version(),
            "Projecting user record"
        );

        if event.is_deletion() {
            let identifier = &event.aggregate.aggregate_identifier;
            return self
                .on_user_deleted(identifier.to_id()?, identifier.version)
                .await;
        }
        self.on_user(event.aggregate.to_user()?).await
    }

    /// Upsert with version gating; deleted users stay deleted.
    pub async fn on_user(&self, user: User) -> UserResult<Projection> {
        let stored = self.repository.find_user(&user.id).await?;
        match &stored {
            Some(stored) if stored.deleted => {
                tracing::debug!(user = %user.id, "Ignoring record of deleted user");
                return Ok(Projection::Ignored);
            }
            Some(stored) if stored.version >= user.version => return Ok(Projection::Ignored),
            _ => {}
        }

        self.repository.save_user(&user).await?;
        Ok(if stored.is_some() {
            Projection::Updated
        } else {
            Projection::Created
        })
    }

    /// Anonymize the user; a user never seen is stored as a deleted placeholder.
    pub async fn on_user_deleted(&self, id: UserId, version: i64) -> UserResult<Projection> {
        // Checked before the lookup: a placeholder would hide the system
        // user's own records later on.
        ensure(
            self.system_user != Some(id),
            USER_VALIDATION_ERROR_SYSTEM_USER_MUST_NOT_BE_MODIFIED,
        )?;

        let user = match self.repository.find_user(&id).await? {
            Some(user) if user.deleted => return Ok(Projection::Ignored),
            Some(mut user) => {
                user.anonymize(version.max(user.version));
                user
            }
            None => {
                self.repository.save_user(&User::deleted(id, version)).await?;
                tracing::debug!(user = %id, "Deleted user was never projected");
                return Ok(Projection::Missing);
            }
        };

        self.repository.save_user(&user).await?;
        tracing::info!(user = %id, "User anonymized");
        Ok(Projection::Deleted { children: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::tests::fixtures;

    type Fixture = (UserProjector<InMemoryUserRepository>, Arc<InMemoryUserRepository>);

    fn projector() -> Fixture {
        let repository = Arc::new(InMemoryUserRepository::new());
        (UserProjector::new(Arc::clone(&repository)), repository)
    }

    #[tokio::test]
    async fn test_registration_then_update() {
        let (projector, repository) = projector();
        let (key, value) = fixtures::user_value("CREATED", 0);
        assert_eq!(projector.handle(&key, Some(value)).await.unwrap(), Projection::Created);

        let id: UserId = key.aggregate_identifier.to_id().unwrap();
        let mut user = repository.find_user(&id).await.unwrap().unwrap();
        user.version = 1;
        user.position = Some("Site manager".into());
        assert_eq!(projector.on_user(user.clone()).await.unwrap(), Projection::Updated);
        assert_eq!(projector.on_user(user).await.unwrap(), Projection::Ignored);
    }

    #[tokio::test]
    async fn test_tombstone_anonymizes() {
        let (projector, repository) = projector();
        let user = fixtures::user(2);
        let id = user.id;
        projector.on_user(user).await.unwrap();

        let key = fixtures::key_of(id, 3);
        assert_eq!(
            projector.handle(&key, None).await.unwrap(),
            Projection::Deleted { children: 0 }
        );

        let stored = repository.find_user(&id).await.unwrap().unwrap();
        assert!(stored.deleted);
        assert_eq!(stored.version, 3);
        assert_eq!(stored.email, None);

        // A late update does not bring the user back
        let mut late = fixtures::user(5);
        late.id = id;
        assert_eq!(projector.on_user(late).await.unwrap(), Projection::Ignored);
        assert_eq!(projector.handle(&key, None).await.unwrap(), Projection::Ignored);
    }

    #[tokio::test]
    async fn test_deletion_of_unknown_user_leaves_placeholder() {
        let (projector, repository) = projector();
        let id = UserId::new();

        assert_eq!(projector.on_user_deleted(id, 1).await.unwrap(), Projection::Missing);
        let stored = repository.find_user(&id).await.unwrap().unwrap();
        assert!(stored.deleted);
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn test_system_user_survives_deletion() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let system = fixtures::user(0);
        let projector = UserProjector::new(Arc::clone(&repository)).with_system_user(system.id);
        projector.on_user(system.clone()).await.unwrap();

        let err = projector.on_user_deleted(system.id, 1).await.unwrap_err();
        assert_eq!(
            err.message_key(),
            crate::i18n::USER_VALIDATION_ERROR_SYSTEM_USER_MUST_NOT_BE_MODIFIED
        );
        assert_eq!(repository.find_user(&system.id).await.unwrap(), Some(system));
    }

    #[tokio::test]
    async fn test_system_user_deleted_before_first_record() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let system = fixtures::user(1);
        let projector = UserProjector::new(Arc::clone(&repository)).with_system_user(system.id);

        let err = projector.on_user_deleted(system.id, 0).await.unwrap_err();
        assert_eq!(
            err.message_key(),
            crate::i18n::USER_VALIDATION_ERROR_SYSTEM_USER_MUST_NOT_BE_MODIFIED
        );
        assert!(repository.find_user(&system.id).await.unwrap().is_none());

        let key = fixtures::key_of(system.id, 0);
        assert!(projector.handle(&key, None).await.is_err());

        assert_eq!(projector.on_user(system.clone()).await.unwrap(), Projection::Created);
        assert!(!repository.find_user(&system.id).await.unwrap().unwrap().deleted);
    }

    #[tokio::test]
    async fn test_foreign_key_type() {
        let (projector, _) = projector();
        let mut key = fixtures::key_of(UserId::new(), 0);
        key.aggregate_identifier.aggregate_type = "EMPLOYEE".into();
        assert!(matches!(
            projector.handle(&key, None).await,
            Err(UserError::UnsupportedAggregateType(_))
        ));
    }
}
