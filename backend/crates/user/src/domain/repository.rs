use crate::domain::entity::user::User;
use crate::domain::value_object::ids::UserId;
use crate::error::UserResult;

#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    async fn find_user(&self, id: &UserId) -> UserResult<Option<User>>;

    /// Lookup by (lower case) email, ignoring deleted users
    async fn find_user_by_email(&self, email: &str) -> UserResult<Option<User>>;

    async fn save_user(&self, user: &User) -> UserResult<()>;
}
