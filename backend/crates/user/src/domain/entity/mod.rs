pub mod user;

impl kernel::validation::Versioned for user::User {
    fn version(&self) -> i64 {
        self.version
    }
}
