mod audit;
mod comment;
mod user;

pub use self::audit::{Audit, OtherDatabase};
pub use self::comment::Comment;
pub use self::post::Post;
pub use self::user::User;
use crate::database::Database;
use crate::types::TypeRef;

/// The database the test models belong to.
pub struct TestDatabase;

impl Database for TestDatabase {
    const NAME: &'static str = "test.db";
    const VERSION: u32 = 3;
}

/// Types of the models registered into [`TestDatabase`].
pub fn model_types() -> [TypeRef; 3] {
    [
        TypeRef::of::<User>(),
        TypeRef::of::<Post>(),
        TypeRef::of::<Comment>(),
    ]
}
