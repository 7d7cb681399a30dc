use crate::Model;
use crate::tests::{Post, TestDatabase, User};

/// A comment on a [`Post`], declared with the derive macro.
#[derive(Debug, Clone, PartialEq, Eq, Model)]
#[table(
    name = "comments",
    database = TestDatabase,
    unique_group(number = 1),
    index_group(number = 1, name = "comments_by_post")
)]
pub struct Comment {
    #[primary_key(name = "_id")]
    pub id: Option<i64>,
    #[column(name = "post_id", not_null)]
    #[unique(groups(1))]
    #[index(groups(1))]
    pub post: Post,
    #[column(not_null)]
    #[unique(groups(1))]
    pub author: User,
    #[column]
    pub text: Option<String>,
    pub draft: bool,
}
