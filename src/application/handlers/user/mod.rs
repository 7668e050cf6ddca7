//! User command and query handlers.

mod create_user;
mod get_user;
mod list_users;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use get_user::{GetUserHandler, GetUserQuery, UserDetail, UserStats};
pub use list_users::{ListUsersHandler, ListUsersQuery};
