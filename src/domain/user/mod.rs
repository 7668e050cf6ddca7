//! User domain module.
//!
//! Users own workout sessions and a recommendation record. Emails are
//! optional but unique when present; uniqueness is enforced by the store.

mod aggregate;
mod errors;

pub use aggregate::{
    email_taken, NewUser, User, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MIN_NAME_LENGTH,
};
pub use errors::UserError;
