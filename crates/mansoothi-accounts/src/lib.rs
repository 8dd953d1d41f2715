//! Account storage and password handling for the Mansoothi backend.
//!
//! Registration hashes the supplied password with Argon2id and inserts a
//! row into `users`; login looks the row up by email and verifies the
//! supplied password against the stored PHC string. No session state is
//! created here: a successful login is a single response, nothing more.

mod error;
mod password;
mod store;

pub use error::AccountError;
pub use password::{hash_password, verify_password};
pub use store::{find_user_by_email, register_user, UserRecord};
