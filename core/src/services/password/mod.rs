//! Password hashing module
//!
//! Wraps bcrypt behind a trait so services and tests can swap the
//! implementation. Hashing runs on the blocking thread pool; a bcrypt
//! round at production cost is far too slow for an async worker thread.

mod hasher;


pub use hasher::{BcryptPasswordHasher, PasswordHasherTrait};
