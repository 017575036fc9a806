//! Entity ↔ model mappers

mod comment;
mod otp;
mod post;
mod user;
