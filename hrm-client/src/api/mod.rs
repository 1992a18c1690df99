//! Typed endpoint surface
//!
//! One module per backend resource, each attaching its calls to
//! [`crate::HttpClient`]. Paths and payload shapes follow the backend
//! contract verbatim, including its inconsistent route casing
//! (`/projects/Delete/{id}`, `/teams/{id}/Employee/{id}`).

mod attendance;
mod complaints;
mod contracts;
mod employees;
mod jobs;
mod projects;
mod teams;
mod users;
