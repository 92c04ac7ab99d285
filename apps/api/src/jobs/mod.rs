// Job repository collaborator: storage trait, in-memory backend, seed data, CRUD handlers.

pub mod handlers;
pub mod repository;
pub mod seed;

pub use repository::{find_duplicate_id, InMemoryJobRepository, JobRepository};
pub use seed::{default_jobs, load_jobs_file};
