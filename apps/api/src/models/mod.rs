pub mod job;
pub mod lenient;
pub mod profile;

pub use job::{JobPatch, JobPosting, NewJob};
pub use profile::Profile;
