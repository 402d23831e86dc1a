mod repository;

pub use self::repository::{Fetched, Repository};
