pub mod catalog;
pub mod client;
pub mod error;
pub mod models;

pub use catalog::{load_catalog, load_episode, EpisodeCatalog};
pub use models::Episode;
