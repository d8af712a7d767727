pub mod artifact;
pub mod profile;
