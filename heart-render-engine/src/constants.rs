/// Asset paths and configuration overrides.
pub mod path;
