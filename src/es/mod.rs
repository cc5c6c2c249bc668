pub mod assets;
pub mod mapping;
pub mod template;
