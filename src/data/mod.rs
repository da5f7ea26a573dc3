pub mod base_items;
pub mod import;
pub mod mods;
pub mod profile;
pub mod translations;
pub mod validate;
