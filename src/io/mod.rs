pub mod file;
pub mod store;

pub use file::{from_json, load_list, save_list, to_json};
pub use store::ListStore;
