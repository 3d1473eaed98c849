pub mod hierarchy;

pub use hierarchy::{ROOT_PATH, parent_path, project_model, root_project};
