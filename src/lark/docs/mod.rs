//! Docs space (drive) folders module

mod api;
mod commands;
mod models;

pub use commands::run_folder_children_command;
pub use models::{CreatedFolder, FileChild, FolderMeta, FolderRename, RootFolderMeta};
