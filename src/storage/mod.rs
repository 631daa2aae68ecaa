//! File-backed stores shared between tools, resources, and prompts.

mod notes;
mod tasks;

pub use notes::NoteStore;
pub use tasks::{Task, TaskStatus, TaskStore};
