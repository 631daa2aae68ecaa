//! Tool definitions module.
//!
//! Each file groups the tools that share a backing service. Everything here
//! implements [`crate::domains::tools::ToolHandler`] and is wired up in
//! `registry.rs::build_registry`.

pub mod calc;
pub mod common;
pub mod kb;
pub mod news;
pub mod notes;
pub mod search;
pub mod stocks;
pub mod tasks;
pub mod weather;

pub use calc::{AddTool, DivideTool, MultiplyTool, SubtractTool};
pub use kb::{IngestDocumentsTool, SearchDocsTool};
pub use news::NewsTool;
pub use notes::{AddNoteTool, ReadNotesTool};
pub use search::WebSearchTool;
pub use stocks::StockPriceTool;
pub use tasks::{AddTaskTool, ListTasksTool};
pub use weather::{CurrentWeatherTool, WeatherAlertsTool};
