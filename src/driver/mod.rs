//! Driver Layer
//!
//! CLIと依存性注入（オーケストレーション）

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::DetectionWorkflow;
