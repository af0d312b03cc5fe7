pub mod error;
pub mod options;
pub mod stage;

pub use error::AppError;
pub use options::{BuildOptions, BuildTarget, BuildVariant, RunAction};
pub use stage::{Stage, StageCommand, StageDir};
