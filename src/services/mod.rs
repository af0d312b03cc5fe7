mod runner_recording;
mod runner_subprocess;

pub use runner_recording::{RecordedCall, RecordingRunner};
pub use runner_subprocess::SubprocessRunner;
