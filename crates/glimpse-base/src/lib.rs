pub mod clock;
pub mod logging;
pub mod tensor;

pub use clock::{Clock, ManualClock, SystemClock};
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
pub use tensor::{Tensor, TensorError};

// Re-export log crate so downstream crates can use glimpse_base::log::*
pub use log;
