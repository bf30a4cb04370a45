mod advanced;
mod generate;
mod vision;

pub use advanced::*;
pub use generate::*;
pub use vision::*;
