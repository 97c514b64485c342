pub mod browse;
pub mod catalog;
pub mod navigate;
pub mod outfit;
pub mod saved;
pub mod settings;
pub mod swipe;

pub use browse::*;
pub use catalog::*;
pub use navigate::*;
pub use outfit::*;
pub use saved::*;
pub use settings::*;
pub use swipe::*;
