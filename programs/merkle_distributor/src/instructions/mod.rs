pub mod create_distributor;
pub mod rotate_root;
pub mod rotate_window;
pub mod claim;
pub mod recover_funds;
pub mod receive;

pub use create_distributor::*;
pub use rotate_root::*;
pub use rotate_window::*;
pub use claim::*;
pub use recover_funds::*;
pub use receive::*;
