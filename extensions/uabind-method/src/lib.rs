pub mod constants;
pub use constants::*;

pub mod error;

mod method_output;
pub use method_output::*;

mod method_callback;
pub use method_callback::*;

mod synthesizer;
pub use synthesizer::*;

mod method_binding;
pub use method_binding::*;

mod method_table;
pub use method_table::*;

mod dispatcher;
pub use dispatcher::*;

mod address_space_interface;
pub use address_space_interface::*;
