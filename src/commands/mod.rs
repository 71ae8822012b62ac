pub mod macros;
pub mod profiles;
pub mod serve;
pub mod status;
pub mod trigger;
