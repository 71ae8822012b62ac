pub mod name;
pub mod profile_store;

use std::collections::BTreeMap;

pub use name::normalize;
pub use profile_store::ProfileStore;

/// Ordered macro identifiers; order is execution and display order.
pub type MacroList = Vec<String>;

/// Normalized profile name to macro list.
pub type UserProfiles = BTreeMap<String, MacroList>;

/// The whole persisted document, keyed by user id.
pub type ProfileDocument = BTreeMap<String, UserProfiles>;
