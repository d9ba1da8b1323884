//! Static content loading: parses the card/wonder/progress-token catalog
//! (embedded or from a directory) into the immutable definitions the
//! engine consumes.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
