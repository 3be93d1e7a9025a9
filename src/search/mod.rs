//! Player search flow: the source seam, the fetch lifecycle and the
//! controller tying them together.

pub mod controller;
pub mod source;
pub mod state;


pub use controller::{PendingFetch, SearchController, Ticket, FETCH_ERROR_MESSAGE};
pub use source::PlayerSource;
pub use state::FetchState;
