mod store;
mod types;

pub use store::UserStore;
pub use types::User;
