pub mod user;
pub mod user_page;
pub mod user_query;

pub use user::*;
pub use user_page::*;
pub use user_query::*;
