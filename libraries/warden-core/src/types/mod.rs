mod ids;
mod user;

pub use ids::UserId;
pub use user::{AccessToken, NewUser, Role, User, ADMIN_USERNAME};
