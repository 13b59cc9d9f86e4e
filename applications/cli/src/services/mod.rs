/// Application services
pub mod token;
pub mod users;

pub use token::OsTokenGenerator;
pub use users::UserService;
