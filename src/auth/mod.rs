pub mod dev_login;
pub mod token;

pub use dev_login::{sign_in, sign_out};
pub use token::TokenStorage;
