pub mod articles;
pub mod auth;
pub mod replies;

pub use articles::ArticleDto;
pub use auth::AuthenticatedUser;
pub use replies::ReplyDto;
