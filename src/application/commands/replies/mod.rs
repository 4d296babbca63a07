mod delete;
mod service;
mod write;

pub use delete::DeleteReplyCommand;
pub use service::ReplyCommandService;
pub use write::WriteReplyCommand;
