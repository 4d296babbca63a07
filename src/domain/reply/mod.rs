pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Reply;
pub use repository::ReplyRepository;
pub use value_objects::{ReplyContents, ReplyId};
