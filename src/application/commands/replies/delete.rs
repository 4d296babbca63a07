use super::ReplyCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::reply::ReplyId,
};

pub struct DeleteReplyCommand {
    pub id: i64,
}

impl ReplyCommandService {
    pub async fn delete_reply(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteReplyCommand,
    ) -> ApplicationResult<()> {
        let id = ReplyId::new(command.id)?;
        self.find_owned_reply(actor, id).await?;
        self.replies.delete_by_id(id).await?;
        Ok(())
    }
}
