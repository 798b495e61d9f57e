use std::{fmt, future::Future};

use herald_shared::color;
use twilight_model::{
    channel::message::MessageFlags,
    gateway::payload::incoming::InteractionCreate,
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::{marker::UserMarker, Id},
};
use twilight_util::builder::{embed::EmbedBuilder, InteractionResponseDataBuilder};

use crate::{Context, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingPermissions,
}

impl ErrorKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::MissingPermissions => "Missing Permissions",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Sends user-facing error replies on behalf of the router.
pub trait ErrorResponder: Send + Sync {
    fn reply_with_error<T: Clone + Send + Sync>(
        &self,
        ctx: &Context<T>,
        event: &InteractionCreate,
        kind: ErrorKind,
        message: String,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Replies with an ephemeral embed through the interaction webhook.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionResponder;

impl ErrorResponder for InteractionResponder {
    async fn reply_with_error<T: Clone + Send + Sync>(
        &self,
        ctx: &Context<T>,
        event: &InteractionCreate,
        kind: ErrorKind,
        message: String,
    ) -> Result<(), Error> {
        let embed = EmbedBuilder::new()
            .title(kind.title())
            .description(message)
            .color(color::embeds::ERROR.into())
            .build();

        let response = InteractionResponse {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(
                InteractionResponseDataBuilder::new()
                    .embeds([embed])
                    .flags(MessageFlags::EPHEMERAL)
                    .build(),
            ),
        };

        ctx.interaction()
            .create_response(event.id, &event.token, &response)
            .await?;

        Ok(())
    }
}

/// Body of the [`ErrorKind::MissingPermissions`] reply, one diff line per permission.
pub fn missing_permissions_message(
    author: Option<Id<UserMarker>>,
    target: &str,
    missing: &[String],
) -> String {
    let greeting = match author {
        Some(author) => format!("Sorry <@{}>", author),
        None => String::from("Sorry"),
    };

    format!(
        "{}, I need the following permissions for this {}:\n ```diff\n- {}```",
        greeting,
        target,
        missing.join("\n- "),
    )
}
