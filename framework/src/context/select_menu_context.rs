use std::sync::Arc;

use herald_shared::DiscordEventMeta;
use twilight_http::{client::InteractionClient, response::marker::EmptyBody, Client};
use twilight_model::{
    application::interaction::message_component::MessageComponentInteractionData,
    gateway::payload::incoming::InteractionCreate,
    http::interaction::InteractionResponse,
    id::{
        marker::{ApplicationMarker, GuildMarker, UserMarker},
        Id,
    },
};

use super::Context;

#[derive(Clone, Debug)]
pub struct SelectMenuContext<T: Clone + Send + Sync> {
    pub meta: DiscordEventMeta,
    pub application_id: Id<ApplicationMarker>,
    pub services: T,
    pub client: Arc<Client>,

    pub event: InteractionCreate,
    pub data: MessageComponentInteractionData,
}

impl<T: Clone + Send + Sync> SelectMenuContext<T> {
    pub fn from_context(
        meta: DiscordEventMeta,
        ctx: Context<T>,
        event: InteractionCreate,
        data: MessageComponentInteractionData,
    ) -> Self {
        Self {
            meta,
            application_id: ctx.application_id,
            services: ctx.services,
            client: ctx.client,

            event,
            data,
        }
    }

    pub fn interaction(&self) -> InteractionClient<'_> {
        self.client.interaction(self.application_id)
    }

    pub fn guild_id(&self) -> Option<Id<GuildMarker>> {
        self.event.guild_id
    }

    pub fn author_id(&self) -> Option<Id<UserMarker>> {
        self.event.author_id()
    }

    /// Values the user picked, in the order Discord sent them.
    pub fn values(&self) -> &[String] {
        &self.data.values
    }

    pub async fn response(
        &self,
        response: InteractionResponse,
    ) -> Result<twilight_http::Response<EmptyBody>, twilight_http::Error> {
        self.interaction()
            .create_response(self.event.id, &self.event.token, &response)
            .await
    }
}
