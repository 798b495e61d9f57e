use std::sync::{Arc, OnceLock};

use twilight_http::{client::InteractionClient, Client};
use twilight_model::{
    id::{marker::ApplicationMarker, Id},
    user::CurrentUser,
};

pub mod command_context;
pub mod select_menu_context;

pub use command_context::CommandContext;
pub use select_menu_context::SelectMenuContext;

#[derive(Debug)]
pub struct Context<T: Clone + Send + Sync> {
    pub application_id: Id<ApplicationMarker>,
    pub services: T,
    pub client: Arc<Client>,

    user: Arc<OnceLock<CurrentUser>>,
}

impl<T: Clone + Send + Sync> Context<T> {
    pub fn new(application_id: Id<ApplicationMarker>, services: T, client: Arc<Client>) -> Self {
        Self {
            application_id,
            services,
            client,
            user: Arc::new(OnceLock::new()),
        }
    }

    pub fn interaction(&self) -> InteractionClient<'_> {
        self.client.interaction(self.application_id)
    }

    /// Whether the bot's own identity is known, interactions are dropped until it is.
    pub fn is_ready(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.get()
    }

    /// Records the bot's identity, shared by every clone of this context.
    ///
    /// Returns `false` if the identity was already known, the first value wins.
    pub fn mark_ready(&self, user: CurrentUser) -> bool {
        self.user.set(user).is_ok()
    }
}

impl<T: Clone + Send + Sync> Clone for Context<T> {
    fn clone(&self) -> Self {
        Self {
            application_id: self.application_id,
            services: self.services.clone(),
            client: Arc::clone(&self.client),
            user: Arc::clone(&self.user),
        }
    }
}

pub enum InteractionContext<T: Clone + Send + Sync> {
    Command(CommandContext<T>),
    SelectMenu(SelectMenuContext<T>),
}
