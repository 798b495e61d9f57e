use std::{future::Future, pin::Pin};

use twilight_model::guild::Permissions;

use super::InteractionHandler;
use crate::{context::SelectMenuContext, Error};

pub type SelectMenuFunc<T> =
    fn(SelectMenuContext<T>) -> Pin<Box<dyn Future<Output = Result<(), Error>> + Send>>;

#[derive(Clone)]
pub struct SelectMenuHandler<T: Clone + Send + Sync> {
    pub module: String,
    pub custom_id: String,
    pub permissions: Permissions,
    pub func: SelectMenuFunc<T>,
}

impl<T: Clone + Send + Sync> InteractionHandler<String> for SelectMenuHandler<T> {
    fn key(&self) -> String {
        self.custom_id.clone()
    }

    fn required_permissions(&self) -> Permissions {
        self.permissions
    }
}

impl<T: Clone + Send + Sync> SelectMenuHandler<T> {
    pub async fn run(&self, ctx: SelectMenuContext<T>) -> Result<(), Error> {
        (self.func)(ctx).await
    }
}
