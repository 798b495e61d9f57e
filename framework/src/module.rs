use std::collections::HashMap;

use crate::handler::{command_handler::CommandHandler, select_menu_handler::SelectMenuHandler};

pub mod builder;
pub mod registry;

#[derive(Clone)]
pub struct Module<T: Clone + Send + Sync> {
    pub(crate) commands: HashMap<String, CommandHandler<T>>,
    pub(crate) select_menus: HashMap<String, SelectMenuHandler<T>>,
}

