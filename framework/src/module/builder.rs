use std::collections::HashMap;

use twilight_model::{application::command::Command, guild::Permissions};

use super::Module;
use crate::handler::{
    command_handler::{CommandFunc, CommandHandler},
    select_menu_handler::{SelectMenuFunc, SelectMenuHandler},
};

pub struct ModuleBuilder<T: Clone + Send + Sync> {
    name: String,

    commands: HashMap<String, CommandHandler<T>>,
    select_menus: HashMap<String, SelectMenuHandler<T>>,
}

impl<T: Clone + Send + Sync> ModuleBuilder<T> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),

            commands: HashMap::new(),
            select_menus: HashMap::new(),
        }
    }

    pub fn build(self) -> Module<T> {
        Module {
            commands: self.commands,
            select_menus: self.select_menus,
        }
    }

    pub fn command(
        mut self,
        definition: Command,
        permissions: Permissions,
        func: CommandFunc<T>,
    ) -> Self {
        self.commands.insert(
            definition.name.clone(),
            CommandHandler {
                module: self.name.clone(),
                definition,
                permissions,
                func,
            },
        );
        self
    }

    pub fn select_menu(
        mut self,
        custom_id: &str,
        permissions: Permissions,
        func: SelectMenuFunc<T>,
    ) -> Self {
        self.select_menus.insert(
            custom_id.to_string(),
            SelectMenuHandler {
                module: self.name.clone(),
                custom_id: custom_id.to_string(),
                permissions,
                func,
            },
        );
        self
    }
}
