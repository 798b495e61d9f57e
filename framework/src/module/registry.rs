use std::collections::HashMap;

use twilight_model::application::command::Command;

use super::Module;
use crate::handler::{
    command_handler::CommandHandler, select_menu_handler::SelectMenuHandler, InteractionHandler,
};

pub struct Registry<T: Clone + Send + Sync> {
    commands: HashMap<String, CommandHandler<T>>,
    select_menus: HashMap<String, SelectMenuHandler<T>>,
}

impl<T: Clone + Send + Sync> Registry<T> {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            select_menus: HashMap::new(),
        }
    }

    pub fn register(&mut self, module: Module<T>) {
        for handler in module.commands.into_values() {
            insert_handler(&mut self.commands, handler);
        }
        for handler in module.select_menus.into_values() {
            insert_handler(&mut self.select_menus, handler);
        }
    }

    pub fn global_commands(&self) -> Vec<Command> {
        let mut commands: Vec<Command> = self
            .commands
            .values()
            .map(|ch| ch.definition.clone())
            .collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    pub fn find_command(&self, name: &str) -> Option<&CommandHandler<T>> {
        self.commands.get(name)
    }

    pub fn find_select_menu(&self, custom_id: &str) -> Option<&SelectMenuHandler<T>> {
        self.select_menus.get(custom_id)
    }
}

impl<T: Clone + Send + Sync> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

// later registrations win, same as re-registering a command with discord
fn insert_handler<H: InteractionHandler<String>>(handlers: &mut HashMap<String, H>, handler: H) {
    if let Some(previous) = handlers.insert(handler.key(), handler) {
        tracing::warn!(key = %previous.key(), "handler registered twice, replacing");
    }
}

#[cfg(test)]
mod tests {
    use twilight_model::{application::command::CommandType, guild::Permissions};
    use twilight_util::builder::command::CommandBuilder;

    use super::*;
    use crate::{
        context::{CommandContext, SelectMenuContext},
        handler_func, Error, ModuleBuilder,
    };

    async fn noop(_ctx: CommandContext<()>) -> Result<(), Error> {
        Ok(())
    }

    async fn noop_menu(_ctx: SelectMenuContext<()>) -> Result<(), Error> {
        Ok(())
    }

    fn definition(name: &str) -> Command {
        CommandBuilder::new(name, "test command", CommandType::ChatInput).build()
    }

    fn registry() -> Registry<()> {
        let mut registry = Registry::new();
        registry.register(
            ModuleBuilder::<()>::new("core")
                .command(definition("ping"), Permissions::empty(), handler_func!(noop))
                .command(
                    definition("say"),
                    Permissions::SEND_MESSAGES | Permissions::EMBED_LINKS,
                    handler_func!(noop),
                )
                .build(),
        );
        registry.register(
            ModuleBuilder::<()>::new("roles")
                .select_menu("role_menu", Permissions::MANAGE_ROLES, handler_func!(noop_menu))
                .build(),
        );
        registry
    }

    #[test]
    fn find_handlers_by_key() {
        let registry = registry();

        let say = registry.find_command("say").expect("say is registered");
        assert_eq!(say.module, "core");
        assert_eq!(
            say.required_permissions(),
            Permissions::SEND_MESSAGES | Permissions::EMBED_LINKS
        );

        let menu = registry
            .find_select_menu("role_menu")
            .expect("role_menu is registered");
        assert_eq!(menu.module, "roles");
        assert_eq!(menu.key(), "role_menu");

        assert!(registry.find_command("role_menu").is_none());
        assert!(registry.find_select_menu("ping").is_none());
        assert!(registry.find_command("missing").is_none());
    }

    #[test]
    fn global_commands_are_sorted_by_name() {
        let names: Vec<String> = registry()
            .global_commands()
            .into_iter()
            .map(|cmd| cmd.name)
            .collect();
        assert_eq!(names, ["ping", "say"]);
    }

    #[test]
    fn later_registration_replaces_handler() {
        let mut registry = registry();
        registry.register(
            ModuleBuilder::<()>::new("override")
                .command(definition("ping"), Permissions::ADMINISTRATOR, handler_func!(noop))
                .build(),
        );

        let ping = registry.find_command("ping").expect("ping is registered");
        assert_eq!(ping.module, "override");
        assert_eq!(ping.required_permissions(), Permissions::ADMINISTRATOR);
    }
}
