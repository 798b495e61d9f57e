use twilight_model::guild::Permissions;

pub mod command_handler;
pub mod select_menu_handler;

pub trait InteractionHandler<K> {
    fn key(&self) -> K;

    /// Permissions the bot needs in the channel before the handler may run.
    fn required_permissions(&self) -> Permissions;
}
