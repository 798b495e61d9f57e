#[derive(Clone, Debug)]
pub struct Services {
    pub handler_id: u32,
}

pub type CommandContext = herald_framework::context::CommandContext<Services>;
pub type SelectMenuContext = herald_framework::context::SelectMenuContext<Services>;
