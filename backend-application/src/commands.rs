pub mod expedition_commands;
pub mod team_commands;
