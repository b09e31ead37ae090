pub mod account_commands;
