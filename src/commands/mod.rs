// one module per command; the registry in command.rs wires these up
// under their canonical names and aliases
pub mod about;
pub mod cat;
pub mod clear;
pub mod contact;
pub mod cv;
pub mod date;
pub mod echo;
pub mod exit;
pub mod help;
pub mod history;
pub mod ls;
pub mod neofetch;
pub mod pwd;
pub mod skills;
pub mod sudo;
pub mod theme;
pub mod tree;
pub mod uptime;
pub mod website;
pub mod whoami;
