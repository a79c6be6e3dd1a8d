pub mod about;
pub mod generate;
pub mod list;
pub mod publish;
pub mod show;
