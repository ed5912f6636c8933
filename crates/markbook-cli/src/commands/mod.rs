pub mod add_trainee;
pub mod init;
pub mod mark;
pub mod report;
pub mod validate;
