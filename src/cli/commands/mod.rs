pub mod check;
pub mod helper;
pub mod init;
pub mod localize;
pub mod resolve;
