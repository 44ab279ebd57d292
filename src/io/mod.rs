pub mod archive;
pub mod config_io;
