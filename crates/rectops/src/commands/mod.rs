pub mod adjacency;
pub mod contains;
pub mod init;
pub mod intersect;
pub mod menu;
pub mod pair;
