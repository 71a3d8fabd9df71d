mod database;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, MIGRATOR};
pub use self::myconfig::Config;
