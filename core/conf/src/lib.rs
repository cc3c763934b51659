//! Dashgate configuration object and helpers.
mod loading;
mod object;

pub use self::loading::load;
pub use self::loading::Error;
pub use self::object::Conf;
pub use self::object::ModalsConf;
pub use self::object::PolicyNotFound;
