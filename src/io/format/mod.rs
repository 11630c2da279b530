pub mod plist;
pub mod yaml;
