pub mod dirs;
pub mod logging;
pub mod ops;
pub mod params;
pub mod parse;
pub mod path;
pub mod url;
pub mod workdir;
