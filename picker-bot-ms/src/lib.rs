#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate derive_new;

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;
extern crate regex;

extern crate serde;
extern crate serde_json;

extern crate picker_common;

pub mod params;
pub mod transport;
pub mod commands;
pub mod bot;

pub use bot::Bot;
pub use bot::BotConfig;
