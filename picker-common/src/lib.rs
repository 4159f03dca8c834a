// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate derive_new;

#[macro_use]
extern crate log;

extern crate serde;
extern crate serde_json;

pub mod model;
pub mod roster;
pub mod balancer;
pub mod loader;

/// Rating given to anyone added without an explicit one
pub const DEFAULT_RATING: u8 = 3;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/*
    Common error_chain for the whole lib so the ? operator passes things around real well.

    Add `use ::errors::*;` to the sub-modules to gain access to it.

    Every kind here ends up as the reply to a chat command so the descriptions are written for people, not logs.
*/
pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain!{
        foreign_links {
            Io(::std::io::Error);
            ParseInt(::std::num::ParseIntError);
            Json(::serde_json::Error);
        }

        errors {
            DuplicateName(name: String, rating: u8) {
                description("name already present")
                display("{} is already in the list with skill level {}.", name, rating)
            }
            UnknownName(name: String) {
                description("name not present")
                display("{} is not in the list.", name)
            }
            InvalidRating(rating: i64) {
                description("rating out of range")
                display("Skill level must be between 1 and 5. Got: {}", rating)
            }
            InvalidGroupMember(name: String) {
                description("group references an unknown or already grouped name")
                display("Invalid group member: {}", name)
            }
            MissingSizeSpec {
                description("neither team size nor team count given")
                display("Please specify either team_size or num_teams.")
            }
            NamesNotFound(first: String, second: String) {
                description("name missing from every team")
                display("One or both names not found in teams: {}, {}", first, second)
            }
            EmptyRoster {
                description("nothing to reshuffle")
                display("No existing data to reshuffle. Please provide parameters.")
            }
            InvalidLine(number: usize, line: String) {
                description("roster line without a name")
                display("Line {} has no name: '{}'", number, line)
            }
            MissingParameter(key: String) {
                description("required parameter missing")
                display("Please provide {}.", key)
            }
            InvalidParameter(key: String, value: String) {
                description("parameter could not be understood")
                display("Invalid value for {}: {}", key, value)
            }
            UnknownCommand(command: String) {
                description("no handler registered")
                display("Unknown command: {}", command)
            }
            MissingAttachment {
                description("command needs an attachment")
                display("Please attach a .txt file with the command.")
            }
            UnsupportedAttachment(filename: String) {
                description("attachment is not plain text")
                display("Only .txt files are supported. Got: {}", filename)
            }
        }
    }
}
