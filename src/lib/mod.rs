//! Static page generator and server for the EpiBook mock social network:
//! login, signup and profile pages built from typed components.

pub mod assets;
pub mod cli;
pub mod config;
pub mod css;
pub mod form;
pub mod links;
pub mod markup;
pub mod nav;
pub mod pages;
pub mod pipeline;
pub mod profile;
pub mod server;
pub mod templates;
pub mod types;
pub mod utils;
