#![doc = "The `taskdeck` library crate."]
#![doc = ""]
#![doc = "A minimal multi-user task-tracking backend. Users register, log in, and"]
#![doc = "manage personal to-do items over a JSON API. Authentication is a stateless"]
#![doc = "bearer token delivered in a cookie: validity is decided entirely by the"]
#![doc = "token's signature, expiry, and subject, with no server-side session table."]
#![doc = "The main binary (`main.rs`) wires these modules into the running server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
