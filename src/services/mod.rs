pub mod client;

mod map;
mod media;
mod search;
mod steam;
mod traffic;
mod truckersmp;
