pub mod arp;
pub mod resolver;
