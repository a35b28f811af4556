pub mod anchor;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod events;
pub mod geometry;
pub mod resolver;
pub mod sampler;
pub mod smooth;
pub mod trace;
pub mod visibility;
