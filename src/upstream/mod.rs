// Upstream client for the generative-language API

pub mod client;

pub use client::UpstreamClient;
