// Adapters: the HTTP zone source and terminal rendering.

pub mod http;
pub mod report;
