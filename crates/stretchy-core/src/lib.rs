pub mod config;
pub mod error;
pub mod header;
pub mod trace;

pub use config::{AppConfig, OutputFormat};
pub use error::{Error, Result};
pub use header::{
    resolve_height, ContentInset, HeaderBounds, HeaderLayout, HeaderState, ScrollSample,
    ScrollSource, ScrollTracker, StretchyHeader,
};
pub use trace::{HeaderFrame, ReplaySummary, ScrollTrace};
