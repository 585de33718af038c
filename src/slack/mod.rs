mod blocks;
mod client;

pub use blocks::{Block, Image, Text, build_blocks, render_timestamp};
pub use client::{SlackClient, SlackResponse};
