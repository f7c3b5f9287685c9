pub mod carousel;
pub mod config;
pub mod consts;
pub mod content;
pub mod error;
pub mod frame_loop;
pub mod reveal;
pub mod sections;
pub mod selector;
