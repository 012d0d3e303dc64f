pub mod accordion;
pub mod content;
pub mod diagnostics;
pub mod effects;
pub mod error_page;
pub mod filter;
pub mod modal;
pub mod notification;
pub mod scroll;
pub mod theme;
pub mod typing;
pub mod validation;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod frontend;
