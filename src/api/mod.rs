//! Внешний API движка инициативы.
//!
//! Здесь описываются:
//! - команды (commands.rs) — разбор «имя команды + строка аргументов»;
//! - DTO (dto.rs) — структурные ответы движка;
//! - ошибки (errors.rs) — то, что видит пользователь чата;
//! - выполнение (dispatch.rs) и текст ответов (render.rs).

pub mod commands;
pub mod dispatch;
pub mod dto;
pub mod errors;
pub mod render;

pub use commands::*;
pub use dispatch::*;
pub use dto::*;
pub use errors::*;
pub use render::*;
