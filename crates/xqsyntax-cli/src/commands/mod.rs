pub mod ast;
pub mod check;
pub mod delimit;
pub mod input;
pub mod json;
pub mod template;
pub mod tokens;
