pub mod blocks;
pub mod detect;
pub mod html;
pub mod text;
