pub mod html;
pub mod recording;
