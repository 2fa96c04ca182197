pub mod circle_render;
