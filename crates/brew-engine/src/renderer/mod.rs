pub mod circle_instance;
