pub mod touchpoint;
