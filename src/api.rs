pub mod retail;
