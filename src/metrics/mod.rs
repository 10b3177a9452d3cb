pub mod schwarzschild;
