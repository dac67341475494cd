pub mod actions;
pub mod data;
pub mod lyapunov;
pub mod threadpool;
