pub mod lyapunov;
