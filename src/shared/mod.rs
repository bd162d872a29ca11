// src/shared/mod.rs

pub mod shared_erros;
