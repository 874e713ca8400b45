// src/infrastructure/repositories/mod.rs
mod in_memory_user;

pub use in_memory_user::InMemoryUserRepository;
