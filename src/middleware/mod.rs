//! Middleware compartido de los servidores

pub mod cors;
