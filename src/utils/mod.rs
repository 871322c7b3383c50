//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores
//! y el apagado graceful de los servidores.

pub mod errors;
pub mod shutdown;
