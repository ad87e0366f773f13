//! # Business Logic Services
//!
//! ## Available Services
//!
//! - **Scheduler** (`scheduler`) - Periodic scheduled trigger
//! - **Server Status** (`server_status`) - Minecraft status API client
//! - **Reply** (`reply`) - Group reply delivery seam
//! - **Command** (`command`) - Bot command handling

pub mod command;
pub mod reply;
pub mod scheduler;
pub mod server_status;
