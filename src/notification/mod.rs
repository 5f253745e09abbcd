//! # Notifications
//!
//! The boundary to the outbound messaging provider: order events, message rendering,
//! the [`NotificationGateway`] seam, and the fire-and-forget [`NotificationDispatcher`].

pub mod dispatcher;
pub mod event;
pub mod gateway;
pub mod render;

pub use dispatcher::*;
pub use event::*;
pub use gateway::*;
