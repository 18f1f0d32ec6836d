//! msgqueue: cola de mensajes bloqueante entre hilos
//! expone un canal FIFO generico cuyo receive suspende al caller

pub mod channel;
pub mod error;

pub use channel::BlockingChannel;
pub use error::SendError;
