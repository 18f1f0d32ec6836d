// canal FIFO sin limite de capacidad, con receive bloqueante.
// acepta cualquier cantidad de emisores y receptores, pero cada item
// se entrega a UN solo receptor (no es broadcast).

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use crate::error::SendError;

/// estado interno protegido por el mutex del canal
struct Inner<T> {
    queue: VecDeque<T>,
    closed: bool,
}

/// Canal bloqueante de propósito general.
///
/// `send` encola sin bloquear nunca; `receive` suspende al hilo mientras
/// la cola esté vacía. El orden de salida es el orden de entrada.
pub struct BlockingChannel<T> {
    inner: Mutex<Inner<T>>,
    item_ready: Condvar,
}

impl<T> BlockingChannel<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                queue: VecDeque::new(),
                closed: false,
            }),
            item_ready: Condvar::new(),
        }
    }

    /// Encola un valor y despierta a UN receptor en espera.
    ///
    /// La propiedad del valor pasa al canal. Falla solo si el canal ya
    /// fue cerrado, devolviendo el valor dentro del error.
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        let mut inner = self.inner.lock().unwrap();
        if inner.closed {
            return Err(SendError(value));
        }
        inner.queue.push_back(value);
        drop(inner);
        // notificar fuera del lock: el receptor despierta y lo toma directo
        self.item_ready.notify_one();
        Ok(())
    }

    /// Saca el primer valor, bloqueando mientras el canal esté vacío.
    ///
    /// Devuelve `None` cuando el canal está cerrado y sin items
    /// pendientes. Sobre un canal abierto al que nadie manda, bloquea
    /// indefinidamente.
    pub fn receive(&self) -> Option<T> {
        let mut inner = self.inner.lock().unwrap();
        loop {
            // re-verificar en cada vuelta: un wakeup espurio, o una carrera
            // entre varios receptores por el mismo item, puede dejar la
            // cola vacia otra vez despues de despertar
            if let Some(value) = inner.queue.pop_front() {
                return Some(value);
            }
            if inner.closed {
                return None;
            }
            inner = self.item_ready.wait(inner).unwrap();
        }
    }

    /// version no bloqueante de receive
    pub fn try_receive(&self) -> Option<T> {
        self.inner.lock().unwrap().queue.pop_front()
    }

    /// Cierra el canal y despierta a todos los receptores bloqueados.
    ///
    /// Los items ya encolados todavía se pueden recibir; los sends
    /// posteriores fallan. Idempotente.
    pub fn close(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.closed = true;
        drop(inner);
        self.item_ready.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().unwrap().closed
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for BlockingChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_then_receive() {
        let chan = BlockingChannel::new();
        chan.send(1).unwrap();
        assert_eq!(chan.len(), 1);
        assert_eq!(chan.receive(), Some(1));
        assert!(chan.is_empty());
    }

    #[test]
    fn test_try_receive_on_empty() {
        let chan: BlockingChannel<i32> = BlockingChannel::new();
        assert_eq!(chan.try_receive(), None);
    }

    #[test]
    fn test_send_after_close_returns_value() {
        let chan = BlockingChannel::new();
        chan.close();
        let err = chan.send(7).unwrap_err();
        assert_eq!(err.into_inner(), 7);
    }

    #[test]
    fn test_close_is_idempotent() {
        let chan: BlockingChannel<i32> = BlockingChannel::new();
        chan.close();
        chan.close();
        assert!(chan.is_closed());
    }
}
