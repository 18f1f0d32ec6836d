use thiserror::Error;

/// Error al enviar sobre un canal que ya fue cerrado.
///
/// Envuelve el valor que se intentaba mandar, para que el caller
/// pueda recuperarlo o reintentar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("send fallido, el canal esta cerrado")]
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    /// recupera el valor que no se pudo enviar
    pub fn into_inner(self) -> T {
        self.0
    }
}
