// fases del semaforo

/// Fase actual del semáforo: rojo o verde, no existen más estados.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrafficLightPhase {
    Red,
    Green,
}

impl TrafficLightPhase {
    /// la fase opuesta; el ciclo alterna estrictamente rojo <-> verde
    pub fn toggled(self) -> Self {
        match self {
            TrafficLightPhase::Red => TrafficLightPhase::Green,
            TrafficLightPhase::Green => TrafficLightPhase::Red,
        }
    }

    // representacion compacta para guardar la fase en un atomico
    pub(crate) fn as_u8(self) -> u8 {
        match self {
            TrafficLightPhase::Red => 0,
            TrafficLightPhase::Green => 1,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            0 => TrafficLightPhase::Red,
            _ => TrafficLightPhase::Green,
        }
    }
}
