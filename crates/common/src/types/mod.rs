use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Bare success acknowledgement for endpoints without a payload.
#[derive(Serialize, Debug)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self { Self { ok: true } }
}
