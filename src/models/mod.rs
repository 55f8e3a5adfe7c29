pub mod booking;
pub mod destination;
pub mod hotel;
pub mod user;

use serde::Serialize;

/// Plain confirmation body, e.g. `{"message": "Hotel added successfully"}`.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Message {
            message: message.into(),
        }
    }
}
