pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use rpb_entities::{comment::*, rating::*, time::*, user::*};
}
