pub mod entity;
pub mod policy;

pub use entity::{Entity, FOREIGN_PARTNER_LABEL};
pub use policy::PairingPolicy;
