pub mod demo;
pub mod error;
pub mod models;
pub mod telemetry;

use std::io::Write;
use std::rc::Rc;

pub use demo::run_demo;
pub use error::{Error, PairingError, Result, PAIRING_ERROR_MESSAGE};
pub use models::{Entity, PairingPolicy};

/// Write a `name,partner` CSV row per entity
///
/// An unpaired entity (or one whose partner was dropped) gets an empty
/// partner field; a foreign link is written as `FOREIGN_PARTNER_LABEL`.
pub fn write_snapshots<W: Write>(entities: &[Rc<Entity>], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entity in entities {
        csv_writer.serialize(&**entity)?;
    }

    csv_writer.flush()?;
    Ok(())
}
