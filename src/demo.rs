use std::io::Write;
use std::rc::Rc;

use tracing::info;

use crate::error::Result;
use crate::models::{Entity, PairingPolicy};

/// Play the reference pairing scenarios, narrating each step to `out`
///
/// 1. Beyonce and Jay-Z are paired.
/// 2. Beyonce is paired with the plain string "Jay-Z"; the `PairingError` is
///    caught here and its message written to `out`.
/// 3. Execution carries on and Beyonce's name is still readable.
///
/// Returns the entities involved so the caller can report on them.
pub fn run_demo<W: Write>(policy: PairingPolicy, out: &mut W) -> Result<Vec<Rc<Entity>>> {
    info!(%policy, "running pairing demo");

    let beyonce = Entity::new("Beyonce");
    let jay_z = Entity::new("Jay-Z");

    // Two entities always pair; a failure here is a bug and propagates
    beyonce.pair(jay_z.clone())?;
    writeln!(
        out,
        "{} is paired with {}",
        beyonce.name(),
        beyonce.partner_name().unwrap_or_default()
    )?;

    if let Err(err) = beyonce.pair_with_policy(Rc::new(String::from("Jay-Z")), policy) {
        writeln!(out, "{}", err.message())?;
    }

    writeln!(out, "{} is still named {}", beyonce.name(), beyonce.name())?;

    Ok(vec![beyonce, jay_z])
}
