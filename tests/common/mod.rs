#![allow(dead_code)]

use std::rc::Rc;

use entity_pairing::Entity;

/// Helper to create two entities already paired with each other
pub fn make_pair(first: &str, second: &str) -> (Rc<Entity>, Rc<Entity>) {
    let a = Entity::new(first);
    let b = Entity::new(second);
    a.pair(b.clone()).expect("two entities always pair");
    (a, b)
}

/// Write snapshots of the given entities and return the CSV output
pub fn snapshot_csv_string(entities: &[Rc<Entity>]) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    entity_pairing::write_snapshots(entities, &mut output)?;
    Ok(String::from_utf8(output)?)
}

/// Assert that `a` and `b` point at each other
pub fn assert_mutual(a: &Rc<Entity>, b: &Rc<Entity>) {
    assert!(
        a.is_paired_with(b) && b.is_paired_with(a),
        "Expected {:?} and {:?} to be paired with each other",
        a,
        b
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_pair() {
        let (a, b) = make_pair("A", "B");
        assert_eq!(a.name(), "A");
        assert_eq!(b.name(), "B");
        assert_mutual(&a, &b);
    }

    #[test]
    fn test_snapshot_csv_string() {
        let (a, b) = make_pair("A", "B");
        let output = snapshot_csv_string(&[a, b]).unwrap();

        assert!(output.starts_with("name,partner\n"));
        assert!(output.contains("A,B\n"));
        assert!(output.contains("B,A\n"));
    }
}
