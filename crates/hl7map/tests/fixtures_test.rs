use std::fs;

use hl7map::{message_to_map, Naming};

#[test]
fn test_valid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let valid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/valid");
    for entry in fs::read_dir(valid_dir)? {
        let path = entry?.path();
        let content = fs::read_to_string(&path)?;
        for naming in [Naming::Long, Naming::Short] {
            let map = message_to_map(&content, naming).map_err(|err| {
                std::io::Error::other(format!("Failed to convert valid file {path:?}: {err}"))
            })?;
            if !map.contains_key("MSH") {
                return Err(std::io::Error::other(format!("No MSH key for {path:?}")).into());
            }
        }
    }
    Ok(())
}

#[test]
fn test_invalid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let invalid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid");
    for entry in fs::read_dir(invalid_dir)? {
        let path = entry?.path();
        let content = fs::read_to_string(&path)?;
        match message_to_map(&content, Naming::Long) {
            Ok(_) => {
                return Err(std::io::Error::other(format!(
                    "Should fail to convert invalid file: {path:?}"
                ))
                .into());
            }
            Err(err) if !err.kind().is_malformed_input() => {
                return Err(std::io::Error::other(format!(
                    "Unexpected error kind for {path:?}: {err}"
                ))
                .into());
            }
            Err(_) => {}
        }
    }
    Ok(())
}
