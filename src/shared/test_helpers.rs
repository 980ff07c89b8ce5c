#[cfg(test)]
use crate::features::regions::models::{Region, RegionLevel};

/// Build a region record for tests; the level and parent follow from the code.
#[cfg(test)]
pub fn sample_region(code: &str, name: &str, path: Option<&str>) -> Region {
    let level = RegionLevel::from_code(code);
    let parent_code = level
        .parent()
        .and_then(RegionLevel::code_len)
        .map(|len| code[..len].to_string());

    Region {
        code: code.to_string(),
        name: name.to_string(),
        level,
        capital: None,
        lat: Some(-6.2),
        lng: Some(106.8),
        elevation: None,
        timezone: Some(7),
        area: None,
        population: None,
        parent_code,
        path: path.map(str::to_string),
        status: Some(1),
    }
}
