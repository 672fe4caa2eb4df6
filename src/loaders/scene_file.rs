use anyhow::{Context, Result};
use glam::DVec3;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::error::SceneError;
use crate::types::{Cylinder, Material};

/// One parsed line of a scene file
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Directive {
    Material(Material),
    Cylinder(Cylinder),
}

/// Loads a scene file written by this crate and parses its directives
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<Vec<Directive>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .context(format!("Failed to read scene file: {:?}", path))?;
    let directives =
        parse_scene(&text).context(format!("Failed to parse scene file: {:?}", path))?;
    log::debug!("Parsed {} directives from {:?}", directives.len(), path);
    Ok(directives)
}

/// Parses `mtlcolor` and `cylinder` lines. Blank lines are skipped, any
/// other tag is an error.
pub fn parse_scene(source: &str) -> Result<Vec<Directive>, SceneError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<Directive, SceneError> {
    let mut fields = line.split_whitespace();
    let tag = fields.next().unwrap_or_default();
    match tag {
        "mtlcolor" => {
            let v = read_numbers::<12>(line_no, tag, fields)?;
            let shininess = v[9];
            if shininess < 0.0 || shininess.fract() != 0.0 || shininess > u32::MAX as f64 {
                return Err(SceneError::InvalidDirective {
                    line: line_no,
                    reason: format!("shininess must be a non-negative integer (given {})", shininess),
                });
            }
            Ok(Directive::Material(Material {
                diffuse: [v[0], v[1], v[2]],
                specular: [v[3], v[4], v[5]],
                ka: v[6],
                kd: v[7],
                ks: v[8],
                shininess: shininess as u32,
                opacity: v[10],
                ior: v[11],
            }))
        }
        "cylinder" => {
            let v = read_numbers::<8>(line_no, tag, fields)?;
            Ok(Directive::Cylinder(Cylinder {
                center: DVec3::new(v[0], v[1], v[2]),
                axis: DVec3::new(v[3], v[4], v[5]),
                radius: v[6],
                length: v[7],
            }))
        }
        _ => Err(SceneError::UnknownDirective {
            line: line_no,
            tag: tag.to_string(),
        }),
    }
}

fn read_numbers<const N: usize>(
    line_no: usize,
    tag: &str,
    fields: SplitWhitespace<'_>,
) -> Result<[f64; N], SceneError> {
    let mut values = [0.0; N];
    let mut found = 0;
    for field in fields {
        if found == N {
            return Err(field_count_error(line_no, tag, N));
        }
        values[found] = field.parse().map_err(|_| SceneError::InvalidDirective {
            line: line_no,
            reason: format!("'{}' is not a number", field),
        })?;
        found += 1;
    }
    if found != N {
        return Err(field_count_error(line_no, tag, N));
    }
    Ok(values)
}

fn field_count_error(line_no: usize, tag: &str, expected: usize) -> SceneError {
    SceneError::InvalidDirective {
        line: line_no,
        reason: format!("{} expects {} numbers", tag, expected),
    }
}
