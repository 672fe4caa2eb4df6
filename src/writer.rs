use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::SceneError;
use crate::types::SceneRecord;

/// Streams records to `out`, material line first, and returns how many
/// records were written.
pub fn write_records<W, I>(mut out: W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = SceneRecord>,
{
    let mut written = 0;
    for record in records {
        write!(out, "{}", record)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

pub fn render_scene(records: impl IntoIterator<Item = SceneRecord>) -> String {
    records.into_iter().map(|record| record.to_string()).collect()
}

/// Writes a scene file at `path`, replacing any existing file.
///
/// The records go to a temporary file next to `path` which is renamed over
/// the target only once everything has been written. If anything fails the
/// temporary file is removed and the previous scene file stays untouched.
pub fn write_scene(
    path: impl AsRef<Path>,
    records: impl IntoIterator<Item = SceneRecord>,
) -> Result<usize, SceneError> {
    let path = path.as_ref();
    let output_error = |source: io::Error| SceneError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(output_error)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(output_error)?;
    }

    let mut out = BufWriter::new(tmp);
    let written = write_records(&mut out, records).map_err(output_error)?;
    let tmp = out
        .into_inner()
        .map_err(|err| output_error(err.into_error()))?;
    tmp.persist(path).map_err(|err| output_error(err.error))?;

    log::debug!("Wrote {} records to {:?}", written, path);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RingConfig;
    use crate::scenes::generate_ring_scene;

    #[test]
    fn test_write_records_counts_pairs() {
        let config = RingConfig {
            radius: 1.0,
            count: 1,
            ..RingConfig::default()
        };
        let mut buf = Vec::new();
        let written = write_records(&mut buf, generate_ring_scene(&config).unwrap()).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 4);
    }

    #[test]
    fn test_render_matches_write() {
        let config = RingConfig::default();
        let mut buf = Vec::new();
        write_records(&mut buf, generate_ring_scene(&config).unwrap()).unwrap();
        let rendered = render_scene(generate_ring_scene(&config).unwrap());
        assert_eq!(rendered.as_bytes(), buf.as_slice());
    }

    #[test]
    fn test_write_scene_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen_scene.scene");
        std::fs::write(&path, "stale contents\n").unwrap();

        let written = write_scene(&path, generate_ring_scene(&RingConfig::default()).unwrap()).unwrap();
        assert_eq!(written, 33);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), 66);
        // only the scene itself is left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_scene_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("gen_scene.scene");
        let err = write_scene(&path, generate_ring_scene(&RingConfig::default()).unwrap()).unwrap_err();
        match err {
            SceneError::OutputWrite { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {}", other),
        }
    }
}
