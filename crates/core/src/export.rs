use crate::error::Result;
use buildscope_api::WorkspaceSnapshot;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes the snapshot as JSON. `pretty` switches to indented output.
pub fn write_snapshot<W: Write>(
    snapshot: &WorkspaceSnapshot,
    mut writer: W,
    pretty: bool,
) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
    } else {
        serde_json::to_writer(&mut writer, snapshot)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn export_to_file(snapshot: &WorkspaceSnapshot, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_snapshot(snapshot, BufWriter::new(file), pretty)?;
    info!("Snapshot written to {}", path.display());
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<WorkspaceSnapshot> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildscope_api::{ModuleId, ProjectModel, SourceSet, ToolchainSettings};
    use std::collections::{BTreeMap, BTreeSet};

    fn sample() -> WorkspaceSnapshot {
        let mut toolchains = BTreeMap::new();
        toolchains.insert(
            ModuleId::from("App.lib"),
            ToolchainSettings {
                jvm_target: Some("17".to_string()),
                ..Default::default()
            },
        );
        let mut source_sets = BTreeMap::new();
        source_sets.insert(
            ModuleId::from("App.lib"),
            BTreeSet::from([SourceSet::new("main")]),
        );
        WorkspaceSnapshot::new(vec![ProjectModel::new("App")], toolchains, source_sets)
    }

    #[test]
    fn compact_output_is_a_single_line() {
        let mut buf = Vec::new();
        write_snapshot(&sample(), &mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"sourceSets\""));
    }

    #[test]
    fn exported_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("snapshot.json");
        export_to_file(&sample(), &path, true).unwrap();
        assert_eq!(read_snapshot(&path).unwrap(), sample());
    }
}
