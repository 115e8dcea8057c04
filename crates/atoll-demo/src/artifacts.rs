//! Preview artifacts written after each generation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use atoll_config::OutputConfig;
use atoll_mesh::{MeshBuffers, write_obj};
use atoll_terrain::FalloffMask;
use atoll_terrain::debug_viz::{ImageEncodeError, render_falloff_debug, render_heightmap_debug};

/// Errors raised while writing artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageEncodeError,
    },
}

/// Write the artifacts enabled in `output` and return their paths.
///
/// `falloff` is the mask the mesh was generated with, if any.
pub fn write_artifacts(
    output: &OutputConfig,
    mesh: &MeshBuffers,
    vertices_per_line: u32,
    falloff: Option<&FalloffMask>,
) -> Result<Vec<PathBuf>, ArtifactError> {
    std::fs::create_dir_all(&output.directory).map_err(|source| ArtifactError::Io {
        path: output.directory.clone(),
        source,
    })?;

    let mut written = Vec::new();

    if output.write_obj {
        let path = output.artifact_path("", "obj");
        let io_err = |source| ArtifactError::Io {
            path: path.clone(),
            source,
        };
        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        write_obj(mesh, &mut writer).map_err(io_err)?;
        writer.flush().map_err(io_err)?;
        written.push(path);
    }

    if output.write_heightmap_png {
        let heights: Vec<f32> = mesh.populated_vertices().iter().map(|v| v.y).collect();
        let image = render_heightmap_debug(&heights, vertices_per_line);
        let path = output.artifact_path("height", "png");
        write_png(&path, image.to_png())?;
        written.push(path);
    }

    if output.write_falloff_png
        && let Some(mask) = falloff
    {
        let path = output.artifact_path("falloff", "png");
        write_png(&path, render_falloff_debug(mask).to_png())?;
        written.push(path);
    }

    Ok(written)
}

fn write_png(
    path: &Path,
    encoded: Result<Vec<u8>, ImageEncodeError>,
) -> Result<(), ArtifactError> {
    let bytes = encoded.map_err(|source| ArtifactError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, bytes).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}
