use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::geometry::Vector3;
use crate::solids::Solid;

/// Encode a solid as ASCII STL
///
/// Layout, per triangle in declaration order:
/// ```text
/// facet normal nx ny nz
/// \touter loop
/// \t\tvertex x y z      (x3, in stored winding order)
/// \tendloop
/// endfacet
/// <blank line>
/// ```
/// wrapped in `solid <name>` / `endsolid <name>`. Every number is printed
/// with exactly six decimal places.
///
/// Vertices keep the generator's face order, so for some faces the
/// right-hand winding disagrees with the (always outward) facet normal.
pub fn encode(solid: &Solid) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {}\n", solid.name));

    for tri in &solid.triangles {
        out.push_str(&format!("facet normal {}\n", format_vector(tri.normal)));
        out.push_str("\touter loop\n");
        for vertex in solid.corners(tri) {
            out.push_str(&format!("\t\tvertex {}\n", format_vector(vertex)));
        }
        out.push_str("\tendloop\n");
        out.push_str("endfacet\n\n");
    }

    out.push_str(&format!("endsolid {}\n", solid.name));
    out
}

fn format_vector(v: Vector3) -> String {
    format!("{:.6} {:.6} {:.6}", v.x, v.y, v.z)
}

/// Stream the ASCII STL encoding of `solid` into `writer`
pub fn write_ascii<W: Write>(writer: &mut W, solid: &Solid) -> std::io::Result<()> {
    writer.write_all(encode(solid).as_bytes())?;
    writer.flush()
}

/// Size in bytes of the ASCII STL file for `solid`
pub fn estimate_stl_size(solid: &Solid) -> usize {
    encode(solid).len()
}

/// File name a solid is written under
pub fn file_name(solid: &Solid) -> String {
    format!("{}.stl", solid.name)
}

/// Write `<dir>/<Name>.stl`
///
/// The text goes to a temporary file in `dir` first and is renamed into
/// place once complete, so a failed write never leaves a truncated STL.
pub fn write_stl(dir: &Path, solid: &Solid) -> Result<PathBuf> {
    let path = dir.join(file_name(solid));

    let temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        write_ascii(&mut writer, solid)
            .with_context(|| format!("Failed to write STL data for {}", solid.name))?;
    }
    temp.as_file()
        .sync_all()
        .context("Failed to sync STL data to disk")?;
    temp.persist(&path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;

    Ok(path)
}

/// Parse an STL file back into an indexed mesh
pub fn read_back(path: &Path) -> Result<stl_io::IndexedMesh> {
    let file =
        File::open(path).with_context(|| format!("Failed to open STL file: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    stl_io::read_stl(&mut reader)
        .with_context(|| format!("Failed to parse STL file: {}", path.display()))
}

/// Check a re-read mesh against the solid it was written from
pub fn verify(solid: &Solid, mesh: &stl_io::IndexedMesh) -> Result<()> {
    anyhow::ensure!(
        mesh.faces.len() == solid.triangles.len(),
        "{} facets read back, expected {}",
        mesh.faces.len(),
        solid.triangles.len()
    );
    anyhow::ensure!(
        mesh.vertices.len() == solid.vertices.len(),
        "{} distinct vertices read back, expected {}",
        mesh.vertices.len(),
        solid.vertices.len()
    );
    Ok(())
}
