//! Parameter store over the published `input_data/` text files
//!
//! Layout, relative to `input_data/`:
//!
//! - `fNN/shift_D50.txt`: one optimum per line, truncated to D columns
//! - `fNN/rot_D{D}.txt`: K stacked D x D matrices (F22 uses `rot_sub_D{D}.txt`)
//! - `f05/shift_D50.txt`: the optimum row followed by the rows of A
//! - `f12/bias_D50.txt`: the a rows, the b rows, then the alpha row
//! - `meta_2005.json` (optional): per `fNN` file name and bounds overrides
//!
//! Rotation files hold matrices for row-vector products; they are transposed
//! at load time.

use crate::catalog::{self, Landscape, ProblemSpec};
use crate::errors::{CecError, CecResult};
use crate::params::{Auxiliary, ParameterStore, ProblemParameters};
use cecbench_env::constants::{MANIFEST_FILE, problem_key};
use cecbench_env::env_utils;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File names for the largest published dimension; smaller D truncate rows
const FULL_DIMENSION_SUFFIX: &str = "D50";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub functions: HashMap<String, ManifestEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub files: ManifestFiles,
    #[serde(default)]
    pub bounds: Option<ManifestBounds>,
}

/// Paths relative to `input_data/`; `{D}` in `rotation` is replaced by the dimension
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestFiles {
    pub shift: Option<String>,
    pub rotation: Option<String>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManifestBounds {
    pub min: f64,
    pub max: f64,
}

/// Reads problem parameters from a `<root>/input_data/` tree
#[derive(Debug, Clone)]
pub struct DirectoryParameterStore {
    input_data: PathBuf,
    manifest: Option<Manifest>,
}

impl DirectoryParameterStore {
    /// Open the tree below `root` (the directory that contains `input_data/`)
    pub fn open(root: impl AsRef<Path>) -> CecResult<Self> {
        let input_data = env_utils::input_data_dir(root.as_ref())?;
        let manifest_path = input_data.join(MANIFEST_FILE);
        let manifest = if manifest_path.is_file() {
            let text = fs::read_to_string(&manifest_path).map_err(|source| CecError::Io {
                path: manifest_path.clone(),
                source,
            })?;
            let manifest: Manifest = serde_json::from_str(&text)?;
            log::debug!(
                "manifest {} lists {} functions",
                manifest_path.display(),
                manifest.functions.len()
            );
            Some(manifest)
        } else {
            None
        };
        Ok(Self {
            input_data,
            manifest,
        })
    }

    /// Open the tree named by the `CEC2005_DATA_DIR` environment variable
    pub fn from_env() -> CecResult<Self> {
        env_utils::check_data_env()?;
        let root = env_utils::get_data_dir()?;
        Self::open(root)
    }

    pub fn input_data(&self) -> &Path {
        &self.input_data
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    fn entry(&self, id: u32) -> Option<&ManifestEntry> {
        self.manifest
            .as_ref()
            .and_then(|m| m.functions.get(&problem_key(id)))
    }

    /// Search range of problem `id`: the manifest override or the catalog value
    pub fn search_bounds(&self, id: u32) -> CecResult<(f64, f64)> {
        let spec = catalog::spec(id)?;
        Ok(match self.entry(id).and_then(|e| e.bounds) {
            Some(b) => (b.min, b.max),
            None => spec.bounds,
        })
    }

    fn shift_path(&self, spec: &ProblemSpec) -> PathBuf {
        let files = self.entry(spec.id).map(|e| &e.files);
        let over = match spec.landscape {
            Landscape::Schwefel213 => files.and_then(|f| f.data.as_ref().or(f.shift.as_ref())),
            _ => files.and_then(|f| f.shift.as_ref()),
        };
        if let Some(name) = over {
            return self.input_data.join(name);
        }
        let file = match spec.landscape {
            Landscape::Schwefel213 => format!("bias_{}.txt", FULL_DIMENSION_SUFFIX),
            _ => format!("shift_{}.txt", FULL_DIMENSION_SUFFIX),
        };
        env_utils::problem_data_dir(&self.input_data, spec.shift_folder).join(file)
    }

    fn rotation_path(&self, spec: &ProblemSpec, dimension: usize) -> Option<PathBuf> {
        let source = spec.rotation?;
        let over = self
            .entry(spec.id)
            .and_then(|e| e.files.rotation.as_ref())
            .map(|name| self.input_data.join(name.replace("{D}", &dimension.to_string())));
        Some(over.unwrap_or_else(|| {
            env_utils::problem_data_dir(&self.input_data, source.folder)
                .join(format!("{}_D{}.txt", source.stem, dimension))
        }))
    }
}

impl ParameterStore for DirectoryParameterStore {
    fn load(&self, id: u32, dimension: usize) -> CecResult<ProblemParameters> {
        let spec = catalog::spec(id)?;
        if !spec.supports_dimension(dimension) {
            return Err(CecError::UnsupportedDimension { id, dimension });
        }
        let k = spec.component_count();
        let path = self.shift_path(spec);
        let rows = read_rows(&path, id, dimension)?;

        let (shifts, auxiliary) = match spec.landscape {
            Landscape::Schwefel26 => {
                let shift = take_matrix(&rows, 0, 1, dimension, &path)?;
                let a = take_matrix(&rows, 1, dimension, dimension, &path)?;
                (shift, Auxiliary::Schwefel26 { a })
            }
            Landscape::Schwefel213 => {
                if rows.len() < 2 * dimension + 1 || rows.len() % 2 == 0 {
                    return Err(corrupt(
                        &path,
                        format!(
                            "expected 2R + 1 rows with R >= {}, found {}",
                            dimension,
                            rows.len()
                        ),
                    ));
                }
                let block = (rows.len() - 1) / 2;
                let a = take_matrix(&rows, 0, dimension, dimension, &path)?;
                let b = take_matrix(&rows, block, dimension, dimension, &path)?;
                let alpha = take_matrix(&rows, 2 * block, 1, dimension, &path)?;
                (alpha, Auxiliary::Schwefel213 { a, b })
            }
            _ => (read_shifts(&rows, k, dimension, &path)?, Auxiliary::None),
        };

        let rotations = match self.rotation_path(spec, dimension) {
            Some(rot_path) => {
                let rot_rows = read_rows(&rot_path, id, dimension)?;
                Some(read_rotations(&rot_rows, k, dimension, &rot_path)?)
            }
            None => None,
        };

        log::debug!(
            "loaded F{} D={} from {} (rotations: {})",
            id,
            dimension,
            path.display(),
            rotations.is_some()
        );
        Ok(ProblemParameters::from_catalog(spec, shifts, rotations, auxiliary))
    }
}

fn corrupt(path: &Path, reason: String) -> CecError {
    CecError::CorruptParameterData {
        path: path.to_path_buf(),
        reason,
    }
}

/// Whitespace separated numbers, one row per non-empty line
fn read_rows(path: &Path, id: u32, dimension: usize) -> CecResult<Vec<Vec<f64>>> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CecError::MissingParameterData {
                id,
                dimension,
                what: path.display().to_string(),
            }
        } else {
            CecError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    corrupt(path, format!("line {}: cannot parse {:?}", line_no + 1, token))
                })
            })
            .collect::<CecResult<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// `nrows` x `ncols` block starting at row `first`, each row truncated to `ncols`
fn take_matrix(
    rows: &[Vec<f64>],
    first: usize,
    nrows: usize,
    ncols: usize,
    path: &Path,
) -> CecResult<Array2<f64>> {
    if rows.len() < first + nrows {
        return Err(corrupt(
            path,
            format!("expected at least {} rows, found {}", first + nrows, rows.len()),
        ));
    }
    if let Some((i, row)) = rows[first..first + nrows]
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() < ncols)
    {
        return Err(corrupt(
            path,
            format!("row {} has {} values, expected {}", first + i + 1, row.len(), ncols),
        ));
    }
    Ok(Array2::from_shape_fn((nrows, ncols), |(i, j)| {
        rows[first + i][j]
    }))
}

/// K shift rows; a single optimum may also be written across several lines
fn read_shifts(rows: &[Vec<f64>], k: usize, dimension: usize, path: &Path) -> CecResult<Array2<f64>> {
    let row_wise = rows.len() >= k && rows[..k].iter().all(|r| r.len() >= dimension);
    if row_wise || k > 1 {
        return take_matrix(rows, 0, k, dimension, path);
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().take(dimension).collect();
    if flat.len() < dimension {
        return Err(corrupt(
            path,
            format!("expected {} values, found {}", dimension, flat.len()),
        ));
    }
    Ok(Array2::from_shape_fn((1, dimension), |(_, j)| flat[j]))
}

/// K stacked D x D matrices, transposed into the `M . z` convention
fn read_rotations(
    rows: &[Vec<f64>],
    k: usize,
    dimension: usize,
    path: &Path,
) -> CecResult<Vec<Array2<f64>>> {
    let stacked = take_matrix(rows, 0, k * dimension, dimension, path)?;
    Ok((0..k)
        .map(|c| {
            let block = stacked.slice(ndarray::s![c * dimension..(c + 1) * dimension, ..]);
            block.t().to_owned()
        })
        .collect())
}
