use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;

/// Parallel evaluation configuration
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Enable parallel evaluation
    pub enabled: bool,
    /// Number of threads to use (None = use rayon default)
    pub num_threads: Option<usize>,
    /// Batches smaller than this are evaluated sequentially
    pub min_batch: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_threads: None,
            min_batch: 4,
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Evaluate every row of `population`, in parallel when configured
///
/// Results keep the row order. The first error (in row order) is returned.
pub fn evaluate_rows<T, E, F>(
    population: &Array2<f64>,
    eval_fn: F,
    config: &ParallelConfig,
) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(usize, ArrayView1<'_, f64>) -> Result<T, E> + Send + Sync,
{
    let npop = population.nrows();

    if !config.enabled || npop < config.min_batch {
        return (0..npop).map(|i| eval_fn(i, population.row(i))).collect();
    }

    let run = || {
        (0..npop)
            .into_par_iter()
            .map(|i| eval_fn(i, population.row(i)))
            .collect::<Vec<Result<T, E>>>()
    };
    let results = match config.num_threads {
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                log::warn!("could not build a {}-thread pool ({}), using the global pool", n, e);
                run()
            }
        },
        None => run(),
    };
    results.into_iter().collect()
}
