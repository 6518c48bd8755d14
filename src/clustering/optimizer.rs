use super::*;
use rayon::prelude::*;
use serde::Serialize;

/// Final report: the chosen cluster count, how it was chosen, and the best run.
///
/// `elbow` is absent when the count was fixed by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub clusters: usize,
    pub seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elbow: Option<Elbow>,
    pub run: Run,
}

/// Top-level driver.
///
/// Picks the cluster count with an [`Elbow`] search, then repeats the
/// clustering `restarts` times at that count from fresh random centroids and
/// keeps the run with the lowest error. The restarts do not reuse any run of
/// the elbow search.
pub struct Optimizer<'a> {
    fcm: FuzzyCMeans<'a>,
    params: Parameters,
    seed: u64,
}

impl<'a> Optimizer<'a> {
    pub fn new(points: &'a [Point], params: Parameters) -> Result<Self, ConfigurationError> {
        let fcm = FuzzyCMeans::new(points, &params)?;
        let seed = params.seed.unwrap_or_else(seed::entropy);
        log::debug!("{:<32}{:<32}", "optimizer seed", seed);
        Ok(Self { fcm, params, seed })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn engine(&self) -> &FuzzyCMeans<'a> {
        &self.fcm
    }

    /// Elbow search followed by best-of-R restarts at the selected count.
    pub fn solve(&self) -> Result<Solution, ConfigurationError> {
        let elbow = Elbow::search(
            &self.fcm,
            self.params.range.clone(),
            self.params.restarts,
            self.seed,
        )?;
        let clusters = elbow.selected();
        let run = self.best(clusters)?;
        Ok(Solution {
            clusters,
            seed: self.seed,
            elbow: Some(elbow),
            run,
        })
    }

    /// Best-of-R restarts at a caller-chosen count, skipping the elbow search.
    pub fn fixed(&self, clusters: usize) -> Result<Solution, ConfigurationError> {
        let run = self.best(clusters)?;
        Ok(Solution {
            clusters,
            seed: self.seed,
            elbow: None,
            run,
        })
    }

    /// Lowest-error run among `restarts` independent trials at count `c`.
    ///
    /// Ties go to the earliest trial, so a fixed seed picks the same run
    /// regardless of thread scheduling.
    pub fn best(&self, c: usize) -> Result<Run, ConfigurationError> {
        self.fcm.admit(c)?;
        log::info!("{:<32}{:<32}", "restarting", format!("c = {} x {}", c, self.params.restarts));
        let runs = (0..self.params.restarts)
            .into_par_iter()
            .map(|t| self.fcm.trial(c, &mut seed::rng(self.seed, Stage::Restart, c, t)))
            .collect::<Result<Vec<Run>, _>>()?;
        let stalled = runs.iter().filter(|r| !r.status.converged()).count();
        if stalled > 0 {
            log::warn!("{} of {} restarts hit the iteration cap", stalled, runs.len());
        }
        let best = runs
            .into_iter()
            .min_by(|a, b| a.error.total_cmp(&b.error))
            .ok_or(ConfigurationError::Restarts)?;
        log::info!("{:<32}{:<32}", "best error", format!("{:.6}", best.error));
        Ok(best)
    }
}
