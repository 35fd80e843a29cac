use std::path::PathBuf;
use std::time::Instant;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator};
use log::{info, debug, warn};
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::config::TashabuhConfig;
use crate::error::Result;

use super::detector::PlagiarismDetector;
use super::types::Comparison;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPair {
    pub first: PathBuf,
    pub second: PathBuf,
}

impl DocumentPair {
    pub fn new<A: Into<PathBuf>, B: Into<PathBuf>>(first: A, second: B) -> Self {
        Self { first: first.into(), second: second.into() }
    }
}

#[derive(Debug)]
pub struct PairOutcome {
    pub pair: DocumentPair,
    pub result: Result<Comparison>,
}

/// Compares many file pairs, each with its own detector.
pub struct ParallelMatcher {
    config: TashabuhConfig,
    thread_pool: Option<rayon::ThreadPool>,
}

impl ParallelMatcher {
    pub fn new(config: TashabuhConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.processor.use_parallel {
            let thread_count = config.processor.effective_thread_count();
            debug!("Building comparison pool with {} threads", thread_count);
            Some(rayon::ThreadPoolBuilder::new()
                .num_threads(thread_count)
                .thread_name(|i| format!("compare-worker-{}", i))
                .build()?)
        } else {
            None
        };

        Ok(Self { config, thread_pool })
    }

    pub fn config(&self) -> &TashabuhConfig {
        &self.config
    }

    /// Results come back in input order. A failing pair is reported in its
    /// own outcome and does not stop the others.
    pub fn compare_pairs(&self, pairs: &[DocumentPair], progress: Option<&ProgressBar>) -> Vec<PairOutcome> {
        let start_time = Instant::now();
        info!("Comparing {} document pairs", pairs.len());

        let run = |pair: &DocumentPair| {
            let result = PlagiarismDetector::new(&self.config)
                .and_then(|mut detector| detector.compare_files(&pair.first, &pair.second));
            if let Err(e) = &result {
                warn!("Comparison of {:?} and {:?} failed: {}", pair.first, pair.second, e);
            }
            PairOutcome { pair: pair.clone(), result }
        };

        let progress = progress.cloned().unwrap_or_else(ProgressBar::hidden);
        let outcomes: Vec<PairOutcome> = match &self.thread_pool {
            Some(pool) => pool.install(|| pairs.par_iter().progress_with(progress).map(run).collect()),
            None => pairs.iter().progress_with(progress).map(run).collect(),
        };

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!("Compared {} pairs ({} failed) in {:.2?}", outcomes.len(), failed, start_time.elapsed());
        outcomes
    }
}
