/*!
Merging: adding every phrase of one sentence to another under the absorption law.

Both sentences satisfy the absorption invariant on entry, so phrases of the incoming sentence never need checking against each other --- each incoming phrase is weighed against the held phrases only.
At scale that pairwise sweep dominates, and the incoming phrases are split across scoped worker threads: workers read the held phrases through a shared immutable view, write only to their own report, and the caller commits removals and insertions after every worker has been joined.

Whether a merge goes multi-threaded is a scheduling decision, taken from the [Config] cost model.
Either path produces the same sentence.
*/

use crate::config::Config;
use crate::misc::log::targets;
use crate::procedures::absorption::absorbs;
use crate::structures::phrase::Phrase;
use crate::structures::sentence::Sentence;
use crate::types::err::MutationError;

/// What a worker found for its range of incoming phrases.
struct WorkerReport<P> {
    /// Indices into the held-phrase view of phrases absorbed by some phrase of the range.
    absorbed_held: Vec<usize>,

    /// The surviving phrases of the range, cloned; `None` where a held phrase absorbed the candidate.
    survivors: Vec<Option<P>>,
}

impl<P: Phrase> Sentence<P> {
    /// Add every phrase of `other`, applying the absorption law.
    ///
    /// `other` is read only; any of its phrases which survive are cloned in, so the two sentences never share a phrase.
    pub fn merge(&mut self, other: &Self, config: &Config) -> Result<(), MutationError> {
        self.guard()?;
        self.merge_in(other, config);
        Ok(())
    }

    pub(crate) fn merge_in(&mut self, other: &Self, config: &Config) {
        debug_assert_eq!(self.rules(), other.rules());

        // Short-circuit cases arranged in order of (approximate) speed, with the
        // final block the normal case.
        if other.phrases.is_empty() {
            // {A} + {} = {A}       (identity)
        } else if self.phrases.is_empty() {
            // {} + {B} = {B}       (identity)
            self.phrases = other.phrases.clone();
        } else if self.is_unit() {
            // {()} + {B} = {()}    (annulment)
        } else if other.is_unit() {
            // {A} + {()} = {()}    (annulment)
            self.phrases = other.phrases.clone();
        } else if self.phrases == other.phrases {
            // {A} + {A} = {A}      (idempotence)
        } else {
            let held_count = self.phrases.len();
            let incoming_count = other.phrases.len();
            let workers = config.merge_workers.value.max(1);

            // Multi-threading pays when A·(B/N) + N² + C < A·B, for A held phrases,
            // B incoming, N workers. With R = N² + C the comparison is taken as
            // A > R, or failing that R/A < B - B/N, which cannot overflow; the
            // truncation in R/A only strengthens the check.
            let cost_bound = workers * workers + config.merge_cost_constant.value;
            let parallel = workers > 1
                && (held_count > cost_bound
                    || (incoming_count - incoming_count / workers) > cost_bound / held_count);

            if parallel {
                log::debug!(
                    target: targets::MERGE,
                    "Merge of {incoming_count} phrases into {held_count} across {workers} workers"
                );
                self.merge_parallel(other, workers);
            } else {
                log::trace!(
                    target: targets::MERGE,
                    "Merge of {incoming_count} phrases into {held_count} on the calling thread"
                );
                self.merge_sequential(other);
            }
        }
    }

    // The two-way sweep: each held phrase against each not-yet-dropped incoming
    // phrase, dropping whichever side is absorbed. Survivors are cloned only when
    // finally inserted.
    fn merge_sequential(&mut self, other: &Self) {
        let mut incoming: Vec<Option<&P>> = other.phrases.iter().map(Some).collect();

        self.phrases.retain(|held| {
            for slot in incoming.iter_mut() {
                if let Some(candidate) = *slot {
                    if absorbs(held, candidate) {
                        *slot = None;
                    } else if absorbs(candidate, held) {
                        // The candidate absorbs the held phrase; later candidates
                        // cannot also relate to it, so no need to finish the scan.
                        return false;
                    }
                }
            }
            true
        });

        for candidate in incoming.into_iter().flatten() {
            self.phrases.insert(candidate.clone());
        }
    }

    // Contiguous ranges of the incoming phrases go to scoped workers; each reads
    // the held phrases immutably and reports what it would remove and insert. A
    // worker marking a held phrase and another worker dropping its own candidate
    // can never disagree about a pair, as that would need two held phrases in
    // subset relation.
    fn merge_parallel(&mut self, other: &Self, workers: usize) {
        let held_view: Vec<&P> = self.phrases.iter().collect();
        let incoming_view: Vec<&P> = other.phrases.iter().collect();

        let reports: Vec<std::thread::Result<WorkerReport<P>>> = std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            for worker in 0..workers {
                // Truncating division gives the most even contiguous split.
                let start = worker * incoming_view.len() / workers;
                let end = (worker + 1) * incoming_view.len() / workers;
                let range = &incoming_view[start..end];
                let held_view = &held_view;

                handles.push(scope.spawn(move || {
                    let mut report = WorkerReport {
                        absorbed_held: Vec::new(),
                        survivors: Vec::with_capacity(range.len()),
                    };

                    'candidates: for candidate in range {
                        for (index, held) in held_view.iter().enumerate() {
                            if absorbs(*candidate, *held) {
                                // One candidate may absorb several held phrases,
                                // so the scan continues.
                                report.absorbed_held.push(index);
                            } else if absorbs(*held, *candidate) {
                                report.survivors.push(None);
                                continue 'candidates;
                            }
                        }
                        report.survivors.push(Some((*candidate).clone()));
                    }

                    report
                }));
            }
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        // Every worker has been joined; if any panicked, re-raise the first payload.
        let mut absorbed_held: Vec<usize> = Vec::new();
        let mut survivors: Vec<P> = Vec::new();
        let mut panic: Option<Box<dyn std::any::Any + Send>> = None;
        for report in reports {
            match report {
                Ok(mut report) => {
                    absorbed_held.append(&mut report.absorbed_held);
                    survivors.extend(report.survivors.into_iter().flatten());
                }
                Err(payload) => {
                    if panic.is_none() {
                        panic = Some(payload);
                    }
                }
            }
        }
        if let Some(payload) = panic {
            std::panic::resume_unwind(payload);
        }

        // Commit: resolve the marked indices against the view, then mutate.
        absorbed_held.sort_unstable();
        absorbed_held.dedup();
        let doomed: Vec<P> = absorbed_held.iter().map(|&index| held_view[index].clone()).collect();
        drop(held_view);

        for phrase in &doomed {
            self.phrases.remove(phrase);
        }
        for phrase in survivors {
            self.phrases.insert(phrase);
        }
    }
}
