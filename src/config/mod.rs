/*!
Configuration of sentence operations.

A sentence carries no configuration of its own.
Instead, the operations whose execution strategy can vary --- at present, only [merge](crate::structures::sentence::Sentence::merge) and the operations built on it --- take a configuration by reference.

The knobs are scheduling parameters, not semantics.
Any configuration produces the same sentence, and the defaults are tuned values rather than requirements.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of worker threads a multi-threaded merge distributes incoming phrases over.
    ///
    /// A merge with a single worker always stays on the calling thread.
    pub merge_workers: ConfigOption<usize>,

    /// The additive constant of the merge cost model.
    ///
    /// A merge of B incoming phrases into A held phrases over N workers goes multi-threaded when
    /// `A * (B / N) + N * N + C < A * B`, with C this constant.
    /// The default was fitted against benchmark traces by the original authors of the model.
    pub merge_cost_constant: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            merge_workers: ConfigOption {
                name: "merge_workers",
                min: 1,
                max: usize::MAX,
                value: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            },

            merge_cost_constant: ConfigOption {
                name: "merge_cost_constant",
                min: 0,
                max: usize::MAX,
                value: 3000,
            },
        }
    }
}

impl Config {
    /// A configuration under which every merge happens on the calling thread.
    pub fn sequential() -> Self {
        let mut config = Config::default();
        config.merge_workers.value = 1;
        config
    }
}
