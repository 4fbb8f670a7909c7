/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [merging](crate::procedures) sentences, in particular which execution path a merge takes.
    pub const MERGE: &str = "merge";

    /// Logs related to cross products.
    pub const CROSS: &str = "cross";

    /// Logs related to substitution (resolve/replace).
    pub const RESOLVE: &str = "resolve";

    /// Logs related to placeholder extraction.
    pub const EXTRACT: &str = "extract";

    /// Logs related to reading and writing sentences as text.
    pub const TEXT: &str = "text";
}
