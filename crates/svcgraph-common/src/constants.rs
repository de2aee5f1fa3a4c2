//! System-wide constants and default paths.

/// Service description directories searched by the supervisor when running
/// as the system instance, in priority order.
pub const DEFAULT_SERVICE_DIRS: &[&str] = &[
    "/etc/dinit.d",
    "/run/dinit.d",
    "/usr/local/lib/dinit.d",
    "/lib/dinit.d",
];

/// Suffix marking a dependency token as a directory of dependencies.
pub const DIRECTORY_DEP_SUFFIX: &str = ".d";

/// Separator between a service name and its instance argument.
pub const PARAMETER_SEPARATOR: char = '@';

/// Name of the graph emitted in DOT output.
pub const DOT_GRAPH_NAME: &str = "DinitServices";

/// Output path meaning "write to standard output".
pub const STDOUT_PATH: &str = "-";

/// Strips an instance argument (`@...`) from a service or file name.
///
/// ```
/// use svcgraph_common::constants::strip_parameter;
///
/// assert_eq!(strip_parameter("getty@tty1"), "getty");
/// assert_eq!(strip_parameter("boot"), "boot");
/// ```
#[must_use]
pub fn strip_parameter(name: &str) -> &str {
    name.split_once(PARAMETER_SEPARATOR)
        .map_or(name, |(base, _)| base)
}
