//! The demo routine: print, sort by override, print again, filter.

use std::io::Write;
use virtsort_core::{Behavior, Variant, VirtsortError};
use virtsort_std::{Lineup, Mid};

/// Header written before the lineup in construction order.
pub const UNSORTED_HEADER: &str = "Print the list unsorted";
/// Header written before the lineup sorted by `announce` override.
pub const SORTED_HEADER: &str = "Print the list sorted";
/// Header written before the members sharing `Mid`'s `announce`.
pub const FILTERED_HEADER: &str = "Find all of the version with B";

/// Run the full demo on the boxed demo lineup, writing to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<(), VirtsortError> {
    // Only consulted for its resolved `announce` override.
    let probe = Mid;
    run_lineup(Lineup::demo(), &probe, out)
}

/// Print `lineup`, sort it by `announce` override, print it again, then
/// print the members whose `announce` is the same body as `probe`'s.
pub fn run_lineup<V, W>(
    mut lineup: Lineup<V>,
    probe: &dyn Variant,
    out: &mut W,
) -> Result<(), VirtsortError>
where
    V: Variant,
    W: Write,
{
    #[cfg(feature = "tracing")]
    tracing::info!(members = lineup.len(), "printing unsorted lineup");
    writeln!(out, "{UNSORTED_HEADER}")?;
    lineup.print(out)?;

    #[cfg(feature = "tracing")]
    tracing::info!("printing sorted lineup");
    writeln!(out, "{SORTED_HEADER}")?;
    lineup.sort_by_override(Behavior::Announce);
    lineup.print(out)?;

    #[cfg(feature = "tracing")]
    tracing::info!(probe = %probe.resolve(Behavior::Announce), "printing matching members");
    writeln!(out, "{FILTERED_HEADER}")?;
    lineup.print_matching(probe, Behavior::Announce, out)?;

    out.flush()?;
    Ok(())
}
