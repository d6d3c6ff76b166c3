//! Process color assignment for Gantt rendering.
//!
//! Colors are keyed by a process's position in the caller-supplied batch,
//! never by completion order, so a process keeps its color across
//! algorithms. Batches larger than the palette wrap around.

/// Fixed display palette.
pub const PALETTE: [&str; 10] = [
    "hsl(var(--chart-primary))",
    "hsl(var(--chart-secondary))",
    "hsl(var(--chart-accent))",
    "hsl(var(--chart-success))",
    "hsl(var(--chart-warning))",
    "hsl(var(--chart-error))",
    "hsl(263 70% 50%)",
    "hsl(280 80% 60%)",
    "hsl(200 100% 60%)",
    "hsl(142 76% 46%)",
];

/// Color for the process at input ordinal `index`.
#[inline]
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
