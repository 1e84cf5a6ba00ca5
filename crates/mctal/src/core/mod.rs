// Modules under core, split into files for convenience
mod cell;
mod dimensions;
mod header;
mod particle;
mod tally;

// Re-exports of the key public data structures
pub use cell::{Cell, TallyResult};
pub use dimensions::{BinIndex, Dimensions};
pub use header::Header;
pub use particle::{describe, particle, shorthand, ParticleCode, ShorthandCode, PARTICLES, SHORTHAND};
pub use tally::{
    BinKind, EnergyEdge, Modifier, Tally, TallyKind, Tfc, TfcResult, UNBOUNDED_ENERGY,
};
