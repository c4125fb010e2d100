mod errors;
mod invariants;
mod motion;
mod single_seed;
mod timeline;
mod two_seeds;
