/// Main configuration module.
///
/// Re-exports submodules for playback and translator configuration.
pub mod playback;
pub mod translator;
